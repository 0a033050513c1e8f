//! Image decoding, channel conversion and export

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::io::configuration::BACKGROUND;
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::spatial::canvas::Canvas;

/// Decode the image at `path`
///
/// # Errors
///
/// Returns an error if:
/// - No file exists at `path`
/// - The file is not a decodable image
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(PatternError::ImageNotFound {
            path: path.to_path_buf(),
            searched: Vec::new(),
        });
    }
    image::open(path).map_err(|e| PatternError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// True when the image carries more than one colour channel
pub fn has_colour(image: &DynamicImage) -> bool {
    image.color().has_color()
}

/// Luma channel as a `[y, x]` array
pub fn to_luma(image: &DynamicImage) -> Array2<u8> {
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let Luma([value]) = *luma.get_pixel(x as u32, y as u32);
        value
    })
}

/// Red, green and blue channels as `[y, x]` arrays
pub fn split_channels(image: &DynamicImage) -> [Array2<u8>; 3] {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    std::array::from_fn(|channel| {
        Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            rgb.get_pixel(x as u32, y as u32)
                .0
                .get(channel)
                .copied()
                .unwrap_or(BACKGROUND)
        })
    })
}

/// Convert a rendered canvas into a grayscale image
pub fn canvas_to_image(canvas: &Canvas) -> GrayImage {
    GrayImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
        Luma([canvas
            .get(x as usize, y as usize)
            .unwrap_or(BACKGROUND)])
    })
}

/// Merge three equally sized canvases into an RGB image
///
/// # Errors
///
/// Returns an error if there are not exactly three canvases or their sizes differ
pub fn merge_channels(canvases: &[Canvas]) -> Result<RgbImage> {
    let [red, green, blue] = canvases else {
        return Err(PatternError::ChannelMismatch {
            expected: "3 channels".to_string(),
            found: format!("{} channels", canvases.len()),
        });
    };

    let size = (red.width(), red.height());
    for other in [green, blue] {
        let other_size = (other.width(), other.height());
        if other_size != size {
            return Err(PatternError::ChannelMismatch {
                expected: format!("{}x{}", size.0, size.1),
                found: format!("{}x{}", other_size.0, other_size.1),
            });
        }
    }

    Ok(RgbImage::from_fn(size.0 as u32, size.1 as u32, |x, y| {
        let (x, y) = (x as usize, y as usize);
        Rgb([red, green, blue].map(|canvas| canvas.get(x, y).unwrap_or(BACKGROUND)))
    }))
}

/// Resize `image` to `size` and save it, the extension choosing the codec
///
/// # Errors
///
/// Returns an error if:
/// - Either image is empty
/// - The parent directory cannot be created
/// - The extension is unknown or the file cannot be written
pub fn scale_and_save(image: &DynamicImage, size: (u32, u32), output_path: &Path) -> Result<()> {
    if image.width() == 0 || image.height() == 0 || size.0 == 0 || size.1 == 0 {
        return Err(invalid_parameter(
            "size",
            &format!("{}x{}", size.0, size.1),
            &"cannot save an empty image",
        ));
    }

    let scaled = image.resize_exact(size.0, size.1, FilterType::Lanczos3);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    scaled
        .save(output_path)
        .map_err(|e| PatternError::SaveFailed {
            path: output_path.to_path_buf(),
            source: e,
        })
}
