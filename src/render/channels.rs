//! Colour handling: grayscale conversion or independent per-channel rendering

use image::DynamicImage;
use ndarray::Array2;
use rayon::prelude::*;

use crate::io::error::Result;
use crate::io::image::{canvas_to_image, merge_channels, split_channels, to_luma};
use crate::patterns::Pattern;
use crate::render::patterner::{Patterner, RenderObserver};

/// Channel names in split order
pub const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

/// How a source image's colour is turned into rendered channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColourPlan {
    /// Convert to luma and render once
    Grayscale(Pattern),
    /// Render red, green and blue separately, each with its own pattern
    PerChannel([Pattern; 3]),
}

impl ColourPlan {
    /// Labels of the channels this plan renders, in order
    pub const fn channel_labels(&self) -> &'static [&'static str] {
        match self {
            Self::Grayscale(_) => &["luma"],
            Self::PerChannel(_) => &CHANNEL_NAMES,
        }
    }
}

/// Whether independent channels may be rendered concurrently
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// One channel after another
    Sequential,
    /// One worker per channel, joined before merging
    #[default]
    Parallel,
}

/// Render `image` according to `plan`
///
/// Each channel gets its own seed (`seed + channel`), so parallel and
/// sequential execution produce identical output.
///
/// # Errors
///
/// Returns an error if any channel fails to render or the channels cannot be merged
pub fn render_image(
    image: &DynamicImage,
    plan: ColourPlan,
    patterner: &Patterner,
    execution: Execution,
    observer: &dyn RenderObserver,
) -> Result<DynamicImage> {
    match plan {
        ColourPlan::Grayscale(pattern) => {
            let luma = to_luma(image);
            let canvas = patterner.render_observed(luma.view(), pattern, 0, observer)?;
            Ok(DynamicImage::ImageLuma8(canvas_to_image(&canvas)))
        }
        ColourPlan::PerChannel(patterns) => {
            let channels = split_channels(image);
            let render_channel =
                |(channel, (pixels, &pattern)): (usize, (&Array2<u8>, &Pattern))| {
                    patterner
                        .with_seed(patterner.seed().wrapping_add(channel as u64))
                        .render_observed(pixels.view(), pattern, channel, observer)
                };

            let canvases = match execution {
                Execution::Sequential => channels
                    .iter()
                    .zip(&patterns)
                    .enumerate()
                    .map(render_channel)
                    .collect::<Result<Vec<_>>>()?,
                Execution::Parallel => channels
                    .par_iter()
                    .zip(patterns.par_iter())
                    .enumerate()
                    .map(render_channel)
                    .collect::<Result<Vec<_>>>()?,
            };

            Ok(DynamicImage::ImageRgb8(merge_channels(&canvases)?))
        }
    }
}
