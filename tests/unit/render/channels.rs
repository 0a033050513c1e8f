//! Tests for grayscale and per-channel colour rendering

#[cfg(test)]
mod tests {
    use halftile::io::image::split_channels;
    use halftile::patterns::Pattern;
    use halftile::render::Silent;
    use halftile::render::channels::{CHANNEL_NAMES, ColourPlan, Execution, render_image};
    use halftile::render::patterner::Patterner;
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

    fn patterner() -> Patterner {
        Patterner::new(10).unwrap().with_quality(2).unwrap()
    }

    // Grayscale plans produce a single-channel image at the canvas size
    #[test]
    fn test_grayscale_plan() {
        let source = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 25, Luma([100])));
        let result = render_image(
            &source,
            ColourPlan::Grayscale(Pattern::Discs),
            &patterner(),
            Execution::Sequential,
            &Silent,
        )
        .unwrap();

        let luma = result.as_luma8().expect("grayscale output");
        assert_eq!(luma.dimensions(), (80, 40));
        assert!(luma.pixels().any(|p| p.0 == [0]));
    }

    // Each channel is rendered independently from its own intensities
    #[test]
    fn test_per_channel_plan() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([255, 0, 0])));
        let result = render_image(
            &source,
            ColourPlan::PerChannel([Pattern::Squares; 3]),
            &patterner(),
            Execution::Parallel,
            &Silent,
        )
        .unwrap();

        let rgb = result.as_rgb8().expect("rgb output");
        assert_eq!(rgb.dimensions(), (40, 40));
        assert!(rgb.pixels().all(|p| p.0 == [255, 0, 0]));
    }

    // Parallel and sequential execution agree, stippling included
    #[test]
    fn test_parallel_matches_sequential() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_fn(30, 30, |x, y| {
            Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
        }));
        let plan = ColourPlan::PerChannel([Pattern::Stippling, Pattern::Rings, Pattern::Stippling]);

        let parallel =
            render_image(&source, plan, &patterner(), Execution::Parallel, &Silent).unwrap();
        let sequential =
            render_image(&source, plan, &patterner(), Execution::Sequential, &Silent).unwrap();

        assert_eq!(parallel.as_bytes(), sequential.as_bytes());
    }

    // Channel c is drawn with pattern c and seed + c
    #[test]
    fn test_each_channel_uses_its_own_pattern() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_fn(30, 30, |x, y| {
            Rgb([(x * 8) as u8, (y * 8) as u8, 90])
        }));
        let patterns = [Pattern::Squares, Pattern::Stippling, Pattern::Plus];
        let base = patterner();

        for execution in [Execution::Sequential, Execution::Parallel] {
            let result = render_image(
                &source,
                ColourPlan::PerChannel(patterns),
                &base,
                execution,
                &Silent,
            )
            .unwrap();
            let rgb = result.as_rgb8().expect("rgb output");

            for (channel, pattern) in patterns.into_iter().enumerate() {
                let pixels = split_channels(&source);
                let expected = base
                    .with_seed(base.seed() + channel as u64)
                    .render(pixels[channel].view(), pattern)
                    .unwrap();
                assert!(
                    rgb.enumerate_pixels()
                        .all(|(x, y, p)| expected.get(x as usize, y as usize) == Some(p.0[channel])),
                    "channel {channel} under {execution:?}"
                );
            }
        }
    }

    // Channel labels follow the plan
    #[test]
    fn test_channel_labels() {
        assert_eq!(ColourPlan::Grayscale(Pattern::Xs).channel_labels(), &["luma"]);
        assert_eq!(
            ColourPlan::PerChannel([Pattern::Xs; 3]).channel_labels(),
            &CHANNEL_NAMES
        );
        assert_eq!(Execution::default(), Execution::Parallel);
    }
}
