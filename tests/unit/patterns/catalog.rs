//! Tests for the pattern catalog, menu order and name parsing

#[cfg(test)]
mod tests {
    use halftile::PatternError;
    use halftile::patterns::tiles;
    use halftile::patterns::{Pattern, PatternFlags};
    use halftile::spatial::canvas::{Canvas, Rect};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    // Menu order is alphabetical by display name
    #[test]
    fn test_menu_is_alphabetical() {
        let names: Vec<&str> = Pattern::ALL.iter().map(|p| p.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();

        assert_eq!(names, sorted);
        assert_eq!(names.len(), 10);
        assert_eq!(
            names.iter().collect::<HashSet<_>>().len(),
            10,
            "names must be unique"
        );
        assert_eq!(names.first(), Some(&"Crosshatch"));
        assert_eq!(names.get(5), Some(&"Square rings"));
        assert_eq!(names.get(6), Some(&"Squares"));
    }

    // Menu numbering starts at one
    #[test]
    fn test_menu_numbers() {
        let menu: Vec<(usize, Pattern)> = Pattern::menu().collect();
        assert_eq!(menu.first(), Some(&(1, Pattern::Crosshatch)));
        assert_eq!(menu.last(), Some(&(10, Pattern::Xs)));

        assert_eq!(Pattern::from_menu_number(0), None);
        assert_eq!(Pattern::from_menu_number(1), Some(Pattern::Crosshatch));
        assert_eq!(Pattern::from_menu_number(10), Some(Pattern::Xs));
        assert_eq!(Pattern::from_menu_number(11), None);
    }

    // Names parse in several spellings and menu numbers are accepted
    #[test]
    fn test_parse_names() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>().ok(), Some(pattern));
            assert_eq!(pattern.to_string().parse::<Pattern>().ok(), Some(pattern));
        }

        assert_eq!("square-rings".parse::<Pattern>().ok(), Some(Pattern::SquareRings));
        assert_eq!("HORIZONTAL_LINES".parse::<Pattern>().ok(), Some(Pattern::HorizontalLines));
        assert_eq!(" discs ".parse::<Pattern>().ok(), Some(Pattern::Discs));
        assert_eq!("5".parse::<Pattern>().ok(), Some(Pattern::Rings));
    }

    // Unknown names and out-of-range numbers are rejected
    #[test]
    fn test_parse_unknown() {
        for bad in ["Hexagons", "0", "11", ""] {
            assert!(
                matches!(
                    bad.parse::<Pattern>(),
                    Err(PatternError::UnknownPatternName { ref name }) if name == bad
                ),
                "'{bad}' should be rejected"
            );
        }
    }

    // Only stippling consumes randomness
    #[test]
    fn test_determinism_flag() {
        let random: Vec<Pattern> = Pattern::ALL
            .into_iter()
            .filter(|p| !p.is_deterministic())
            .collect();
        assert_eq!(random, vec![Pattern::Stippling]);
    }

    // Default flags enable the adjustment and disable chaotic spacing
    #[test]
    fn test_default_flags() {
        let flags = PatternFlags::default();
        assert!(flags.adjusted);
        assert!(!flags.chaotic);
    }

    // Dispatch draws the same thing as calling the generator directly
    #[test]
    fn test_draw_dispatch() {
        let cell = Rect::cell(0, 0, 12);
        let mut rng = StdRng::seed_from_u64(1);

        let mut via_catalog = Canvas::blank(12, 12);
        Pattern::Discs.draw(&mut via_catalog.cell(cell), 0.3, PatternFlags::default(), &mut rng);

        let mut direct = Canvas::blank(12, 12);
        tiles::discs(&mut direct.cell(cell), 0.3);

        assert_eq!(via_catalog, direct);

        let flags = PatternFlags {
            adjusted: false,
            chaotic: false,
        };
        let mut rings_catalog = Canvas::blank(12, 12);
        Pattern::Rings.draw(&mut rings_catalog.cell(cell), 1.0, flags, &mut rng);
        assert_eq!(rings_catalog.ink_count(), 0);
    }

    // Every pattern leaves a white cell white except the adjusted rings rim
    #[test]
    fn test_white_cells() {
        let flags = PatternFlags {
            adjusted: false,
            chaotic: false,
        };
        for pattern in Pattern::ALL {
            let mut canvas = Canvas::blank(16, 16);
            let mut rng = StdRng::seed_from_u64(0);
            pattern.draw(&mut canvas.cell(Rect::cell(0, 0, 16)), 1.0, flags, &mut rng);
            assert_eq!(canvas.ink_count(), 0, "{pattern} should leave white cells empty");
        }
    }
}
