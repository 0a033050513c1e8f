//! Tests for the canvas and its clipped fill primitives

#[cfg(test)]
mod tests {
    use halftile::io::configuration::{BACKGROUND, INK};
    use halftile::spatial::canvas::{Canvas, Rect};

    // A blank canvas is entirely background with the requested shape
    #[test]
    fn test_blank_canvas() {
        let canvas = Canvas::blank(7, 3);

        assert_eq!(canvas.width(), 7);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.ink_count(), 0);
        assert!(canvas.pixels().iter().all(|&v| v == BACKGROUND));
        assert_eq!(canvas.get(7, 0), None);
        assert!(Canvas::blank(0, 0).is_empty());
    }

    // Rectangles cover pixels whose centres lie inside them
    #[test]
    fn test_fill_rect_samples_pixel_centres() {
        let mut canvas = Canvas::blank(10, 10);
        canvas
            .cell(Rect::cell(0, 0, 10))
            .fill_rect(Rect::new(1.47, 1.47, 8.53, 8.53), INK);

        assert_eq!(canvas.ink_count(), 64);
        assert_eq!(canvas.get(0, 0), Some(BACKGROUND));
        assert_eq!(canvas.get(1, 1), Some(INK));
        assert_eq!(canvas.get(8, 8), Some(INK));
        assert_eq!(canvas.get(9, 9), Some(BACKGROUND));
    }

    // Draws never leave the painter's cell
    #[test]
    fn test_painter_clips_to_cell() {
        let mut canvas = Canvas::blank(8, 4);
        let cell = Rect::cell(1, 0, 4);
        canvas
            .cell(cell)
            .fill_rect(Rect::new(-100.0, -100.0, 100.0, 100.0), INK);

        assert_eq!(canvas.ink_count(), 16);
        assert_eq!(canvas.ink_count_in(cell), 16);
        assert_eq!(canvas.ink_count_in(Rect::cell(0, 0, 4)), 0);
    }

    // The inscribed ellipse of a 10px cell covers 80 pixel centres
    #[test]
    fn test_fill_ellipse() {
        let mut canvas = Canvas::blank(10, 10);
        let cell = Rect::cell(0, 0, 10);
        canvas.cell(cell).fill_ellipse(cell, INK);

        assert_eq!(canvas.ink_count(), 80);
        assert_eq!(canvas.get(0, 0), Some(BACKGROUND));
        assert_eq!(canvas.get(5, 5), Some(INK));
    }

    // Degenerate ellipses draw nothing
    #[test]
    fn test_empty_ellipse() {
        let mut canvas = Canvas::blank(10, 10);
        let mut painter = canvas.cell(Rect::cell(0, 0, 10));
        painter.fill_ellipse(Rect::new(5.0, 5.0, 5.0, 5.0), INK);
        painter.fill_ellipse(Rect::new(6.0, 6.0, 4.0, 4.0), INK);

        assert_eq!(canvas.ink_count(), 0);
    }

    // Polygons are filled by the even-odd rule at pixel centres
    #[test]
    fn test_fill_polygon_triangle() {
        let mut canvas = Canvas::blank(10, 10);
        canvas
            .cell(Rect::cell(0, 0, 10))
            .fill_polygon(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)], INK);

        assert_eq!(canvas.ink_count(), 45);
        assert_eq!(canvas.get(0, 0), Some(INK));
        assert_eq!(canvas.get(9, 9), Some(BACKGROUND));
    }

    // Fewer than three points is not a polygon
    #[test]
    fn test_fill_polygon_degenerate() {
        let mut canvas = Canvas::blank(4, 4);
        canvas
            .cell(Rect::cell(0, 0, 4))
            .fill_polygon(&[(0.0, 0.0), (4.0, 4.0)], INK);

        assert_eq!(canvas.ink_count(), 0);
    }

    // Lines are one pixel wide and stop at the cell edge
    #[test]
    fn test_line_clipped_and_end_exclusive() {
        let mut canvas = Canvas::blank(10, 20);
        canvas
            .cell(Rect::cell(0, 0, 10))
            .line((3.0, 0.0), (3.0, 20.0), INK);

        assert_eq!(canvas.ink_count(), 10);
        assert_eq!(canvas.get(3, 9), Some(INK));
        assert_eq!(canvas.get(3, 10), Some(BACKGROUND));

        let mut short = Canvas::blank(10, 10);
        short
            .cell(Rect::cell(0, 0, 10))
            .line((0.0, 4.0), (10.0, 4.0), INK);
        assert_eq!(short.ink_count(), 10);
        assert!((0..10).all(|x| short.get(x, 4) == Some(INK)));
    }

    // Only the part of a very long segment inside the cell is stepped through
    #[test]
    fn test_long_line_clipped() {
        let mut canvas = Canvas::blank(10, 10);
        canvas
            .cell(Rect::cell(0, 0, 10))
            .line((2.0, -1e12), (2.0, 1e12), INK);

        assert_eq!(canvas.ink_count(), 10);
        assert!((0..10).all(|y| canvas.get(2, y) == Some(INK)));
    }

    // Cells overhanging the canvas report only their visible part
    #[test]
    fn test_visible_size() {
        let mut canvas = Canvas::blank(25, 12);
        assert_eq!(canvas.cell(Rect::cell(0, 0, 10)).visible_size(), (10, 10));
        assert_eq!(canvas.cell(Rect::cell(2, 1, 10)).visible_size(), (5, 2));
        assert_eq!(canvas.cell(Rect::cell(3, 0, 10)).visible_size(), (0, 10));
    }

    // Later draws overwrite earlier ones within a cell
    #[test]
    fn test_later_draws_override() {
        let mut canvas = Canvas::blank(10, 10);
        let cell = Rect::cell(0, 0, 10);
        let mut painter = canvas.cell(cell);
        painter.fill_rect(cell, INK);
        painter.fill_rect(cell.inset(2.0), BACKGROUND);

        assert_eq!(canvas.ink_count(), 100 - 36);
    }

    // Rectangle helpers
    #[test]
    fn test_rect_geometry() {
        let cell = Rect::cell(2, 3, 8);
        assert_eq!(cell, Rect::new(16.0, 24.0, 24.0, 32.0));
        assert!((cell.width() - 8.0).abs() < f64::EPSILON);
        assert!((cell.height() - 8.0).abs() < f64::EPSILON);
        assert_eq!(cell.center(), (20.0, 28.0));
        assert!(cell.inset(4.0).is_empty());
        assert!(!cell.inset(3.9).is_empty());
    }
}
