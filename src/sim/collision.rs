//! Axis-aligned collision detection
//!
//! Figure and cacti are plain rectangles. Overlap uses strict inequalities,
//! so rectangles that only share an edge are not colliding.

use glam::Vec2;

/// Axis-aligned rectangle in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Check whether two rectangles overlap with non-zero area
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_figure_hits_grounded_cactus() {
        let figure = rect(50.0, 150.0, 40.0, 40.0);
        let cactus = rect(80.0, 160.0, 20.0, 40.0);
        assert!(overlaps(&figure, &cactus));
        assert!(overlaps(&cactus, &figure));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let figure = rect(50.0, 150.0, 40.0, 40.0);
        // Shares the figure's right edge
        assert!(!overlaps(&figure, &rect(90.0, 160.0, 20.0, 40.0)));
        // Shares the figure's left edge
        assert!(!overlaps(&figure, &rect(30.0, 160.0, 20.0, 40.0)));
        // Figure bottom resting exactly on the cactus top
        assert!(!overlaps(&rect(60.0, 120.0, 40.0, 40.0), &rect(70.0, 160.0, 20.0, 40.0)));
    }

    #[test]
    fn test_clearing_jump_misses() {
        let figure = rect(50.0, 100.0, 40.0, 40.0);
        let cactus = rect(60.0, 160.0, 20.0, 40.0);
        assert!(!overlaps(&figure, &cactus));
    }

    proptest! {
        #[test]
        fn prop_identical_rects_collide(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.5f32..200.0,
            h in 0.5f32..200.0,
        ) {
            let r = rect(x, y, w, h);
            prop_assert!(overlaps(&r, &r));
        }

        #[test]
        fn prop_separated_on_x_never_collide(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.5f32..100.0,
            h in 0.5f32..100.0,
            gap in 0.0f32..100.0,
            oy in -500.0f32..500.0,
            ow in 0.5f32..100.0,
            oh in 0.5f32..100.0,
        ) {
            let a = rect(x, y, w, h);
            let b = rect(a.right() + gap, oy, ow, oh);
            prop_assert!(!overlaps(&a, &b));
            prop_assert!(!overlaps(&b, &a));
        }

        #[test]
        fn prop_separated_on_y_never_collide(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.5f32..100.0,
            h in 0.5f32..100.0,
            gap in 0.0f32..100.0,
            ox in -500.0f32..500.0,
            ow in 0.5f32..100.0,
            oh in 0.5f32..100.0,
        ) {
            let a = rect(x, y, w, h);
            let b = rect(ox, a.bottom() + gap, ow, oh);
            prop_assert!(!overlaps(&a, &b));
            prop_assert!(!overlaps(&b, &a));
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 0.5f32..50.0, ah in 0.5f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            bw in 0.5f32..50.0, bh in 0.5f32..50.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
