//! Stage-space geometry: points, axis-aligned rects and the screen -> stage mapping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner (canvas convention, y grows down).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rect of the given size whose centre sits on `center`.
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width * 0.5,
            y: center.y - height * 0.5,
            width,
            height,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x
    }
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }
    pub fn y_min(&self) -> f64 {
        self.y
    }
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Half-open containment: the min edges are inside, the max edges are not, so two
    /// items sharing an edge never both claim the same point.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min() && p.x < self.x_max() && p.y >= self.y_min() && p.y < self.y_max()
    }

    /// Strict AABB overlap. Rects that only touch along an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x_max() > self.x_min()
            && other.x_min() < self.x_max()
            && other.y_max() > self.y_min()
            && other.y_min() < self.y_max()
    }

    /// True when the rect has a finite position and a positive, finite area.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Maps canvas-relative screen pixels onto the fixed logical stage.
///
/// The stage is letterboxed into the canvas: uniformly scaled to fit and centred, the same
/// offset/zoom arrangement a camera uses for a tile map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScreenTransform {
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub fn fit(canvas_w: f64, canvas_h: f64, stage_w: f64, stage_h: f64) -> Self {
        if canvas_w <= 0.0 || canvas_h <= 0.0 || stage_w <= 0.0 || stage_h <= 0.0 {
            return Self::IDENTITY;
        }
        let scale = (canvas_w / stage_w).min(canvas_h / stage_h);
        Self {
            offset_x: (canvas_w - stage_w * scale) * 0.5,
            offset_y: (canvas_h - stage_h * scale) * 0.5,
            scale,
        }
    }

    pub fn screen_to_local(&self, p: Point) -> Point {
        Point::new((p.x - self.offset_x) / self.scale, (p.y - self.offset_y) / self.scale)
    }

    pub fn local_to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(29.9, 29.9)));
        assert!(!r.contains(Point::new(30.0, 15.0)));
        assert!(!r.contains(Point::new(15.0, 30.0)));
        assert!(!r.contains(Point::new(9.9, 15.0)));
    }

    #[test]
    fn overlap_requires_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(5.0, 20.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn centered_at_keeps_size() {
        let r = Rect::centered_at(Point::new(50.0, 40.0), 20.0, 10.0);
        assert_eq!(r, Rect::new(40.0, 35.0, 20.0, 10.0));
        assert_eq!(r.center(), Point::new(50.0, 40.0));
    }

    #[test]
    fn degenerate_rects_are_not_well_formed() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 1.0, -1.0).is_well_formed());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_well_formed());
    }

    #[test]
    fn fit_letterboxes_wide_canvas() {
        let t = ScreenTransform::fit(1600.0, 600.0, 800.0, 600.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.offset_x, 400.0);
        assert_eq!(t.offset_y, 0.0);
        assert_eq!(t.screen_to_local(Point::new(400.0, 0.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn screen_local_mapping_inverts() {
        let t = ScreenTransform::fit(400.0, 600.0, 800.0, 600.0);
        assert_eq!(t.scale, 0.5);
        let local = Point::new(200.0, 300.0);
        let screen = t.local_to_screen(local);
        assert_eq!(t.screen_to_local(screen), local);
    }

    #[test]
    fn fit_falls_back_to_identity_for_empty_canvas() {
        assert_eq!(ScreenTransform::fit(0.0, 600.0, 800.0, 600.0), ScreenTransform::IDENTITY);
    }
}
