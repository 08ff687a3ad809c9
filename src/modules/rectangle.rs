/*
Integer axis-aligned rectangle in pixel units.

Edges are half-open: a rectangle covers x in [left, right) and y in [top, bottom),
so two rectangles that only share an edge do not intersect. macroquad's float
`Rect::overlaps` counts touching edges, which is why the pixel tests use this type.
Empty rectangles never intersect anything.

Edge arithmetic saturates at the i32 range, so extreme values never overflow.
*/

use macroquad::math::{IVec2, Rect};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const EMPTY: Rectangle = Rectangle::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Center with integer division, so odd sizes round toward the top-left.
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of pixels covered; zero for empty or inverted rectangles.
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Strict overlap test; shared edges do not count.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Overlapping region, or `Rectangle::EMPTY` when the two do not intersect.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        if !self.intersects(other) {
            return Rectangle::EMPTY;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rectangle::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    pub fn offset(&self, delta: IVec2) -> Rectangle {
        Rectangle::new(
            self.x.saturating_add(delta.x),
            self.y.saturating_add(delta.y),
            self.width,
            self.height,
        )
    }

    /// Grows the rectangle by `horizontal` on the left and right and by
    /// `vertical` on the top and bottom.
    pub fn inflate(&self, horizontal: i32, vertical: i32) -> Rectangle {
        Rectangle::new(
            self.x.saturating_sub(horizontal),
            self.y.saturating_sub(vertical),
            self.width.saturating_add(horizontal.saturating_mul(2)),
            self.height.saturating_add(vertical.saturating_mul(2)),
        )
    }
}

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        Rect::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}
