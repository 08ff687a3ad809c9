/*
Rotation of points and rectangles about an arbitrary origin.

Angles are in radians and are used as given (no wrapping into [-PI, PI]).
Positive angles turn from +X toward +Y, which is clockwise on screen since
Y points down.

    use collide2d::modules::rotation::{rotate_point, RotatedRectangle};

    let tip = rotate_point(vec2(10.0, 0.0), Vec2::ZERO, std::f32::consts::FRAC_PI_2);
    let rotated = RotatedRectangle::new(sprite_bounds, pivot, angle);
*/

use macroquad::math::{IVec2, Vec2};

use super::rectangle::Rectangle;

/// Rotates `point` about `origin` by `radians`.
#[inline]
pub fn rotate_point(point: Vec2, origin: Vec2, radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;

    Vec2::new(
        dx * cos - dy * sin + origin.x,
        dy * cos + dx * sin + origin.y,
    )
}

/// Integer version of [`rotate_point`]; the result is rounded to the nearest pixel.
#[inline]
pub fn rotate_ipoint(point: IVec2, origin: Vec2, radians: f32) -> IVec2 {
    rotate_point(point.as_vec2(), origin, radians).round().as_ivec2()
}

/// Rotated corners of `rect` in float precision: top-left, top-right,
/// bottom-right, bottom-left.
pub fn rotate_corners(rect: Rectangle, origin: Vec2, radians: f32) -> [Vec2; 4] {
    let left = rect.left() as f32;
    let right = rect.right() as f32;
    let top = rect.top() as f32;
    let bottom = rect.bottom() as f32;

    [
        rotate_point(Vec2::new(left, top), origin, radians),
        rotate_point(Vec2::new(right, top), origin, radians),
        rotate_point(Vec2::new(right, bottom), origin, radians),
        rotate_point(Vec2::new(left, bottom), origin, radians),
    ]
}

pub fn rotate_rectangle(rect: Rectangle, origin: Vec2, radians: f32) -> RotatedRectangle {
    RotatedRectangle::new(rect, origin, radians)
}

/// The four corners and the center of a rectangle after a rotation.
///
/// Only constructible from a source rectangle, so the corners always stay the
/// image of that rectangle under one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotatedRectangle {
    corners: [IVec2; 4],
    center: IVec2,
}

impl RotatedRectangle {
    pub fn new(rect: Rectangle, origin: Vec2, radians: f32) -> Self {
        let corners = rotate_corners(rect, origin, radians).map(|c| c.round().as_ivec2());
        let center = rotate_ipoint(rect.center(), origin, radians);
        Self { corners, center }
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left
    /// (as they were before the rotation).
    pub fn corners(&self) -> [IVec2; 4] {
        self.corners
    }

    pub fn p1(&self) -> IVec2 {
        self.corners[0]
    }

    pub fn p2(&self) -> IVec2 {
        self.corners[1]
    }

    pub fn p3(&self) -> IVec2 {
        self.corners[2]
    }

    pub fn p4(&self) -> IVec2 {
        self.corners[3]
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }
}
