/*
Sprite transforms for the transformed per-pixel test.

Matrices use macroquad's (glam) column-vector convention, so `a * b` applies
`b` first. A sprite drawn at `position`, pivoting on `origin` (in texture
pixels), scaled and rotated, maps its local pixel (x, y) to world space with

    let world = sprite_matrix(position, origin, scale, rotation)
        .transform_point3(vec3(x, y, 0.0));
*/

use macroquad::math::{Mat4, Vec2, Vec3};

use super::rectangle::Rectangle;

/// Local-to-world matrix of a sprite: move the pivot to the origin, scale,
/// rotate about Z, then move to `position`.
pub fn sprite_matrix(position: Vec2, origin: Vec2, scale: Vec2, rotation: f32) -> Mat4 {
    Mat4::from_translation(position.extend(0.0))
        * Mat4::from_rotation_z(rotation)
        * Mat4::from_scale(Vec3::new(scale.x, scale.y, 1.0))
        * Mat4::from_translation(Vec3::new(-origin.x, -origin.y, 0.0))
}

/// Axis-aligned bounds of an unrotated sprite. The position is truncated to
/// whole pixels before the pivot and scale are applied.
pub fn sprite_bounds(position: Vec2, origin: Vec2, scale: Vec2, width: i32, height: i32) -> Rectangle {
    let x = position.x as i32 as f32;
    let y = position.y as i32 as f32;
    Rectangle::new(
        (x - origin.x * scale.x) as i32,
        (y - origin.y * scale.y) as i32,
        (width as f32 * scale.x) as i32,
        (height as f32 * scale.y) as i32,
    )
}

/// Smallest integer rectangle containing `rect` after `transform`.
/// Used as the broad phase before a transformed per-pixel test.
pub fn transformed_bounds(rect: Rectangle, transform: &Mat4) -> Rectangle {
    transformed_region(
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.right() as f32, rect.bottom() as f32),
        transform,
    )
}

/// Same as [`transformed_bounds`] for a float region spanning `min` to `max`.
pub fn transformed_region(min: Vec2, max: Vec2, transform: &Mat4) -> Rectangle {
    let (left, top) = (min.x, min.y);
    let (right, bottom) = (max.x, max.y);

    let corners = [
        Vec3::new(left, top, 0.0),
        Vec3::new(right, top, 0.0),
        Vec3::new(right, bottom, 0.0),
        Vec3::new(left, bottom, 0.0),
    ]
    .map(|c| transform.transform_point3(c).truncate());

    let min = corners.iter().copied().fold(Vec2::splat(f32::MAX), Vec2::min);
    let max = corners.iter().copied().fold(Vec2::splat(f32::MIN), Vec2::max);
    let min = min.floor();
    let max = max.ceil();

    Rectangle::new(
        min.x as i32,
        min.y as i32,
        (max.x - min.x) as i32,
        (max.y - min.y) as i32,
    )
}

/// Unit vector pointing from `position` toward `destination`; zero when they coincide.
pub fn direction(position: Vec2, destination: Vec2) -> Vec2 {
    (destination - position).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.distance(b) < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity_sprite() {
        let m = sprite_matrix(Vec2::ZERO, Vec2::ZERO, Vec2::ONE, 0.0);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_sprite_matrix_order() {
        // pivot (2, 1), doubled, quarter turn, placed at (100, 50)
        let m = sprite_matrix(Vec2::new(100.0, 50.0), Vec2::new(2.0, 1.0), Vec2::splat(2.0), FRAC_PI_2);
        let pivot = m.transform_point3(Vec3::new(2.0, 1.0, 0.0)).truncate();
        assert_close(pivot, Vec2::new(100.0, 50.0));
        // one pixel right of the pivot: scaled to 2, then turned onto +Y
        let right = m.transform_point3(Vec3::new(3.0, 1.0, 0.0)).truncate();
        assert_close(right, Vec2::new(100.0, 52.0));
    }

    #[test]
    fn test_sprite_bounds_truncates() {
        let r = sprite_bounds(Vec2::new(10.7, 20.2), Vec2::new(4.0, 2.0), Vec2::new(1.5, 1.0), 8, 4);
        assert_eq!(r, Rectangle::new(4, 18, 12, 4));
    }

    #[test]
    fn test_transformed_bounds_translation() {
        let m = Mat4::from_translation(Vec3::new(5.0, -3.0, 0.0));
        let r = transformed_bounds(Rectangle::new(0, 0, 10, 4), &m);
        assert_eq!(r, Rectangle::new(5, -3, 10, 4));
    }

    #[test]
    fn test_transformed_bounds_rotation_contains_corners() {
        let m = sprite_matrix(Vec2::new(50.0, 50.0), Vec2::new(5.0, 5.0), Vec2::ONE, 0.3);
        let r = transformed_bounds(Rectangle::new(0, 0, 10, 10), &m);
        for corner in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            let p = m.transform_point3(Vec3::new(corner.0, corner.1, 0.0));
            assert!(p.x >= r.left() as f32 && p.x <= r.right() as f32);
            assert!(p.y >= r.top() as f32 && p.y <= r.bottom() as f32);
        }
    }

    #[test]
    fn test_transformed_region_half_pixel_shift() {
        let m = sprite_matrix(Vec2::new(1.5, 0.0), Vec2::ZERO, Vec2::splat(4.0), 0.0);
        let r = transformed_region(Vec2::splat(-0.5), Vec2::splat(0.5), &m);
        assert_eq!(r, Rectangle::new(-1, -2, 5, 4));
    }

    #[test]
    fn test_direction() {
        assert_close(direction(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), Vec2::new(0.6, 0.8));
        assert_eq!(direction(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
    }
}
