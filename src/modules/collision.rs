/*
Lets us check for collisions between rectangles, circles and convex polygons.
The per-pixel tests live in pixel_collision.rs.

Use it from a game loop like:

    use collide2d::modules::collision::{polygon_collision, rectangles_intersect, subtract};

    if rectangles_intersect(player.bounds(), wall.bounds()) {
        player.position += subtract(player.bounds(), wall.bounds());
    }

    let hit = polygon_collision(&player_poly, &enemy_poly, player.velocity)?;
    if hit.will_intersect {
        // move by the velocity, then out of the other polygon
        player.position += player.velocity + hit.subtract.unwrap_or_default();
    }

All functions are pure; nothing here keeps state between calls.
*/

use macroquad::math::Vec2;

use super::error::Result;
use super::polygon::Polygon;
use super::rectangle::Rectangle;
use super::rotation::rotate_corners;

/// Displacement that moves `one` out of `two` along the shallower overlap axis.
///
/// A taller-than-wide overlap is a side hit and only X is set; a wider-than-tall
/// overlap only sets Y. A square overlap (a clean corner hit) sets both. Returns
/// zero when the rectangles do not overlap, or when an edge of `one` lines up
/// exactly with an edge of `two` on the resolved axis.
pub fn subtract(one: Rectangle, two: Rectangle) -> Vec2 {
    let overlap = one.intersect(&two);
    let mut sub = Vec2::ZERO;
    if overlap.is_empty() {
        return sub;
    }

    if overlap.height >= overlap.width {
        if one.right() > two.left() && one.right() < two.right() {
            sub.x -= one.right().saturating_sub(two.left()) as f32;
        } else if one.left() < two.right() && one.left() > two.left() {
            sub.x -= one.left().saturating_sub(two.right()) as f32;
        }
    }

    if overlap.width >= overlap.height {
        if one.bottom() > two.top() && one.bottom() < two.bottom() {
            sub.y -= one.bottom().saturating_sub(two.top()) as f32;
        } else if one.top() < two.bottom() && one.top() > two.top() {
            sub.y -= one.top().saturating_sub(two.bottom()) as f32;
        }
    }

    sub
}

/// AABB test. Rectangles that only share an edge do not intersect.
#[inline]
pub fn rectangles_intersect(bounds_a: Rectangle, bounds_b: Rectangle) -> bool {
    bounds_a.intersects(&bounds_b)
}

/// Circle test where each circle is given by the top-left corner of its
/// bounding square (so the center is `top_left + radius`), the way sprite
/// positions are usually stored. Tangent circles do not intersect.
pub fn circles_intersect(top_left_a: Vec2, radius_a: f32, top_left_b: Vec2, radius_b: f32) -> bool {
    circles_intersect_centered(
        top_left_a + Vec2::splat(radius_a),
        radius_a,
        top_left_b + Vec2::splat(radius_b),
        radius_b,
    )
}

/// Circle test on true centers. Tangent circles do not intersect.
#[inline]
pub fn circles_intersect_centered(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) < radius_a + radius_b
}

/// Outcome of a swept SAT test between two convex polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonCollision {
    /// The polygons overlap right now.
    pub intersect: bool,
    /// The first polygon overlaps the second somewhere along its sweep by `velocity`.
    pub will_intersect: bool,
    /// Minimum translation vector pushing the first polygon away from the second.
    /// `Some` exactly when `will_intersect` is true.
    pub subtract: Option<Vec2>,
}

/// Separating Axis Theorem test of `a` moving by `velocity` against a static `b`.
///
/// Both polygons must be convex. Fails only for the empty default polygon.
pub fn polygon_collision(a: &Polygon, b: &Polygon, velocity: Vec2) -> Result<PolygonCollision> {
    for polygon in [a, b] {
        if let Err(e) = polygon.validate() {
            log::warn!("Rejecting polygon in SAT test: {e}");
            return Err(e);
        }
    }

    let mut intersect = true;
    let mut will_intersect = true;
    let mut min_interval_distance = f32::INFINITY;
    let mut translation_axis = Vec2::ZERO;
    let center_offset = a.center() - b.center();

    for edge in a.edges().iter().chain(b.edges()) {
        // Axis perpendicular to the edge
        let axis = edge.perp().normalize();

        let (mut min_a, mut max_a) = project(axis, a);
        let (min_b, max_b) = project(axis, b);

        if interval_distance(min_a, max_a, min_b, max_b) > 0.0 {
            intersect = false;
        }

        // Stretch A's interval over the sweep
        let velocity_projection = axis.dot(velocity);
        if velocity_projection < 0.0 {
            min_a += velocity_projection;
        } else {
            max_a += velocity_projection;
        }

        let swept_distance = interval_distance(min_a, max_a, min_b, max_b);
        if swept_distance > 0.0 {
            will_intersect = false;
        }

        if !intersect && !will_intersect {
            break;
        }

        let swept_distance = swept_distance.abs();
        if swept_distance < min_interval_distance {
            min_interval_distance = swept_distance;
            translation_axis = if center_offset.dot(axis) < 0.0 { -axis } else { axis };
        }
    }

    Ok(PolygonCollision {
        intersect,
        will_intersect,
        subtract: will_intersect.then(|| translation_axis * min_interval_distance),
    })
}

/// True when `a` and `b` currently overlap. `velocity` only affects the
/// prediction half of the test, so pass `Vec2::ZERO` when there is none.
pub fn polygons_intersect(a: &Polygon, b: &Polygon, velocity: Vec2) -> Result<bool> {
    Ok(polygon_collision(a, b, velocity)?.intersect)
}

/// Checks two rectangles, each rotated about its own center, with SAT.
/// Zero-area rectangles never intersect.
pub fn rotated_rectangles_intersect(a: Rectangle, angle_a: f32, b: Rectangle, angle_b: f32) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let (Ok(poly_a), Ok(poly_b)) = (rotated_polygon(a, angle_a), rotated_polygon(b, angle_b)) else {
        return false;
    };

    polygons_intersect(&poly_a, &poly_b, Vec2::ZERO).unwrap_or(false)
}

fn rotated_polygon(rect: Rectangle, angle: f32) -> Result<Polygon> {
    let center = Vec2::new(
        rect.x as f32 + rect.width as f32 / 2.0,
        rect.y as f32 + rect.height as f32 / 2.0,
    );
    Polygon::new(rotate_corners(rect, center, angle).to_vec())
}

// Distance between [min_a, max_a] and [min_b, max_b]; negative when they overlap
#[inline]
fn interval_distance(min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> f32 {
    if min_a < min_b {
        min_b - max_a
    } else {
        min_a - max_b
    }
}

#[inline]
fn project(axis: Vec2, polygon: &Polygon) -> (f32, f32) {
    polygon
        .points()
        .iter()
        .map(|p| axis.dot(*p))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), d| (min.min(d), max.max(d)))
}
