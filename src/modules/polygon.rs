/*
Convex polygon used by the SAT test.

Points are kept in insertion order; consecutive points (wrapping at the end)
form the edges. Every constructor and `set_*` call validates the points and
rebuilds the edge list, so `points()` and `edges()` can never drift apart.

    let mut hitbox = Polygon::from_rect(Rectangle::new(0, 0, 16, 16))?;
    hitbox.offset(vec2(4.0, 0.0));
*/

use macroquad::math::{IVec2, Vec2};

use super::error::{PolygonDefect, Result};
use super::rectangle::Rectangle;
use super::rotation::RotatedRectangle;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
    edges: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        validate(&points)?;
        let edges = build_edges(&points);
        Ok(Self { points, edges })
    }

    /// Four corners in clockwise screen order: top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn from_rect(rect: Rectangle) -> Result<Self> {
        Self::new(rect_points(rect))
    }

    pub fn from_ipoints(points: &[IVec2]) -> Result<Self> {
        Self::new(points.iter().map(|p| p.as_vec2()).collect())
    }

    pub fn from_rotated(rect: &RotatedRectangle) -> Result<Self> {
        Self::from_ipoints(&rect.corners())
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// `edges()[i] == points()[i + 1] - points()[i]`, wrapping to the first point.
    pub fn edges(&self) -> &[Vec2] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of all points. Recomputed on every call; cache it in hot loops.
    pub fn center(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::ZERO;
        }
        let total: Vec2 = self.points.iter().copied().sum();
        total / self.points.len() as f32
    }

    /// Moves every point by `delta`. Edges are differences of points, so they
    /// are unchanged by a translation.
    pub fn offset(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    pub fn offset_xy(&mut self, dx: f32, dy: f32) {
        self.offset(Vec2::new(dx, dy));
    }

    /// Replaces the points. On error the polygon is left untouched.
    pub fn set_points(&mut self, points: Vec<Vec2>) -> Result<()> {
        *self = Self::new(points)?;
        Ok(())
    }

    pub fn set_ipoints(&mut self, points: &[IVec2]) -> Result<()> {
        *self = Self::from_ipoints(points)?;
        Ok(())
    }

    pub fn set_rect(&mut self, rect: Rectangle) -> Result<()> {
        *self = Self::from_rect(rect)?;
        Ok(())
    }

    pub fn set_polygon(&mut self, other: &Polygon) {
        self.points.clone_from(&other.points);
        self.edges.clone_from(&other.edges);
    }

    /// Ok when the polygon can take part in a SAT test. Only the empty default
    /// polygon can fail here, since every other path validates on the way in.
    pub fn validate(&self) -> Result<()> {
        validate(&self.points)
    }
}

impl TryFrom<Rectangle> for Polygon {
    type Error = super::error::CollisionError;

    fn try_from(rect: Rectangle) -> Result<Self> {
        Polygon::from_rect(rect)
    }
}

fn rect_points(rect: Rectangle) -> Vec<Vec2> {
    let left = rect.left() as f32;
    let right = rect.right() as f32;
    let top = rect.top() as f32;
    let bottom = rect.bottom() as f32;
    vec![
        Vec2::new(left, top),
        Vec2::new(right, top),
        Vec2::new(right, bottom),
        Vec2::new(left, bottom),
    ]
}

fn build_edges(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    (0..n).map(|i| points[(i + 1) % n] - points[i]).collect()
}

fn validate(points: &[Vec2]) -> Result<()> {
    if points.len() < 3 {
        return Err(PolygonDefect::TooFewPoints(points.len()).into());
    }
    let n = points.len();
    for i in 0..n {
        let edge = points[(i + 1) % n] - points[i];
        let length_squared = edge.length_squared();
        if length_squared == 0.0 || length_squared.is_nan() {
            return Err(PolygonDefect::ZeroLengthEdge { index: i }.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::error::CollisionError;

    fn square() -> Polygon {
        Polygon::from_rect(Rectangle::new(0, 0, 10, 10)).unwrap()
    }

    #[test]
    fn test_rect_corner_order() {
        let p = square();
        assert_eq!(
            p.points(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
                Vec2::new(0.0, 10.0)
            ]
        );
    }

    #[test]
    fn test_edges_wrap_around() {
        let p = square();
        assert_eq!(p.edges().len(), p.points().len());
        assert_eq!(
            p.edges(),
            &[
                Vec2::new(10.0, 0.0),
                Vec2::new(0.0, 10.0),
                Vec2::new(-10.0, 0.0),
                Vec2::new(0.0, -10.0)
            ]
        );
    }

    #[test]
    fn test_center_is_mean() {
        let tri = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(6.0, 0.0),
            Vec2::new(0.0, 3.0),
        ])
        .unwrap();
        assert_eq!(tri.center(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_offset_moves_points_keeps_edges() {
        let mut p = square();
        let edges = p.edges().to_vec();
        p.offset_xy(5.0, -2.0);
        assert_eq!(p.points()[0], Vec2::new(5.0, -2.0));
        assert_eq!(p.center(), Vec2::new(10.0, 3.0));
        assert_eq!(p.edges(), edges.as_slice());
    }

    #[test]
    fn test_set_rebuilds_edges() {
        let mut p = square();
        p.set_ipoints(&[IVec2::new(0, 0), IVec2::new(4, 0), IVec2::new(0, 4)])
            .unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.edges()[2], Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_failed_set_leaves_polygon_alone() {
        let mut p = square();
        let before = p.clone();
        assert!(p.set_points(vec![Vec2::ZERO, Vec2::X]).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn test_set_polygon_copies() {
        let mut p = Polygon::default();
        let src = square();
        p.set_polygon(&src);
        assert_eq!(p, src);
    }

    #[test]
    fn test_rejects_too_few_points() {
        let err = Polygon::new(vec![Vec2::ZERO, Vec2::ONE]).unwrap_err();
        assert!(matches!(
            err,
            CollisionError::InvalidPolygon(PolygonDefect::TooFewPoints(2))
        ));
    }

    #[test]
    fn test_rejects_duplicate_consecutive_points() {
        let err = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(0.0, 5.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CollisionError::InvalidPolygon(PolygonDefect::ZeroLengthEdge { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_zero_width_rect() {
        assert!(Polygon::from_rect(Rectangle::new(0, 0, 0, 10)).is_err());
    }

    #[test]
    fn test_default_is_empty_and_invalid() {
        let p = Polygon::default();
        assert!(p.is_empty());
        assert!(p.edges().is_empty());
        assert_eq!(p.center(), Vec2::ZERO);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_from_rotated_rectangle() {
        let rotated = RotatedRectangle::new(Rectangle::new(0, 0, 10, 4), Vec2::new(5.0, 2.0), 0.0);
        let p = Polygon::from_rotated(&rotated).unwrap();
        assert_eq!(p, Polygon::from_rect(Rectangle::new(0, 0, 10, 4)).unwrap());
    }
}
