/*
2D collision helpers for games: rectangle pushback, circles, per-pixel tests
(plain and under rotation/scale) and swept SAT for convex polygons.

Add to Cargo.toml:

    collide2d = { path = "..." }

Then in your game:

    use collide2d::{polygon_collision, Polygon, Rectangle};

Math types are macroquad's (Vec2, IVec2, Mat4), so values from a macroquad
game can be passed straight in.
*/

pub mod modules;

pub use modules::collision::{
    circles_intersect, circles_intersect_centered, polygon_collision, polygons_intersect,
    rectangles_intersect, rotated_rectangles_intersect, subtract, PolygonCollision,
};
pub use modules::config::CollisionConfig;
pub use modules::error::{CollisionError, PolygonDefect, Result};
pub use modules::pixel_collision::{
    check_collision, per_pixel_intersect, per_pixel_intersect_with, transformed_per_pixel_intersect,
    transformed_per_pixel_intersect_with, Collidable, SpriteCollider,
};
pub use modules::pixels::{AlphaSource, Opacity, PixelMask};
pub use modules::polygon::Polygon;
pub use modules::rectangle::Rectangle;
pub use modules::rotation::{rotate_corners, rotate_ipoint, rotate_point, rotate_rectangle, RotatedRectangle};
pub use modules::transform::{direction, sprite_bounds, sprite_matrix, transformed_bounds, transformed_region};
