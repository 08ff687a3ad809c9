pub mod collision;
pub mod config;
pub mod error;
pub mod pixel_collision;
pub mod pixels;
pub mod polygon;
pub mod rectangle;
pub mod rotation;
pub mod transform;
