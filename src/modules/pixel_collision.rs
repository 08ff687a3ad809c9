/*
Lets us check for collisions with pixels. Rows are scanned in parallel with
Rayon on native builds (feature "native", on by default) and sequentially on
the web (wasm32) or when the config turns it off.

Two flavours:

    // sprites drawn unrotated at integer positions
    let hit = per_pixel_intersect(player_bounds, &player_pixels[..], enemy_bounds, &enemy_pixels[..])?;

    // sprites with any rotation/scale, given their local-to-world matrices
    let hit = transformed_per_pixel_intersect(
        &player_matrix, 32, 32, &player_mask,
        &enemy_matrix, 16, 48, &enemy_mask,
    )?;

Or implement `Collidable` (or use `SpriteCollider`) and call `check_collision`,
which adds a bounding-box early out before the pixel scan.

Buffers are row-major with one sample per pixel and must match their size
exactly, otherwise `CollisionError::PixelBufferMismatch` is returned.
*/

use macroquad::math::{Mat4, Vec2, Vec3};

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
use rayon::prelude::*;

use super::config::CollisionConfig;
use super::error::{check_buffer_len, Result};
use super::pixels::{AlphaSource, PixelMask};
use super::rectangle::Rectangle;
use super::transform::{sprite_matrix, transformed_bounds, transformed_region};

/// Anything with a pixel mask and a local-to-world transform.
pub trait Collidable {
    fn transform(&self) -> Mat4;
    fn mask(&self) -> &PixelMask;
}

/// A masked sprite placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCollider {
    pub mask: PixelMask,
    pub position: Vec2,
    /// Pivot in texture pixels; rotation and scale happen around it.
    pub origin: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl SpriteCollider {
    pub fn new(mask: PixelMask, position: Vec2) -> Self {
        Self {
            mask,
            position,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl Collidable for SpriteCollider {
    fn transform(&self) -> Mat4 {
        sprite_matrix(self.position, self.origin, self.scale, self.rotation)
    }

    fn mask(&self) -> &PixelMask {
        &self.mask
    }
}

/// Checks two collidables: world bounding boxes first, then the transformed pixel scan.
pub fn check_collision<T, U>(obj1: &T, obj2: &U, config: &CollisionConfig) -> Result<bool>
where
    T: Collidable + ?Sized,
    U: Collidable + ?Sized,
{
    let mask1 = obj1.mask();
    let mask2 = obj2.mask();
    let transform1 = obj1.transform();
    let transform2 = obj2.transform();

    // A is sampled at its pixel corners, B accepts anything that rounds onto one
    // of its pixels. One extra pixel absorbs float noise at the borders.
    let bounds1 = transformed_bounds(local_rect(mask1), &transform1).inflate(1, 1);
    let bounds2 = transformed_region(
        Vec2::splat(-0.5),
        Vec2::new(mask2.width() as f32 - 0.5, mask2.height() as f32 - 0.5),
        &transform2,
    )
    .inflate(1, 1);

    // Quick early exit if no bounding box overlap
    if !bounds1.intersects(&bounds2) {
        return Ok(false);
    }

    transformed_per_pixel_intersect_with(
        config,
        &transform1,
        mask1.width(),
        mask1.height(),
        mask1,
        &transform2,
        mask2.width(),
        mask2.height(),
        mask2,
    )
}

pub fn per_pixel_intersect<A, B>(bounds_a: Rectangle, pixels_a: &A, bounds_b: Rectangle, pixels_b: &B) -> Result<bool>
where
    A: AlphaSource + ?Sized,
    B: AlphaSource + ?Sized,
{
    per_pixel_intersect_with(&CollisionConfig::default(), bounds_a, pixels_a, bounds_b, pixels_b)
}

/// True when some pixel inside both bounds is opaque in both buffers.
/// Only the overlap of the two rectangles is scanned.
pub fn per_pixel_intersect_with<A, B>(
    config: &CollisionConfig,
    bounds_a: Rectangle,
    pixels_a: &A,
    bounds_b: Rectangle,
    pixels_b: &B,
) -> Result<bool>
where
    A: AlphaSource + ?Sized,
    B: AlphaSource + ?Sized,
{
    config.validate()?;
    check_buffer_len(bounds_a.width as i64, bounds_a.height as i64, pixels_a.sample_count())?;
    check_buffer_len(bounds_b.width as i64, bounds_b.height as i64, pixels_b.sample_count())?;

    let overlap = bounds_a.intersect(&bounds_b);
    if overlap.is_empty() {
        return Ok(false);
    }

    let step = config.skip_pixels;
    let row_hit = |row: usize| {
        let y = overlap.top() + row as i32;
        let row_a = (y - bounds_a.top()) as usize * bounds_a.width as usize;
        let row_b = (y - bounds_b.top()) as usize * bounds_b.width as usize;

        (overlap.left()..overlap.right()).step_by(step).any(|x| {
            let idx_a = row_a + (x - bounds_a.left()) as usize;
            let idx_b = row_b + (x - bounds_b.left()) as usize;
            pixels_a.is_opaque(idx_a) && pixels_b.is_opaque(idx_b)
        })
    };

    Ok(any_row(config, overlap.height as usize, row_hit))
}

#[allow(clippy::too_many_arguments)]
pub fn transformed_per_pixel_intersect<A, B>(
    transform_a: &Mat4,
    width_a: usize,
    height_a: usize,
    pixels_a: &A,
    transform_b: &Mat4,
    width_b: usize,
    height_b: usize,
    pixels_b: &B,
) -> Result<bool>
where
    A: AlphaSource + ?Sized,
    B: AlphaSource + ?Sized,
{
    transformed_per_pixel_intersect_with(
        &CollisionConfig::default(),
        transform_a,
        width_a,
        height_a,
        pixels_a,
        transform_b,
        width_b,
        height_b,
        pixels_b,
    )
}

/// Per-pixel test between two sprites with arbitrary affine transforms.
///
/// Every pixel of A is mapped into B's local space and rounded to the nearest
/// B pixel (halves go to the even pixel). Instead of a matrix multiply per pixel, the position in B is advanced
/// by the images of A's unit X and Y steps. A singular `transform_b` (zero scale)
/// has no local space to map into, so it never collides.
#[allow(clippy::too_many_arguments)]
pub fn transformed_per_pixel_intersect_with<A, B>(
    config: &CollisionConfig,
    transform_a: &Mat4,
    width_a: usize,
    height_a: usize,
    pixels_a: &A,
    transform_b: &Mat4,
    width_b: usize,
    height_b: usize,
    pixels_b: &B,
) -> Result<bool>
where
    A: AlphaSource + ?Sized,
    B: AlphaSource + ?Sized,
{
    config.validate()?;
    check_buffer_len(width_a as i64, height_a as i64, pixels_a.sample_count())?;
    check_buffer_len(width_b as i64, height_b as i64, pixels_b.sample_count())?;

    let determinant = transform_b.determinant();
    if determinant == 0.0 || !determinant.is_finite() {
        log::debug!("Skipping pixel test: transform of B is not invertible (det = {determinant})");
        return Ok(false);
    }

    // A's local space -> world -> B's local space
    let a_to_b = transform_b.inverse() * *transform_a;

    let step = config.skip_pixels;
    let step_x = a_to_b.transform_vector3(Vec3::X).truncate() * step as f32;
    let step_y = a_to_b.transform_vector3(Vec3::Y).truncate();
    let origin_in_b = a_to_b.transform_point3(Vec3::ZERO).truncate();

    let width_b_f = width_b as f32;
    let height_b_f = height_b as f32;

    let row_hit = |y_a: usize| {
        let mut pos_in_b = origin_in_b + step_y * y_a as f32;

        for x_a in (0..width_a).step_by(step) {
            // Round to the nearest pixel, ties to even
            let nearest = Vec2::new(pos_in_b.x.round_ties_even(), pos_in_b.y.round_ties_even());
            if nearest.x >= 0.0 && nearest.x < width_b_f && nearest.y >= 0.0 && nearest.y < height_b_f {
                let idx_a = x_a + y_a * width_a;
                let idx_b = nearest.x as usize + nearest.y as usize * width_b;
                if pixels_a.is_opaque(idx_a) && pixels_b.is_opaque(idx_b) {
                    return true;
                }
            }
            pos_in_b += step_x;
        }
        false
    };

    Ok(any_row(config, height_a, row_hit))
}

fn local_rect(mask: &PixelMask) -> Rectangle {
    Rectangle::new(0, 0, mask.width() as i32, mask.height() as i32)
}

// Runs `row_hit` over every `skip_pixels`-th row until one reports a hit
fn any_row<F>(config: &CollisionConfig, rows: usize, row_hit: F) -> bool
where
    F: Fn(usize) -> bool + Sync + Send,
{
    #[cfg(all(feature = "native", not(target_arch = "wasm32")))]
    {
        if config.use_rayon() {
            // Parallel processing (Rayon) on Linux/Windows/macOS
            return (0..rows)
                .into_par_iter()
                .step_by(config.skip_pixels)
                .any(row_hit);
        }
    }

    // Sequential for Web (WASM) or when parallelism is off
    (0..rows).step_by(config.skip_pixels).any(row_hit)
}
