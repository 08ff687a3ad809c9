/*
Errors returned by the collision helpers.

Only inputs that would otherwise read out of range or produce NaN are rejected:
pixel buffers whose length does not match their bounds, degenerate polygons and
bad configuration values. Everything else is total.
*/

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollisionError>;

#[derive(Debug, Error)]
pub enum CollisionError {
    #[error("pixel buffer holds {actual} samples but a {width}x{height} area needs {expected}")]
    PixelBufferMismatch {
        width: i64,
        height: i64,
        expected: usize,
        actual: usize,
    },

    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] PolygonDefect),

    #[error("invalid collision config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse collision config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a point list was refused as a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolygonDefect {
    #[error("needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("edge {index} has zero length")]
    ZeroLengthEdge { index: usize },
}

/// Checks that a buffer holds exactly one sample per pixel of a `width` x `height` area.
pub(crate) fn check_buffer_len(width: i64, height: i64, actual: usize) -> Result<()> {
    let expected = (width.max(0) as usize).saturating_mul(height.max(0) as usize);
    if expected != actual {
        return Err(CollisionError::PixelBufferMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}
