use thiserror::Error;

use crate::{Point, Rectangle};

#[derive(Error, Debug)]
pub enum KdError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to parse WKT: {0}")]
    Wkt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KdError>;

pub(crate) fn check_point(p: &Point) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(KdError::InvalidArgument(format!(
            "point ({}, {}) is not finite",
            p.x, p.y
        )))
    }
}

pub(crate) fn check_rect(rect: &Rectangle) -> Result<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(KdError::InvalidArgument(format!(
            "rectangle {:?} is not a finite, ordered region",
            rect
        )))
    }
}
