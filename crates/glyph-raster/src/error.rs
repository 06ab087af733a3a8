//! Error types for glyph rendering.

use std::{io, result};

use skrifa::{outline::DrawError, raw::ReadError};

/// Errors that can occur while acquiring, drawing or saving a glyph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("no glyph for {0:?} in {1}")]
    MissingGlyph(char, String),

    #[error("failed to draw outline: {0}")]
    Draw(#[from] DrawError),

    #[error("outline for {0:?} is empty")]
    EmptyOutline(char),

    #[error("invalid canvas size: {0}")]
    CanvasSize(u32),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
