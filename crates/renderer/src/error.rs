use thiserror::Error;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot allocate a {0}x{0} canvas")]
    CanvasAllocation(u32),

    #[error("Image has zero width or height")]
    EmptyImage,

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
