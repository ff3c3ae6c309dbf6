use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A required input bitmap or font could not be loaded or decoded.
    /// Fatal to the render attempt; the caller may retry.
    #[error("asset unavailable: {0}")]
    Asset(String),

    /// QR encoding failed. The assembler never runs without a valid QR.
    #[error("QR encoding failed: {0}")]
    Qr(String),

    /// A rasterized face could not be encoded for embedding.
    #[error("image encoding failed: {0}")]
    Encode(String),

    /// PDF serialization failed.
    #[error("document assembly failed: {0}")]
    Document(String),
}
