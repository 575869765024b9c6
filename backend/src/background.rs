//! Background-removal capability boundary.
//!
//! Photo segmentation is delegated to an external provider; this backend
//! only defines the contract: image bytes in, transparent PNG bytes out.
//! The default wiring is [`Disabled`], which reports the capability as
//! unavailable rather than attempting any processing.

use std::fmt;

#[derive(Debug)]
pub enum RemovalError {
    /// No provider is configured.
    Unavailable,
    /// The provider ran and failed.
    Failed(String),
}

impl fmt::Display for RemovalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "background removal not available"),
            Self::Failed(msg) => write!(f, "background removal failed: {msg}"),
        }
    }
}

impl std::error::Error for RemovalError {}

pub trait BackgroundRemover: Send + Sync {
    /// Strip the background from `image`, returning PNG bytes with an alpha
    /// channel.
    fn remove(&self, image: &[u8]) -> Result<Vec<u8>, RemovalError>;
}

/// Stand-in used when no segmentation provider is deployed.
pub struct Disabled;

impl BackgroundRemover for Disabled {
    fn remove(&self, _image: &[u8]) -> Result<Vec<u8>, RemovalError> {
        Err(RemovalError::Unavailable)
    }
}
