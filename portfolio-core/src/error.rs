//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Two records in one catalog share the same id
    #[error("Duplicate catalog key: {0}")]
    DuplicateKey(String),

    /// A record could not be decoded from its source
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Rendering surface error
    #[error("{0}")]
    Surface(#[from] SurfaceError),
}

impl CoreError {
    /// Whether it is expected behavior (authoring mistakes, missing elements), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DuplicateKey(_) | Self::InvalidContent(_) => true,
            Self::Surface(e) => e.is_expected(),
        }
    }
}

/// Rendering surface error
///
/// Every surface operation checks that its target exists before touching it.
/// A missing target is reported here and then skipped by [`crate::surface::apply`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum SurfaceError {
    /// The addressed element is not present on the surface
    #[error("Render target not found: {0}")]
    MissingTarget(String),
}

impl SurfaceError {
    pub(crate) fn missing(target: impl std::fmt::Debug) -> Self {
        Self::MissingTarget(format!("{target:?}"))
    }

    /// Missing targets degrade to a no-op, so they are always expected.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::MissingTarget(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Surface operation Result type alias
pub type SurfaceResult = std::result::Result<(), SurfaceError>;
