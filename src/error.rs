use crate::scheme::SchemeStage;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An index, colour or field value outside its representable domain.
    #[error("value {value} out of range, must be below {bound}")]
    OutOfRange { value: u64, bound: u64 },

    #[error("plaintext modulus {0} is not prime")]
    NonPrimeModulus(u64),

    #[error("dimension mismatch: expected {expected} values, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("image needs {requested} slots but the scheme only carries {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// Reported by the homomorphic scheme, passed through untouched.
    #[error("scheme failed during {stage}")]
    ExternalSchemeFailure {
        stage: SchemeStage,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("palette has no colours")]
    EmptyPalette,

    #[error("palette colour at index {index} appears more than once")]
    DuplicateColor { index: usize },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn scheme<E>(stage: SchemeStage, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ExternalSchemeFailure {
            stage,
            source: Box::new(source),
        }
    }
}
