//! Error type for the attenuation model.

/// Possible attenuation errors.
#[derive(Debug)]
pub enum AttenuationError {
    /// The frequency (in GHz) is outside the (0, 350] range of the dry air
    /// model
    InvalidFrequency {
        /// The rejected frequency in GHz
        frequency: f64,
    },
    /// The inputs don't have the expected length(s)
    InconsistentInputs,
    /// The worker thread pool couldn't be created
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for AttenuationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttenuationError::InvalidFrequency { frequency } => {
                write!(f, "frequency {frequency} GHz not supported")
            }
            AttenuationError::InconsistentInputs => {
                write!(f, "inputs to the attenuation model have the wrong length")
            }
            AttenuationError::ThreadPool(e) => write!(f, "couldn't build thread pool: {e}"),
        }
    }
}

impl std::error::Error for AttenuationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttenuationError::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for AttenuationError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        AttenuationError::ThreadPool(e)
    }
}
