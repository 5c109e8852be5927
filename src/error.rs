//! Error types for initial-condition generation
//!
//! Every sampler validates its inputs before drawing a single random number,
//! so a call either returns a complete [`ParticleSet`](crate::ParticleSet) or
//! one of these errors. Zero distances during the velocity pass are not
//! errors: they are handled in place by assigning a zero velocity.

/// Errors raised at the generation API boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("{name} must be at least 1, got {value}")]
    InvalidCount { name: &'static str, value: usize },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("length mismatch: {left_name} has {left} entries but {right_name} has {right}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("unknown density profile `{0}` (expected uniform_sphere, isothermal, plummer, hernquist or jaffe)")]
    UnknownProfile(String),
}

impl GenerationError {
    /// Bad parameter values or shapes, detected before any sampling work
    pub fn is_validation(&self) -> bool {
        !self.is_configuration()
    }

    /// Unknown names at dispatch time
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::UnknownProfile(_))
    }
}

pub type GenResult<T> = Result<T, GenerationError>;

/// Check that a count is at least one
pub(crate) fn ensure_count(name: &'static str, value: usize) -> GenResult<()> {
    if value == 0 {
        return Err(GenerationError::InvalidCount { name, value });
    }
    Ok(())
}

/// Check that a scalar is strictly positive (NaN and infinities rejected)
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> GenResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(GenerationError::NonPositive { name, value });
    }
    Ok(())
}

/// Check that a scalar is zero or positive (NaN and infinities rejected)
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> GenResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(GenerationError::Negative { name, value });
    }
    Ok(())
}

/// Check that a scalar is neither NaN nor infinite
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> GenResult<()> {
    if !value.is_finite() {
        return Err(GenerationError::NotFinite { name, value });
    }
    Ok(())
}

/// Check that two parallel sequences have the same length
pub(crate) fn ensure_same_len(
    left_name: &'static str,
    left: usize,
    right_name: &'static str,
    right: usize,
) -> GenResult<()> {
    if left != right {
        return Err(GenerationError::LengthMismatch { left_name, left, right_name, right });
    }
    Ok(())
}
