/// Convenience result type used across Keepsake.
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KeepsakeError {
    /// Invalid user-provided or tribute-model data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling animation tracks.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating page state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeepsakeError {
    /// Build a [`KeepsakeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KeepsakeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`KeepsakeError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`KeepsakeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_match_variant() {
        assert_eq!(
            KeepsakeError::validation("bad").to_string(),
            "validation error: bad"
        );
        assert_eq!(
            KeepsakeError::evaluation("oops").to_string(),
            "evaluation error: oops"
        );
    }

    #[test]
    fn anyhow_wraps_transparently() {
        let err: KeepsakeError = anyhow::anyhow!("io blew up").into();
        assert_eq!(err.to_string(), "io blew up");
    }
}
