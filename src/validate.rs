//! Strict input validation gating the engine.
//!
//! The analyzers themselves degrade gracefully (empty text, clamped
//! intensity, defaulted style). Request-handling layers that prefer to
//! reject bad input instead of silently coercing it can run these
//! validators before calling into the engine.
use thiserror::Error;

use crate::lexicon::scent::EMOTION_SCENTS;
use crate::lexicon::visual::STYLES;

/// Upper bound on analyzed text length, in characters.
pub const MAX_TEXT_CHARS: usize = 100_000;

/// Validation failure with the offending field attached.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("{field} must not exceed {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be one of: {allowed}")]
    UnknownVariant {
        field: &'static str,
        allowed: String,
    },
}

impl ValidationError {
    /// Field name the error refers to, for structured error responses.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::NotFinite { field }
            | Self::OutOfRange { field, .. }
            | Self::UnknownVariant { field, .. } => field,
        }
    }
}

/// Validate narrative text. Returns the trimmed text.
///
/// Empty text is allowed by default since the engine degrades to an
/// empty result; pass `allow_empty = false` to reject it instead.
///
/// # Errors
/// Returns [`ValidationError`] when the text is too long, or empty
/// while `allow_empty` is false.
pub fn validate_text(text: &str, allow_empty: bool) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if !allow_empty && trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "text" });
    }
    let len = trimmed.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(ValidationError::TooLong {
            field: "text",
            len,
            max: MAX_TEXT_CHARS,
        });
    }
    Ok(trimmed)
}

/// Validate an intensity value against [0, 1].
///
/// # Errors
/// Returns [`ValidationError`] for non-finite or out-of-range values.
pub fn validate_intensity(intensity: f64) -> Result<f64, ValidationError> {
    if !intensity.is_finite() {
        return Err(ValidationError::NotFinite { field: "intensity" });
    }
    if !(0.0..=1.0).contains(&intensity) {
        return Err(ValidationError::OutOfRange {
            field: "intensity",
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(intensity)
}

/// Validate an emotion label against the scent-bias table.
/// Returns the lowercased label.
///
/// # Errors
/// Returns [`ValidationError`] for empty or unrecognized labels.
pub fn validate_emotion(emotion: &str) -> Result<String, ValidationError> {
    let lowered = emotion.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(ValidationError::Empty { field: "emotion" });
    }
    if EMOTION_SCENTS.iter().any(|(name, _)| *name == lowered) {
        Ok(lowered)
    } else {
        Err(ValidationError::UnknownVariant {
            field: "emotion",
            allowed: EMOTION_SCENTS
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Validate a visual style name. Returns the lowercased name.
///
/// # Errors
/// Returns [`ValidationError`] for unrecognized styles.
pub fn validate_style(style: &str) -> Result<String, ValidationError> {
    let lowered = style.trim().to_lowercase();
    if STYLES.iter().any(|s| s.name == lowered) {
        Ok(lowered)
    } else {
        Err(ValidationError::UnknownVariant {
            field: "style",
            allowed: STYLES
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_text("  hello  ", true), Ok("hello"));
    }

    #[test]
    fn empty_text_is_rejected_only_when_asked() {
        assert!(validate_text("   ", true).is_ok());
        let error = validate_text("   ", false).expect_err("must fail");
        assert_eq!(error.field(), "text");
    }

    #[test]
    fn oversized_text_is_rejected() {
        let text = "a".repeat(MAX_TEXT_CHARS + 1);
        let error = validate_text(&text, true).expect_err("must fail");
        assert!(matches!(error, ValidationError::TooLong { .. }));
    }

    #[test]
    fn intensity_bounds_are_enforced() {
        assert_eq!(validate_intensity(0.5), Ok(0.5));
        assert!(validate_intensity(1.5).is_err());
        assert!(validate_intensity(f64::NAN).is_err());
        assert!(validate_intensity(-0.1).is_err());
    }

    #[test]
    fn emotion_labels_are_normalized_and_checked() {
        assert_eq!(validate_emotion("  JOY "), Ok("joy".to_string()));
        let error = validate_emotion("boredom").expect_err("must fail");
        assert_eq!(error.field(), "emotion");
    }

    #[test]
    fn style_names_are_normalized_and_checked() {
        assert_eq!(validate_style("Abstract"), Ok("abstract".to_string()));
        assert!(validate_style("cubist").is_err());
    }
}
