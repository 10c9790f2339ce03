use thiserror::Error;

use super::schema::Draft;

/// Minimum trimmed length of every required field.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Lowest usable minimum; required fields are never allowed to be blank.
pub const MIN_LENGTH_FLOOR: usize = 1;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("all fields are empty")]
    Empty,

    #[error("a field is shorter than the minimum length")]
    TooShort,
}

impl ValidationError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self, min_length: usize) -> String {
        match self {
            ValidationError::Empty => "Nothing written yet. Fill in the form first.".to_string(),
            ValidationError::TooShort => format!(
                "Too short. Every field needs at least {} characters.",
                min_length
            ),
        }
    }
}

/// Check a draft: all fields long enough, else all empty, else too short.
pub fn validate<D: Draft>(draft: &D, min_length: usize) -> Result<(), ValidationError> {
    let min_length = min_length.max(MIN_LENGTH_FLOOR);
    let lengths: Vec<usize> = draft
        .fields()
        .iter()
        .map(|(_, value)| value.trim().chars().count())
        .collect();

    if lengths.iter().all(|&len| len >= min_length) {
        Ok(())
    } else if draft.is_blank() {
        Err(ValidationError::Empty)
    } else {
        Err(ValidationError::TooShort)
    }
}

/// Names of the fields that fail the length check.
pub fn short_fields<D: Draft>(draft: &D, min_length: usize) -> Vec<&'static str> {
    let min_length = min_length.max(MIN_LENGTH_FLOOR);
    draft
        .fields()
        .into_iter()
        .filter(|(_, value)| value.trim().chars().count() < min_length)
        .map(|(name, _)| name)
        .collect()
}
