use crate::error::{NoteResult, ValidationError};
use crate::fields::{Field, field_impls};

/// Free-form body of a note. May be empty; otherwise at most
/// [`Text::MAX_LENGTH`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    value: String,
}

impl Text {
    pub const MAX_LENGTH: usize = 1000;

    /// Whether the note has no body.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Field for Text {
    const NAME: &'static str = "Text";

    fn validate(value: &str) -> NoteResult<()> {
        if !value.is_empty() && value.chars().count() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                field: Self::NAME,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(())
    }

    fn value(&self) -> &str {
        &self.value
    }
}

field_impls!(Text);
