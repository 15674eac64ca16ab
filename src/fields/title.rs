use crate::error::NoteResult;
use crate::fields::{Field, field_impls, require_length};

/// The required heading of a note: 3 to 30 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    value: String,
}

impl Title {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 30;
}

impl Field for Title {
    const NAME: &'static str = "Title";

    fn validate(value: &str) -> NoteResult<()> {
        require_length(Self::NAME, value, Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    fn value(&self) -> &str {
        &self.value
    }
}

field_impls!(Title);
