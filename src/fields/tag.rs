use crate::error::NoteResult;
use crate::fields::{Field, field_impls, require_length};

/// A short label attached to a note.
///
/// Equality, ordering and hashing depend only on the normalized value, so
/// `Tag::new("work")` and `Tag::new("  work ")` are the same set element.
/// Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    value: String,
}

impl Tag {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 30;
}

impl Field for Tag {
    const NAME: &'static str = "Tag";

    fn validate(value: &str) -> NoteResult<()> {
        require_length(Self::NAME, value, Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    fn value(&self) -> &str {
        &self.value
    }
}

field_impls!(Tag);
