//! Validated, normalized string values that make up a [`Note`](crate::note::Note).
//!
//! Every field goes through the same gate: the raw input is normalized
//! (trimmed by default), validated against the field's rules, and only then
//! stored. The gate runs both on construction ([`Field::new`]) and on
//! replacement ([`Field::set_value`]), so a field can never hold a value
//! that fails its own validation.
//!
//! ```rust
//! use note_core::fields::{Field, Tag, Title};
//!
//! # fn main() -> Result<(), note_core::ValidationError> {
//! let title = Title::new("  Groceries ")?;
//! assert_eq!(title.value(), "Groceries");
//!
//! let err = Tag::new("ab").unwrap_err();
//! assert_eq!(err.to_string(), "Tag must be at least 3 characters long.");
//! # Ok(())
//! # }
//! ```

pub mod tag;
pub mod text;
pub mod title;

pub use tag::Tag;
pub use text::Text;
pub use title::Title;

use crate::error::{NoteResult, ValidationError};
use log::debug;

pub(crate) mod sealed {
    /// Only code inside this crate can produce a `Token`, so the hook methods
    /// stay uncallable even through a generic `F: Field` bound.
    pub struct Token(());

    impl Token {
        pub(crate) const fn new() -> Self {
            Token(())
        }
    }

    /// Storage hook for fields. Keeps the only route to a stored value
    /// through [`super::Field`].
    pub trait Slot {
        fn from_checked(value: String, token: Token) -> Self;
        fn slot_mut(&mut self, token: Token) -> &mut String;
    }
}

/// Normalization and validation contract shared by all note fields.
///
/// Implemented only by [`Title`], [`Text`] and [`Tag`].
pub trait Field: sealed::Slot + Sized {
    /// Human-readable name used in validation messages.
    const NAME: &'static str;

    /// Cleans a raw value before validation. Defaults to trimming
    /// leading and trailing whitespace.
    fn normalize(raw: &str) -> String {
        raw.trim().to_owned()
    }

    /// Checks an already normalized value against this field's rules.
    fn validate(value: &str) -> NoteResult<()>;

    /// The stored, normalized value.
    fn value(&self) -> &str;

    /// Builds a field from a raw value.
    ///
    /// Returns a [`ValidationError`] and produces nothing if the normalized
    /// value breaks the field's rules.
    fn new(raw: &str) -> NoteResult<Self> {
        let cleaned = gate::<Self>(raw)?;
        Ok(Self::from_checked(cleaned, sealed::Token::new()))
    }

    /// Replaces the stored value through the same gate as [`Field::new`].
    ///
    /// On error the previous value is kept.
    fn set_value(&mut self, raw: &str) -> NoteResult<()> {
        let cleaned = gate::<Self>(raw)?;
        *self.slot_mut(sealed::Token::new()) = cleaned;
        Ok(())
    }
}

fn gate<F: Field>(raw: &str) -> NoteResult<String> {
    let cleaned = F::normalize(raw);
    if let Err(e) = F::validate(&cleaned) {
        debug!(
            "{} rejected value of {} chars: {}",
            F::NAME,
            cleaned.chars().count(),
            e
        );
        return Err(e);
    }
    Ok(cleaned)
}

/// Length rule for fields that must be present and within `[min, max]`
/// characters.
pub(crate) fn require_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> NoteResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let len = value.chars().count();

    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }

    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Implements the plumbing every field shares: storage hook, `Display`,
/// `AsRef<str>`, `TryFrom<&str>` and `FromStr`.
macro_rules! field_impls {
    ($ty:ident) => {
        impl $crate::fields::sealed::Slot for $ty {
            fn from_checked(value: String, _: $crate::fields::sealed::Token) -> Self {
                $ty { value }
            }

            fn slot_mut(&mut self, _: $crate::fields::sealed::Token) -> &mut String {
                &mut self.value
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::error::ValidationError;

            fn try_from(raw: &str) -> Result<Self, Self::Error> {
                <$ty as $crate::fields::Field>::new(raw)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ValidationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::fields::Field>::new(raw)
            }
        }
    };
}

pub(crate) use field_impls;
