//! # note_core
//!
//! Domain core for a small note-taking application: a [`Note`] entity built
//! from validated fields, with tagging and free-text matching.
//!
//! ## Features
//!
//! - **Validated fields**: [`Title`], [`Text`] and [`Tag`] normalize their
//!   input and enforce length rules on construction and on every replacement
//! - **Tag sets**: tags are deduplicated by value
//! - **Search**: case-insensitive matching across tags, title and text
//! - **Reconstruction**: notes can be rebuilt with a known id and timestamps
//!
//! Storage, listing and any user interface live outside this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use note_core::{Note, NoteResult};
//!
//! # fn main() -> NoteResult<()> {
//! let mut note = Note::with_text("My Title", "hello world")?;
//! note.add_tags("work, urgent")?;
//!
//! assert_eq!(note.tag_count(), 2);
//! assert!(note.matches("hello")?);
//! assert!(note.matches("URGENT")?);
//!
//! // Queries are validated as tags first, so very short ones are rejected.
//! assert!(note.matches("xy").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`fields`]**: the [`Field`] trait and its three implementations
//! - **[`note`]**: the [`Note`] aggregate and its rendering
//! - **[`error`]**: [`ValidationError`], the single error type
//!
//! ## Error Handling
//!
//! Every fallible call returns [`NoteResult<T>`]. Errors are never swallowed
//! inside the crate; a rejected edit leaves the note as it was. The one
//! exception is [`Note::add_tags`], which keeps the tags it added before
//! hitting an invalid one.
//!
//! ```rust
//! use note_core::{Note, ValidationError};
//!
//! let mut note = Note::new("Shopping").unwrap();
//! let err = note.edit_title("ab").unwrap_err();
//!
//! assert_eq!(err, ValidationError::TooShort { field: "Title", min: 3 });
//! assert_eq!(err.to_string(), "Title must be at least 3 characters long.");
//! assert_eq!(note.title().to_string(), "Shopping");
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade at `debug` and `trace` level.
//! Install any `log` backend in the host application to see them.

pub mod error;
pub mod fields;
pub mod note;

/// Re-exports the most commonly used types for convenience.
pub use error::{NoteResult, ValidationError};
pub use fields::{Field, Tag, Text, Title};
pub use note::{Note, NoteOptions};
