//! The [`Note`] aggregate: a title, a body, a set of tags, an id and two
//! timestamps.
//!
//! All value checks are delegated to [`crate::fields`]. Mutators build a
//! fresh field from the raw input first and only swap it in when that
//! succeeds, so a failed edit leaves the note untouched.
//!
//! `updated` is stamped by [`Note::edit_title`], [`Note::edit_text`] and a
//! successful [`Note::delete_tag`]. Adding tags does not touch it.

use crate::error::NoteResult;
use crate::fields::{Field, Tag, Text, Title};
use chrono::{DateTime, Local};
use log::{debug, trace};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

const LABEL_WIDTH: usize = 9;
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y - %H:%M";

/// Optional inputs for [`Note::create`].
///
/// Storage layers pass the persisted `id` and timestamps here when
/// rebuilding a note; fresh notes leave them as `None`.
#[derive(Debug, Clone, Default)]
pub struct NoteOptions {
    /// Existing identifier. `None` generates a new v4 UUID.
    pub id: Option<Uuid>,

    /// Raw body text. Defaults to empty.
    pub text: String,

    /// Creation time. `None` samples the clock.
    pub created: Option<DateTime<Local>>,

    /// Last update time. `None` samples the clock.
    pub updated: Option<DateTime<Local>>,
}

#[derive(Debug, Clone)]
pub struct Note {
    id: Uuid,
    title: Title,
    text: Text,
    tags: HashSet<Tag>,
    created: DateTime<Local>,
    updated: DateTime<Local>,
}

impl Note {
    /// Creates a fresh note with an empty body.
    pub fn new(title: &str) -> NoteResult<Self> {
        Self::create(title, NoteOptions::default())
    }

    /// Creates a fresh note with the given body.
    pub fn with_text(title: &str, text: &str) -> NoteResult<Self> {
        Self::create(
            title,
            NoteOptions {
                text: text.to_owned(),
                ..Default::default()
            },
        )
    }

    /// Creates a note, filling any missing option with a generated value.
    ///
    /// `created` and `updated` defaults come from two separate clock reads,
    /// so on a fresh note they can differ by a few microseconds.
    ///
    /// Fails if either the title or the text is invalid.
    pub fn create(title: &str, options: NoteOptions) -> NoteResult<Self> {
        let title = Title::new(title)?;
        let text = Text::new(&options.text)?;

        let note = Note {
            id: options.id.unwrap_or_else(Uuid::new_v4),
            title,
            text,
            tags: HashSet::new(),
            created: options.created.unwrap_or_else(Self::updated_time),
            updated: options.updated.unwrap_or_else(Self::updated_time),
        };

        debug!("created note {}", note.id);
        Ok(note)
    }

    /// Clock used to stamp `created` and `updated`.
    pub fn updated_time() -> DateTime<Local> {
        Local::now()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Tags in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Local> {
        self.updated
    }

    /// Replaces the title and stamps `updated`.
    ///
    /// On a validation error the note is left unchanged.
    pub fn edit_title(&mut self, value: &str) -> NoteResult<()> {
        self.title = Title::new(value)?;
        self.touch();
        debug!("note {}: title edited", self.id);
        Ok(())
    }

    /// Replaces the text and stamps `updated`.
    ///
    /// On a validation error the note is left unchanged.
    pub fn edit_text(&mut self, value: &str) -> NoteResult<()> {
        self.text = Text::new(value)?;
        self.touch();
        debug!(
            "note {}: text edited ({} chars)",
            self.id,
            self.text.value().chars().count()
        );
        Ok(())
    }

    /// Adds a tag. Returns `false` if an equal tag was already present.
    ///
    /// Does not stamp `updated`.
    pub fn add_tag(&mut self, value: &str) -> NoteResult<bool> {
        let tag = Tag::new(value)?;
        let inserted = self.tags.insert(tag);

        if inserted {
            debug!("note {}: tag added", self.id);
        } else {
            trace!("note {}: tag already present", self.id);
        }

        Ok(inserted)
    }

    /// Adds every comma-separated tag in `value`, in order.
    ///
    /// Not atomic: stops at the first invalid tag and returns its error,
    /// keeping the tags added before it.
    pub fn add_tags(&mut self, value: &str) -> NoteResult<()> {
        for raw in value.split(',') {
            self.add_tag(raw)?;
        }
        Ok(())
    }

    /// Whether an equal tag is attached.
    ///
    /// The query must itself be a valid tag; an invalid one is an error,
    /// not `false`.
    pub fn check_tag(&self, value: &str) -> NoteResult<bool> {
        let tag = Tag::new(value)?;
        Ok(self.tags.contains(&tag))
    }

    /// Removes an equal tag and stamps `updated`. Removing a tag that is
    /// not attached is a no-op and returns `false`.
    pub fn delete_tag(&mut self, value: &str) -> NoteResult<bool> {
        let tag = Tag::new(value)?;

        if !self.tags.remove(&tag) {
            trace!("note {}: no such tag to delete", self.id);
            return Ok(false);
        }

        self.touch();
        debug!("note {}: tag deleted", self.id);
        Ok(true)
    }

    /// Free-text search over tags, title and text.
    ///
    /// True when the query names an attached tag (ignoring case) or is a
    /// case-insensitive substring of the title or text. The query goes
    /// through tag validation first, so something like `"xy"` is an error.
    pub fn matches(&self, value: &str) -> NoteResult<bool> {
        if self.check_tag(value)? {
            return Ok(true);
        }

        let needle = value.to_lowercase();
        let folded_tag = value.trim().to_lowercase();

        if self
            .tags
            .iter()
            .any(|tag| tag.value().to_lowercase() == folded_tag)
        {
            return Ok(true);
        }

        Ok(self.title.value().to_lowercase().contains(&needle)
            || self.text.value().to_lowercase().contains(&needle))
    }

    fn touch(&mut self) {
        self.updated = Self::updated_time();
    }

    fn sorted_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(Tag::value).collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Display for Note {
    /// Multi-line summary, one `Label:` per line padded to a fixed column:
    ///
    /// ```text
    /// ID:      67e55044-10b1-426f-9247-bb680e5fe0c8
    /// Title:   My Title
    /// Text:    hello world
    /// Tags:    urgent, work
    /// Created: 05.03.2024 - 14:07
    /// Updated: 05.03.2024 - 14:09
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = LABEL_WIDTH;
        writeln!(f, "{:<w$}{}", "ID:", self.id)?;
        writeln!(f, "{:<w$}{}", "Title:", self.title)?;
        writeln!(f, "{:<w$}{}", "Text:", self.text)?;
        writeln!(f, "{:<w$}{}", "Tags:", self.sorted_tags().join(", "))?;
        writeln!(
            f,
            "{:<w$}{}",
            "Created:",
            self.created.format(TIMESTAMP_FORMAT)
        )?;
        write!(
            f,
            "{:<w$}{}",
            "Updated:",
            self.updated.format(TIMESTAMP_FORMAT)
        )
    }
}
