use chrono::{Duration, Local, TimeZone};
use note_core::{Field, Note, NoteOptions, ValidationError};
use uuid::Uuid;

/// Helper: a note whose `updated` lies far in the past so edits are visible.
fn stale_note(title: &str) -> Result<Note, ValidationError> {
    let past = Local::now() - Duration::days(30);
    Note::create(
        title,
        NoteOptions {
            created: Some(past),
            updated: Some(past),
            ..Default::default()
        },
    )
}

#[test]
fn new_note_has_defaults() -> Result<(), ValidationError> {
    let note = Note::new("  Fresh note ")?;

    assert_eq!(note.title().value(), "Fresh note");
    assert_eq!(note.text().value(), "");
    assert_eq!(note.tag_count(), 0);
    assert!(note.updated() >= note.created());
    Ok(())
}

#[test]
fn fresh_notes_get_distinct_ids() -> Result<(), ValidationError> {
    let a = Note::new("First")?;
    let b = Note::new("Second")?;
    assert_ne!(a.id(), b.id());
    Ok(())
}

#[test]
fn invalid_title_or_text_fails_creation() {
    let err = Note::new("ab").unwrap_err();
    assert_eq!(err.to_string(), "Title must be at least 3 characters long.");

    let err = Note::with_text("Valid title", &"x".repeat(1001)).unwrap_err();
    assert_eq!(err.to_string(), "Text must be at most 1000 characters long.");
}

#[test]
fn reconstruction_keeps_supplied_values() -> Result<(), ValidationError> {
    let id = Uuid::new_v4();
    let created = Local.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
    let updated = Local.with_ymd_and_hms(2023, 6, 7, 8, 9, 10).unwrap();

    let note = Note::create(
        "Restored",
        NoteOptions {
            id: Some(id),
            text: "from storage".into(),
            created: Some(created),
            updated: Some(updated),
        },
    )?;

    assert_eq!(note.id(), id);
    assert_eq!(note.created(), created);
    assert_eq!(note.updated(), updated);
    assert_eq!(note.text().value(), "from storage");
    Ok(())
}

#[test]
fn edit_title_replaces_and_touches_updated() -> Result<(), ValidationError> {
    let mut note = stale_note("Old title")?;
    let before = note.updated();

    note.edit_title(" New title ")?;

    assert_eq!(note.title().value(), "New title");
    assert!(note.updated() > before);
    Ok(())
}

#[test]
fn failed_edits_leave_note_unchanged() -> Result<(), ValidationError> {
    let mut note = stale_note("Keep me")?;
    note.edit_text("body")?;
    let before = note.updated();

    let err = note.edit_title("").unwrap_err();
    assert_eq!(err, ValidationError::Empty { field: "Title" });

    let err = note.edit_text(&"z".repeat(1001)).unwrap_err();
    assert_eq!(err, ValidationError::TooLong { field: "Text", max: 1000 });

    assert_eq!(note.title().value(), "Keep me");
    assert_eq!(note.text().value(), "body");
    assert_eq!(note.updated(), before);
    Ok(())
}

#[test]
fn edit_text_allows_clearing() -> Result<(), ValidationError> {
    let mut note = Note::with_text("Clearable", "some text")?;
    note.edit_text("   ")?;
    assert!(note.text().is_empty());
    Ok(())
}

#[test]
fn add_tag_is_idempotent_and_keeps_updated() -> Result<(), ValidationError> {
    let mut note = stale_note("Tagged")?;
    let before = note.updated();

    assert!(note.add_tag("abc")?);
    assert!(!note.add_tag(" abc ")?);

    assert_eq!(note.tag_count(), 1);
    assert_eq!(note.updated(), before);
    Ok(())
}

#[test]
fn add_tags_splits_on_commas() -> Result<(), ValidationError> {
    let mut note = Note::new("Batch")?;
    note.add_tags("work, urgent,work")?;

    let mut values: Vec<&str> = note.tags().map(|t| t.value()).collect();
    values.sort();
    assert_eq!(values, vec!["urgent", "work"]);
    Ok(())
}

#[test]
fn add_tags_stops_at_first_invalid_tag() -> Result<(), ValidationError> {
    let mut note = Note::new("Partial")?;

    let err = note.add_tags("first, x, third").unwrap_err();
    assert_eq!(err.to_string(), "Tag must be at least 3 characters long.");

    assert!(note.check_tag("first")?);
    assert!(!note.check_tag("third")?);
    assert_eq!(note.tag_count(), 1);
    Ok(())
}

#[test]
fn add_tags_rejects_empty_segment() -> Result<(), ValidationError> {
    let mut note = Note::new("Trailing comma")?;
    let err = note.add_tags("work,").unwrap_err();
    assert_eq!(err, ValidationError::Empty { field: "Tag" });
    assert_eq!(note.tag_count(), 1);
    Ok(())
}

#[test]
fn check_tag_raises_on_invalid_query() -> Result<(), ValidationError> {
    let mut note = Note::new("Checks")?;
    note.add_tag("home")?;

    assert!(note.check_tag(" home")?);
    assert!(!note.check_tag("HOME")?);
    assert!(note.check_tag("zz").is_err());
    Ok(())
}

#[test]
fn delete_tag_removes_and_touches_updated() -> Result<(), ValidationError> {
    let mut note = stale_note("Deleting")?;
    note.add_tag("temp")?;
    let before = note.updated();

    assert!(note.delete_tag("temp")?);

    assert_eq!(note.tag_count(), 0);
    assert!(note.updated() > before);
    Ok(())
}

#[test]
fn delete_absent_tag_is_noop() -> Result<(), ValidationError> {
    let mut note = stale_note("Nothing here")?;
    note.add_tag("kept")?;
    let before = note.updated();

    assert!(!note.delete_tag("missing")?);

    assert_eq!(note.tag_count(), 1);
    assert_eq!(note.updated(), before);
    Ok(())
}

#[test]
fn matches_tags_title_and_text() -> Result<(), ValidationError> {
    let mut note = Note::with_text("My Title", "hello world")?;
    note.add_tags("work, urgent")?;

    assert_eq!(note.tag_count(), 2);
    assert!(note.matches("hello")?);
    assert!(note.matches("URGENT")?);
    assert!(note.matches("work")?);
    assert!(note.matches("TITLE")?);
    assert!(note.matches("lo wor")?);
    assert!(!note.matches("absent")?);
    Ok(())
}

#[test]
fn matches_raises_on_short_query() -> Result<(), ValidationError> {
    let note = Note::with_text("My Title", "hello world")?;

    let err = note.matches("xy").unwrap_err();
    assert_eq!(err, ValidationError::TooShort { field: "Tag", min: 3 });
    Ok(())
}

#[test]
fn display_lists_every_attribute() -> Result<(), ValidationError> {
    let id = Uuid::new_v4();
    let created = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
    let updated = Local.with_ymd_and_hms(2024, 3, 5, 14, 9, 0).unwrap();

    let mut note = Note::create(
        "My Title",
        NoteOptions {
            id: Some(id),
            text: "hello world".into(),
            created: Some(created),
            updated: Some(updated),
        },
    )?;
    note.add_tags("work, urgent")?;

    let expected = format!(
        "ID:      {id}\n\
         Title:   My Title\n\
         Text:    hello world\n\
         Tags:    urgent, work\n\
         Created: 05.03.2024 - 14:07\n\
         Updated: 05.03.2024 - 14:09"
    );
    assert_eq!(note.to_string(), expected);
    Ok(())
}

#[test]
fn display_renders_no_tags_as_empty() -> Result<(), ValidationError> {
    let note = Note::new("Untagged")?;
    let rendered = note.to_string();
    assert!(rendered.lines().any(|line| line == "Tags:    "));
    assert_eq!(rendered.lines().count(), 6);
    Ok(())
}
