//! Identifier generation for board entities.
//!
//! Card and comment ids are ULID-based so they stay unique across the whole
//! board regardless of deletions or moves. Column ids are readable slugs of
//! the column title, de-duplicated with a numeric suffix, matching the
//! `todo` / `in-progress` style of the default board.

use ulid::Ulid;

/// Generate a fresh, board-globally-unique card id.
pub fn new_task_id() -> String {
    format!("task-{}", Ulid::new().to_string().to_lowercase())
}

/// Generate a fresh comment id.
pub fn new_comment_id() -> String {
    format!("comment-{}", Ulid::new().to_string().to_lowercase())
}

/// Derive a column id from its title, avoiding ids already taken.
///
/// Lowercases, maps runs of non-alphanumerics to single hyphens, and appends
/// `-2`, `-3`, ... on collision. Empty or all-symbol titles fall back to
/// `column`.
pub fn column_id_for(title: &str, taken: impl Fn(&str) -> bool) -> String {
    let base = slugify(title);
    if !taken(&base) {
        return base;
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "column".to_string()
    } else {
        slug
    }
}
