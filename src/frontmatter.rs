//! Front-matter codec for the board file.
//!
//! The board file is UTF-8 text whose first line is a `---` delimiter; the
//! lines strictly between it and the next `---` line (after trimming) form a
//! YAML block that maps onto [`Board`]. Anything after the closing delimiter
//! is ignored on read and discarded on rewrite.

use crate::board::Board;
use crate::error::{Error, Result};

/// The front-matter delimiter line.
pub const DELIMITER: &str = "---";

/// Parse a board file's contents into a [`Board`].
///
/// Fails with [`Error::MalformedDocument`] when the delimiters are missing
/// and with [`Error::SchemaMismatch`] when the enclosed YAML cannot be
/// coerced into the board shape.
pub fn decode(input: &str) -> Result<Board> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() < 3 {
        return Err(Error::MalformedDocument(
            "no front matter found".to_string(),
        ));
    }

    if lines[0].trim() != DELIMITER {
        return Err(Error::MalformedDocument(
            "front matter start not found".to_string(),
        ));
    }

    let end = lines[1..]
        .iter()
        .position(|line| line.trim() == DELIMITER)
        .map(|offset| offset + 1)
        .ok_or_else(|| Error::MalformedDocument("front matter end not found".to_string()))?;

    let yaml = lines[1..end].join("\n");
    serde_yaml_ng::from_str(&yaml).map_err(Error::SchemaMismatch)
}

/// Serialize a [`Board`] to the canonical on-disk form.
///
/// Always emits the opening delimiter, the YAML block, and the closing
/// delimiter, each newline-terminated. `decode(encode(b))` is field-for-field
/// equal to `b` for any well-formed board.
pub fn encode(board: &Board) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(board).map_err(Error::Serialize)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
}
