//! Persisted matrix table: UTF-8, comma-delimited, one row per artist.
//!
//! Header `ARTIST_NAME,MENTIONED_ARTISTS,ARTIST_CATEGORY`; the mentions
//! column carries the `target:count;target:count` encoding and the category
//! column holds `;`-joined informational tags. Artist names can contain
//! commas and quotes ("Earth, Wind & Fire"), so fields are quoted and
//! escaped the usual CSV way. The writer goes through a temp file and an
//! atomic rename so a failed build never leaves a partially written table
//! behind.

use std::fs;
use std::path::Path;

use crate::error::{MatrixError, MuseResult};
use crate::matrix::{AdjacencyRow, MentionMatrix, parse_mentions, serialize_mentions};

const HEADER: [&str; 3] = ["ARTIST_NAME", "MENTIONED_ARTISTS", "ARTIST_CATEGORY"];

/// Persist the matrix to `path`, replacing any previous table atomically.
pub fn save_matrix(matrix: &MentionMatrix, path: &Path) -> MuseResult<()> {
    let mut out = String::new();
    write_record(&mut out, &HEADER);
    for row in &matrix.rows {
        let mentions = serialize_mentions(&row.mentions);
        let categories = row.categories.join(";");
        write_record(
            &mut out,
            &[row.artist.as_str(), mentions.as_str(), categories.as_str()],
        );
    }

    let io_err = |source| MatrixError::Io {
        path: path.display().to_string(),
        source,
    };
    let tmp = path.with_extension("csv.tmp");
    fs::write(&tmp, out).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    tracing::info!(path = %path.display(), rows = matrix.artist_count(), "matrix saved");
    Ok(())
}

/// Load a persisted matrix.
///
/// Tolerates a missing ARTIST_CATEGORY column and empty mention lists;
/// malformed mention tokens inside a row are skipped with a warning rather
/// than aborting the row.
pub fn load_matrix(path: &Path) -> MuseResult<MentionMatrix> {
    let content = fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut records = parse_records(&content).into_iter();
    let header = records.next().ok_or_else(|| MatrixError::MalformedHeader {
        path: path.display().to_string(),
    })?;
    if header.len() < 2 || header[0] != HEADER[0] || header[1] != HEADER[1] {
        return Err(MatrixError::MalformedHeader {
            path: path.display().to_string(),
        }
        .into());
    }

    let mut rows = Vec::new();
    for record in records {
        if record.is_empty() || (record.len() == 1 && record[0].is_empty()) {
            continue;
        }
        let artist = record[0].clone();
        let mentions = record
            .get(1)
            .map(|s| parse_mentions(&artist, s))
            .unwrap_or_default();
        let categories = record
            .get(2)
            .map(|s| split_tags(s))
            .unwrap_or_default();
        rows.push(AdjacencyRow {
            artist,
            mentions,
            categories,
        });
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "matrix loaded");
    Ok(MentionMatrix { rows })
}

fn split_tags(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(';').map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Minimal quote-aware CSV encoding
// ---------------------------------------------------------------------------

/// Append one CSV record (with trailing newline) to `out`.
pub(crate) fn write_record(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
    if field.contains(['"', ',', '\n', '\r']) {
        out.push('"');
        for c in field.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Split CSV content into records of fields, honoring quoted fields with
/// embedded commas, doubled quotes, and newlines.
pub(crate) fn parse_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}
