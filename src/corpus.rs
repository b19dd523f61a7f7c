//! Corpus input: the (artist name, article text) documents the matrix
//! builder consumes.
//!
//! The upstream conversion step turns raw article markup into CSV files
//! with an `ARTIST_NAME,WIKIPEDIA_TEXT` header, one file per source
//! category. This module loads those files back; it does no markup
//! processing of its own, though stray markup (an untrimmed references
//! section, link syntax) is harmless to the counting downstream.

use std::fs;
use std::path::Path;

use crate::error::{CorpusError, MuseResult};
use crate::table::parse_records;

/// One artist's article, as produced by the conversion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Canonical artist name (article title, disambiguation suffix included).
    pub name: String,
    /// Article text. May be empty; the builder then emits an empty row.
    pub text: String,
    /// Informational category tag, derived from the source file name.
    pub category: Option<String>,
}

/// Load every document under `path`.
///
/// `path` may be a single corpus CSV or a directory; in the directory case
/// every `*.csv` file inside is read, in file-name order. Fails fast when
/// the result is zero documents.
pub fn load_corpus(path: &Path) -> MuseResult<Vec<Document>> {
    let io_err = |source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    };

    let files: Vec<std::path::PathBuf> = if path.is_dir() {
        let mut files: Vec<_> = fs::read_dir(path)
            .map_err(io_err)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        files.sort();
        files
    } else {
        vec![path.to_path_buf()]
    };

    let mut documents = Vec::new();
    for file in &files {
        let loaded = load_corpus_file(file)?;
        tracing::info!(file = %file.display(), documents = loaded.len(), "corpus file loaded");
        documents.extend(loaded);
    }

    if documents.is_empty() {
        return Err(CorpusError::Empty {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(documents)
}

fn load_corpus_file(path: &Path) -> MuseResult<Vec<Document>> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let category = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());

    let mut records = parse_records(&content).into_iter();
    let header = records.next().ok_or_else(|| CorpusError::MalformedHeader {
        path: path.display().to_string(),
    })?;
    if header.len() < 2 || header[0] != "ARTIST_NAME" || header[1] != "WIKIPEDIA_TEXT" {
        return Err(CorpusError::MalformedHeader {
            path: path.display().to_string(),
        }
        .into());
    }

    let mut documents = Vec::new();
    for record in records {
        if record.is_empty() || (record.len() == 1 && record[0].is_empty()) {
            continue;
        }
        let name = record[0].trim().to_string();
        if name.is_empty() {
            tracing::warn!(file = %path.display(), "corpus row with empty artist name, skipping");
            continue;
        }
        documents.push(Document {
            name,
            text: record.get(1).cloned().unwrap_or_default(),
            category: category.clone(),
        });
    }
    Ok(documents)
}
