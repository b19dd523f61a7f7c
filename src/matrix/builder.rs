//! Parallel construction of the mention matrix.
//!
//! Documents fan out over rayon's global pool; each one is an independent,
//! side-effect-free mention-counting unit sharing only the read-only roster
//! and an atomic progress counter. Results are collected and merged after
//! the parallel section, so worker scheduling never affects the edge set.

use std::collections::HashSet;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::corpus::Document;
use crate::error::{MatrixError, MuseResult};
use crate::matrix::{AdjacencyRow, MentionEdge, MentionMatrix};
use crate::mention::{Candidate, count_mentions, prepare_roster};

/// How many completed documents between progress log lines.
const PROGRESS_INTERVAL: usize = 100;

/// Build the full mention matrix from a document set.
///
/// Duplicate artist names keep the first document seen; later ones are
/// dropped with a warning. The roster is sorted by name, and since each row's
/// mentions come back in roster order, both rows and edges end up sorted,
/// making the persisted table reproducible run to run.
pub fn build(documents: Vec<Document>) -> MuseResult<MentionMatrix> {
    if documents.is_empty() {
        return Err(MatrixError::NoDocuments.into());
    }

    let documents = dedup_first_wins(documents);
    let roster: Vec<Candidate> = prepare_roster(documents.iter().map(|d| d.name.as_str()));

    let total = documents.len();
    tracing::info!(
        documents = total,
        workers = rayon::current_num_threads(),
        "building mention matrix"
    );

    let progress = AtomicUsize::new(0);
    let rows: Vec<AdjacencyRow> = documents
        .par_iter()
        .map(|doc| {
            let mentions = scan_document(doc, &roster);
            let done = progress.fetch_add(1, Ordering::Relaxed) + 1;
            if done % PROGRESS_INTERVAL == 0 || done == total {
                tracing::info!(done, total, "processed documents");
            }
            AdjacencyRow {
                artist: doc.name.clone(),
                mentions,
                categories: doc.category.iter().cloned().collect(),
            }
        })
        .collect();

    let matrix = MentionMatrix { rows };
    tracing::info!(
        artists = matrix.artist_count(),
        edges = matrix.edge_count(),
        "mention matrix complete"
    );
    Ok(matrix)
}

/// Count one document's mentions, isolating per-document failures.
///
/// A document with no usable text yields an empty row. A panic inside the
/// counting loop is caught and retried once; if it panics again the
/// document is skipped with a warning, leaving every other row intact.
fn scan_document(doc: &Document, roster: &[Candidate]) -> Vec<MentionEdge> {
    let text = doc.text.trim();
    if text.is_empty() {
        tracing::warn!(artist = %doc.name, "document has no text, skipping");
        return Vec::new();
    }

    for attempt in 0..2 {
        match catch_unwind(AssertUnwindSafe(|| count_mentions(&doc.name, text, roster))) {
            Ok(mentions) => return mentions,
            Err(_) if attempt == 0 => {
                tracing::warn!(artist = %doc.name, "mention counting panicked, retrying once");
            }
            Err(_) => {
                tracing::warn!(artist = %doc.name, "mention counting failed twice, skipping document");
            }
        }
    }
    Vec::new()
}

/// Drop duplicate artist names, keeping the first document seen.
///
/// The winner for a repeated name is deliberately first-seen: the article
/// conversion step skips repeats the same way, so a name can only recur
/// when corpora overlap. The surviving set is then sorted by name.
fn dedup_first_wins(documents: Vec<Document>) -> Vec<Document> {
    let mut seen: HashSet<String> = HashSet::with_capacity(documents.len());
    let mut kept: Vec<Document> = Vec::with_capacity(documents.len());
    for doc in documents {
        if seen.insert(doc.name.clone()) {
            kept.push(doc);
        } else {
            tracing::warn!(artist = %doc.name, "duplicate document, keeping first occurrence");
        }
    }
    kept.sort_by(|a, b| a.name.cmp(&b.name));
    kept
}
