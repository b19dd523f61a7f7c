//! Mention matrix: the directed, weighted adjacency table keyed by artist.
//!
//! Each artist owns one [`AdjacencyRow`] listing the other artists its
//! article mentions, with counts. In memory the row is an explicit list of
//! [`MentionEdge`] structs; the `target:count;target:count` string form is
//! purely the persistence encoding, handled by [`serialize_mentions`] and
//! [`parse_mentions`].

pub mod builder;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// One directed edge: this artist's article mentions `target` `count` times.
///
/// Counts are at least 1; at most one edge exists per ordered (source,
/// target) pair and never from an artist to itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionEdge {
    /// Canonical name of the mentioned artist.
    pub target: String,
    /// Number of textual occurrences counted in the source article.
    pub count: u64,
}

impl MentionEdge {
    /// Parse one `TARGET:COUNT` token, splitting on the last colon so
    /// targets containing `:` survive.
    pub fn parse_token(artist: &str, token: &str) -> Result<Self, MatrixError> {
        let bad = || MatrixError::BadToken {
            artist: artist.to_string(),
            token: token.to_string(),
        };
        let (target, count) = token.rsplit_once(':').ok_or_else(bad)?;
        if target.is_empty() {
            return Err(bad());
        }
        let count: u64 = count.trim().parse().map_err(|_| bad())?;
        Ok(Self {
            target: target.to_string(),
            count,
        })
    }

    fn to_token(&self) -> String {
        format!("{}:{}", self.target, self.count)
    }
}

/// One matrix row: an artist and its outgoing mention edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyRow {
    /// Canonical artist name (row key).
    pub artist: String,
    /// Outgoing edges, sorted by target name.
    pub mentions: Vec<MentionEdge>,
    /// Informational category tags; never consumed by the algorithms.
    pub categories: Vec<String>,
}

/// The full mention matrix, one row per roster artist, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionMatrix {
    pub rows: Vec<AdjacencyRow>,
}

impl MentionMatrix {
    /// Number of artists (rows).
    pub fn artist_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of directed edges across all rows.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(|r| r.mentions.len()).sum()
    }
}

/// Serialize a row's edges into the `target:count;target:count` form.
///
/// No trailing delimiter; the empty string encodes "no mentions".
pub fn serialize_mentions(mentions: &[MentionEdge]) -> String {
    mentions
        .iter()
        .map(MentionEdge::to_token)
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a serialized edge list, skipping malformed tokens with a warning.
///
/// A token without a colon or with a non-numeric count never aborts the
/// row; the rest of the list is still recovered.
pub fn parse_mentions(artist: &str, serialized: &str) -> Vec<MentionEdge> {
    if serialized.is_empty() {
        return Vec::new();
    }
    let mut mentions = Vec::new();
    for token in serialized.split(';') {
        match MentionEdge::parse_token(artist, token) {
            Ok(edge) => mentions.push(edge),
            Err(e) => tracing::warn!(error = %e, "skipping malformed mention token"),
        }
    }
    mentions
}
