//! Depth-bounded subgraph extraction for visualization.
//!
//! Starting from a root artist, each expansion round pulls in every artist
//! whose article mentions someone already selected (a reverse, "who
//! mentions me" step). After exactly `depth` rounds the surviving edges are
//! those whose endpoints are both selected. The output feeds Gephi-style
//! tools as a `Source,Target,Weight` CSV.
//!
//! The reverse lookup goes through a target-to-sources index built once
//! after load, with exact target-name matching. Exactly `depth` rounds are
//! always run, with no early exit when a round discovers nothing new; the
//! extra rounds cannot change the output.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{ExtractError, MuseResult};
use crate::matrix::MentionMatrix;
use crate::table::write_record;

/// One retained edge of the extracted subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    /// Artist whose article contains the mention.
    pub source: String,
    /// Artist being mentioned.
    pub target: String,
    /// Number of mentions of `target` in `source`'s article.
    pub weight: u64,
}

/// Extract the depth-bounded subgraph rooted at `root`.
///
/// A root with no row in the matrix is valid: it is still seeded into the
/// selection and can be reached through incoming mentions, it simply
/// contributes no outgoing edges. Output is sorted by (source, target).
pub fn extract(matrix: &MentionMatrix, root: &str, depth: usize) -> MuseResult<Vec<GraphEdge>> {
    if depth < 1 {
        return Err(ExtractError::InvalidDepth { depth }.into());
    }

    // Reverse index: target -> artists whose rows mention it.
    let mut mentioned_by: HashMap<&str, Vec<&str>> = HashMap::new();
    for row in &matrix.rows {
        for edge in &row.mentions {
            mentioned_by
                .entry(edge.target.as_str())
                .or_default()
                .push(row.artist.as_str());
        }
    }

    let mut selected: HashSet<&str> = HashSet::new();
    selected.insert(root);

    for round in 0..depth {
        let additions: Vec<&str> = selected
            .iter()
            .filter_map(|artist| mentioned_by.get(artist))
            .flatten()
            .copied()
            .collect();
        selected.extend(additions);
        tracing::debug!(round = round + 1, selected = selected.len(), "expansion round done");
    }

    let mut edges = Vec::new();
    for row in &matrix.rows {
        if !selected.contains(row.artist.as_str()) {
            continue;
        }
        for edge in &row.mentions {
            if selected.contains(edge.target.as_str()) {
                edges.push(GraphEdge {
                    source: row.artist.clone(),
                    target: edge.target.clone(),
                    weight: edge.count,
                });
            }
        }
    }
    edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

    tracing::info!(
        root,
        depth,
        artists = selected.len(),
        edges = edges.len(),
        "subgraph extracted"
    );
    Ok(edges)
}

/// Default graph file name: `<root with spaces removed>-toRoot-depth<N>.csv`.
pub fn graph_file_name(root: &str, depth: usize) -> String {
    format!("{}-toRoot-depth{depth}.csv", root.replace(' ', ""))
}

/// Write the edge list as a `Source,Target,Weight` CSV.
///
/// Same atomic temp-file discipline as the matrix writer.
pub fn write_graph_csv(edges: &[GraphEdge], path: &Path) -> MuseResult<()> {
    let mut out = String::new();
    write_record(&mut out, &["Source", "Target", "Weight"]);
    for edge in edges {
        let weight = edge.weight.to_string();
        write_record(
            &mut out,
            &[edge.source.as_str(), edge.target.as_str(), weight.as_str()],
        );
    }
    write_atomic(path, out.as_bytes())
}

/// Write the edge list as a JSON array.
pub fn write_graph_json(edges: &[GraphEdge], path: &Path) -> MuseResult<()> {
    let json =
        serde_json::to_string_pretty(edges).map_err(|e| ExtractError::Serialize {
            message: e.to_string(),
        })?;
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> MuseResult<()> {
    let io_err = |source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    };
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    tracing::info!(path = %path.display(), "graph written");
    Ok(())
}
