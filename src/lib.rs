//! # musegraph
//!
//! Builds a directed, weighted mention graph among musical artists from
//! their encyclopedia article texts, then extracts depth-bounded subgraphs
//! rooted at a chosen artist for visualization in Gephi-style tools.
//!
//! ## Architecture
//!
//! - **Normalization** (`normalize`): disambiguation-suffix stripping and
//!   the lower-cased leading-"The" variant
//! - **Mention counting** (`mention`): hyperlink-gated substring counting
//!   of every roster artist in one article
//! - **Matrix** (`matrix`): the adjacency table, its row codec, and the
//!   rayon-parallel builder
//! - **Table I/O** (`table`): the persisted comma-delimited form
//! - **Corpus** (`corpus`): loading converted (artist, text) documents
//! - **Subgraph** (`subgraph`): depth-bounded frontier expansion and the
//!   `Source,Target,Weight` output
//!
//! ## Library usage
//!
//! ```no_run
//! use musegraph::corpus::Document;
//! use musegraph::matrix::builder;
//! use musegraph::subgraph;
//!
//! let docs = vec![
//!     Document {
//!         name: "Queen".into(),
//!         text: "[[ABBA]] toured with ABBA.".into(),
//!         category: None,
//!     },
//!     Document {
//!         name: "ABBA".into(),
//!         text: "No links here.".into(),
//!         category: None,
//!     },
//! ];
//! let matrix = builder::build(docs).unwrap();
//! let edges = subgraph::extract(&matrix, "ABBA", 1).unwrap();
//! assert_eq!(edges[0].weight, 2);
//! ```

pub mod corpus;
pub mod error;
pub mod matrix;
pub mod mention;
pub mod normalize;
pub mod subgraph;
pub mod table;
