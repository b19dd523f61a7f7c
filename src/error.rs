//! Rich diagnostic error types for musegraph.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for musegraph.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum MuseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Extract(#[from] ExtractError),
}

// ---------------------------------------------------------------------------
// Corpus errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CorpusError {
    #[error("failed to read corpus at {path}: {source}")]
    #[diagnostic(
        code(musegraph::corpus::io),
        help(
            "Check that the corpus path exists, is readable, and points to \
             either a CSV file or a directory containing CSV files."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus at {path} contains no documents")]
    #[diagnostic(
        code(musegraph::corpus::empty),
        help(
            "The matrix build requires at least one (artist, text) document. \
             Run the article conversion step first, or point --corpus at the \
             directory it wrote."
        )
    )]
    Empty { path: String },

    #[error("malformed corpus header in {path}: expected ARTIST_NAME,WIKIPEDIA_TEXT")]
    #[diagnostic(
        code(musegraph::corpus::header),
        help(
            "Corpus CSVs must start with an ARTIST_NAME,WIKIPEDIA_TEXT header \
             row, as produced by the article conversion step."
        )
    )]
    MalformedHeader { path: String },
}

// ---------------------------------------------------------------------------
// Matrix errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MatrixError {
    #[error("failed to access matrix file {path}: {source}")]
    #[diagnostic(
        code(musegraph::matrix::io),
        help(
            "A filesystem operation on the mention matrix failed. Check that \
             the path exists, has correct permissions, and that the disk is \
             not full."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build a mention matrix from zero documents")]
    #[diagnostic(
        code(musegraph::matrix::no_documents),
        help("Supply at least one document to the matrix builder.")
    )]
    NoDocuments,

    #[error("malformed matrix header in {path}: expected ARTIST_NAME,MENTIONED_ARTISTS")]
    #[diagnostic(
        code(musegraph::matrix::header),
        help(
            "The matrix file must start with the header written by \
             `musegraph build`. Re-run the build if the file was edited or \
             truncated."
        )
    )]
    MalformedHeader { path: String },

    #[error("malformed mention token \"{token}\" in row for {artist}")]
    #[diagnostic(
        code(musegraph::matrix::bad_token),
        help(
            "Mention tokens have the form TARGET:COUNT, joined by semicolons. \
             During normal loading malformed tokens are skipped with a warning; \
             this error is only raised by strict parsing."
        )
    )]
    BadToken { artist: String, token: String },
}

// ---------------------------------------------------------------------------
// Extraction errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ExtractError {
    #[error("invalid depth {depth}: must be at least 1")]
    #[diagnostic(
        code(musegraph::extract::depth),
        help(
            "Depth 1 selects the root and the artists whose articles mention \
             it; each further level adds the artists mentioning those."
        )
    )]
    InvalidDepth { depth: usize },

    #[error("failed to write graph output to {path}: {source}")]
    #[diagnostic(
        code(musegraph::extract::io),
        help(
            "Check that the output directory exists and is writable. \
             The file is written atomically, so a failed write leaves no \
             partial output behind."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize extracted edges: {message}")]
    #[diagnostic(
        code(musegraph::extract::serialize),
        help("JSON export of the edge list failed. This is a bug; please report it.")
    )]
    Serialize { message: String },
}

/// Convenience alias for functions returning musegraph results.
pub type MuseResult<T> = std::result::Result<T, MuseError>;
