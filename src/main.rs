//! musegraph CLI: mention-graph builder for musical artists.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use musegraph::corpus::load_corpus;
use musegraph::matrix::builder;
use musegraph::subgraph;
use musegraph::table;

#[derive(Parser)]
#[command(name = "musegraph", version, about = "Artist mention-graph builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the mention matrix from a converted article corpus.
    Build {
        /// Corpus CSV file, or a directory of corpus CSVs.
        #[arg(long)]
        corpus: PathBuf,

        /// Where to write the matrix CSV.
        #[arg(long, default_value = "matrix.csv")]
        matrix: PathBuf,
    },

    /// Extract a depth-bounded subgraph rooted at one artist.
    Extract {
        /// Path to a matrix built by `musegraph build`.
        #[arg(long, default_value = "matrix.csv")]
        matrix: PathBuf,

        /// Root artist, exactly as titled (disambiguation suffix included,
        /// e.g. "The Replacements (band)").
        #[arg(long)]
        root: String,

        /// How many mention hops from the root to include. Must be >= 1.
        #[arg(long, default_value = "1")]
        depth: usize,

        /// Directory for the generated graph file.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Explicit output file, overriding the ROOT-toRoot-depthN naming.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Show statistics about a built matrix.
    Info {
        /// Path to a matrix built by `musegraph build`.
        #[arg(long, default_value = "matrix.csv")]
        matrix: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Gephi-ready Source,Target,Weight CSV.
    Csv,
    /// JSON array of {source, target, weight} edges.
    Json,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, matrix } => {
            let documents = load_corpus(&corpus).into_diagnostic()?;
            let built = builder::build(documents).into_diagnostic()?;
            table::save_matrix(&built, &matrix).into_diagnostic()?;
            println!(
                "Built matrix with {} artists and {} edges at {}",
                built.artist_count(),
                built.edge_count(),
                matrix.display()
            );
        }

        Commands::Extract {
            matrix,
            root,
            depth,
            out_dir,
            out,
            format,
        } => {
            let loaded = table::load_matrix(&matrix).into_diagnostic()?;
            let edges = subgraph::extract(&loaded, &root, depth).into_diagnostic()?;

            let path = out.unwrap_or_else(|| {
                let mut name = subgraph::graph_file_name(&root, depth);
                if matches!(format, Format::Json) {
                    name = name.replace(".csv", ".json");
                }
                out_dir.join(name)
            });
            match format {
                Format::Csv => subgraph::write_graph_csv(&edges, &path).into_diagnostic()?,
                Format::Json => subgraph::write_graph_json(&edges, &path).into_diagnostic()?,
            }
            println!(
                "Extracted {} edges around \"{root}\" (depth {depth}) to {}",
                edges.len(),
                path.display()
            );
        }

        Commands::Info { matrix } => {
            let loaded = table::load_matrix(&matrix).into_diagnostic()?;
            println!("Matrix: {}", matrix.display());
            println!("  artists: {}", loaded.artist_count());
            println!("  edges:   {}", loaded.edge_count());

            let mut incoming: std::collections::HashMap<&str, u64> =
                std::collections::HashMap::new();
            for row in &loaded.rows {
                for edge in &row.mentions {
                    *incoming.entry(edge.target.as_str()).or_default() += edge.count;
                }
            }
            let mut ranked: Vec<(&str, u64)> = incoming.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

            if !ranked.is_empty() {
                println!("  most mentioned:");
                for (artist, count) in ranked.iter().take(10) {
                    println!("    {count:>6}  {artist}");
                }
            }
        }
    }

    Ok(())
}
