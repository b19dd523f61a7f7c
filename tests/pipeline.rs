//! End-to-end pipeline tests: corpus CSVs on disk through matrix build,
//! persistence, reload, subgraph extraction, and graph CSV output.

use std::fs;
use std::path::Path;

use musegraph::corpus::load_corpus;
use musegraph::matrix::builder::build;
use musegraph::subgraph::{extract, graph_file_name, write_graph_csv};
use musegraph::table::{load_matrix, save_matrix};

fn write_corpus(dir: &Path, rows: &[(&str, &str)]) {
    let mut content = String::from("ARTIST_NAME,WIKIPEDIA_TEXT\n");
    for (name, text) in rows {
        let quote = |s: &str| {
            if s.contains([',', '"']) {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.to_string()
            }
        };
        content.push_str(&format!("{},{}\n", quote(name), quote(text)));
    }
    fs::write(dir.join("corpus.csv"), content).unwrap();
}

#[test]
fn corpus_to_graph_csv_depth_one() {
    let dir = tempfile::TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("A", "[[B]] B"),
            ("B", "no links in here"),
            ("C", "nothing either"),
        ],
    );

    let documents = load_corpus(dir.path()).unwrap();
    let matrix = build(documents).unwrap();
    let matrix_path = dir.path().join("matrix.csv");
    save_matrix(&matrix, &matrix_path).unwrap();
    let reloaded = load_matrix(&matrix_path).unwrap();
    assert_eq!(reloaded, matrix);

    // Root B: exactly the A -> B edge with the full occurrence count.
    let edges = extract(&reloaded, "B", 1).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(
        (edges[0].source.as_str(), edges[0].target.as_str(), edges[0].weight),
        ("A", "B", 2)
    );

    // Root A: nobody links A.
    assert!(extract(&reloaded, "A", 1).unwrap().is_empty());

    let out = dir.path().join(graph_file_name("B", 1));
    write_graph_csv(&edges, &out).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content, "Source,Target,Weight\nA,B,2\n");
}

#[test]
fn disambiguation_suffix_counts_clean_occurrences() {
    let dir = tempfile::TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("Queen", "[[Boston (band)]] Boston played in Boston."),
            ("Boston (band)", "some text"),
        ],
    );

    let matrix = build(load_corpus(dir.path()).unwrap()).unwrap();
    let queen = matrix.rows.iter().find(|r| r.artist == "Queen").unwrap();
    assert_eq!(queen.mentions.len(), 1);
    assert_eq!(queen.mentions[0].target, "Boston (band)");
    assert_eq!(queen.mentions[0].count, 3);
}

#[test]
fn unlinked_common_name_is_gated_out_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("Queen", "They played Boston, then Boston again."),
            ("Boston (band)", "some text"),
        ],
    );

    let matrix = build(load_corpus(dir.path()).unwrap()).unwrap();
    let queen = matrix.rows.iter().find(|r| r.artist == "Queen").unwrap();
    assert!(queen.mentions.is_empty());
}

#[test]
fn lowercased_the_variant_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("Queen", "[[the Kinks]] the Kinks are great."),
            ("The Kinks", "some text"),
        ],
    );

    let matrix = build(load_corpus(dir.path()).unwrap()).unwrap();
    let queen = matrix.rows.iter().find(|r| r.artist == "Queen").unwrap();
    assert_eq!(queen.mentions[0].target, "The Kinks");
    assert_eq!(queen.mentions[0].count, 2);
}

#[test]
fn rebuilding_the_same_corpus_writes_identical_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let corpus_dir = dir.path().join("corpus");
    fs::create_dir(&corpus_dir).unwrap();
    write_corpus(
        &corpus_dir,
        &[
            ("The Kinks", "[[The Who]] The Who and the Who again"),
            ("The Who", "[[The Kinks]] The Kinks"),
            ("Queen", "[[The Who|the Who]] plus [[The Kinks]]"),
        ],
    );

    let first_path = dir.path().join("first.csv");
    let second_path = dir.path().join("second.csv");
    save_matrix(&build(load_corpus(&corpus_dir).unwrap()).unwrap(), &first_path).unwrap();
    save_matrix(&build(load_corpus(&corpus_dir).unwrap()).unwrap(), &second_path).unwrap();

    assert_eq!(
        fs::read_to_string(&first_path).unwrap(),
        fs::read_to_string(&second_path).unwrap()
    );
}

#[test]
fn artist_names_with_commas_survive_the_whole_pipeline() {
    let dir = tempfile::TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("Earth, Wind & Fire", "funk pioneers"),
            ("Queen", "[[Earth, Wind & Fire]] loved Earth, Wind & Fire"),
        ],
    );

    let matrix_path = dir.path().join("matrix.csv");
    save_matrix(&build(load_corpus(dir.path()).unwrap()).unwrap(), &matrix_path).unwrap();
    let reloaded = load_matrix(&matrix_path).unwrap();

    let edges = extract(&reloaded, "Earth, Wind & Fire", 1).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].source, "Queen");
    assert_eq!(edges[0].weight, 2);
}
