//! File parsing functionality for ARC dataset documents
//!
//! This module handles loading the challenge and solution JSON files of a dataset split.
//! Each document may also be stored ZStandard-compressed next to where the plain file
//! would be (`<name>.json.zst`); the compressed copy is only used when the plain file
//! does not exist.

use crate::data::challenge::{Challenges, Dataset, SolutionSet};
use crate::data::split::DataSplit;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zstd::Decoder;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input file {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decompress zstd file {}: {}", .path.display(), .message)]
    Decompression { path: PathBuf, message: String },

    #[error("Failed to parse JSON in {}: {}", .path.display(), .source)]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Challenge {id} has {tests} test examples but {solutions} solutions")]
    SolutionCountMismatch {
        id: String,
        tests: usize,
        solutions: usize,
    },
}

type Result<T> = core::result::Result<T, LoadError>;

/// Load the challenges and solutions of one dataset split
///
/// # Arguments
/// * `data_dir` - Directory containing the ARC JSON documents
/// * `split` - Which split to load
///
/// # Returns
/// * `Ok(Dataset)` - The parsed and validated split
/// * `Err(LoadError)` - If a file is missing, malformed, or its solutions do not line up
pub fn load_split(data_dir: &Path, split: DataSplit) -> Result<Dataset> {
    let challenges_path = resolve_data_file(data_dir, split.challenges_file_name());
    let solutions_path = resolve_data_file(data_dir, split.solutions_file_name());

    let challenges: Challenges = read_json(&challenges_path)?;
    let solutions: SolutionSet = read_json(&solutions_path)?;
    validate_solution_counts(&challenges, &solutions)?;

    info!(
        "Loaded {} split: {} challenges, {} solution entries",
        split.label(),
        challenges.len(),
        solutions.len()
    );

    Ok(Dataset {
        challenges,
        solutions,
    })
}

/// Picks the on-disk path for a dataset document.
///
/// Returns the plain path unless only the `.zst` sibling exists.
pub fn resolve_data_file(data_dir: &Path, file_name: &str) -> PathBuf {
    let plain = data_dir.join(file_name);
    if plain.exists() {
        return plain;
    }

    let compressed = data_dir.join(format!("{}.zst", file_name));
    if compressed.exists() {
        compressed
    } else {
        plain
    }
}

/// Deserialize a JSON document, decompressing it first if it ends in `.zst`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = if is_compressed(path) {
        let mut decoder = Decoder::new(file).map_err(|e| LoadError::Decompression {
            path: path.to_path_buf(),
            message: format!("Failed to create decoder: {}", e),
        })?;
        serde_json::from_reader(&mut decoder)
    } else {
        serde_json::from_reader(BufReader::new(file))
    };

    parsed.map_err(|source| LoadError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensures every solution list is as long as its challenge's test list.
///
/// Challenges without a solution entry are accepted.
pub fn validate_solution_counts(challenges: &Challenges, solutions: &SolutionSet) -> Result<()> {
    for (id, challenge) in challenges {
        let Some(known) = solutions.for_challenge(id) else {
            continue;
        };

        if known.len() != challenge.test.len() {
            return Err(LoadError::SolutionCountMismatch {
                id: id.clone(),
                tests: challenge.test.len(),
                solutions: known.len(),
            });
        }
    }

    Ok(())
}

fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "zst")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CHALLENGES: &str = r#"{
        "007bbfb7": {
            "train": [{"input": [[0, 7, 7], [7, 7, 7], [0, 7, 7]],
                       "output": [[7, 0, 7], [7, 0, 7], [7, 7, 0]]}],
            "test": [{"input": [[7, 0, 7], [7, 0, 7], [7, 7, 0]]}]
        }
    }"#;

    const SOLUTIONS: &str = r#"{"007bbfb7": [[[0, 7, 7], [7, 7, 7], [0, 7, 7]]]}"#;

    fn write_split(dir: &Path, challenges: &str, solutions: &str) {
        fs::write(
            dir.join(DataSplit::Training.challenges_file_name()),
            challenges,
        )
        .unwrap();
        fs::write(dir.join(DataSplit::Training.solutions_file_name()), solutions).unwrap();
    }

    #[test]
    fn loads_plain_json_split() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), CHALLENGES, SOLUTIONS);

        let dataset = load_split(dir.path(), DataSplit::Training).unwrap();

        assert_eq!(dataset.challenges.len(), 1);
        assert_eq!(dataset.challenges["007bbfb7"].train.len(), 1);
        assert_eq!(dataset.solutions.get("007bbfb7", 0).unwrap().shape(), (3, 3));
    }

    #[test]
    fn loads_compressed_split() {
        let dir = TempDir::new().unwrap();
        let compress = |name: &str, contents: &str| {
            let encoded = zstd::encode_all(contents.as_bytes(), 3).unwrap();
            fs::write(dir.path().join(format!("{}.zst", name)), encoded).unwrap();
        };
        compress(DataSplit::Training.challenges_file_name(), CHALLENGES);
        compress(DataSplit::Training.solutions_file_name(), SOLUTIONS);

        let dataset = load_split(dir.path(), DataSplit::Training).unwrap();

        assert_eq!(dataset.challenges.len(), 1);
        assert_eq!(dataset.solutions.len(), 1);
    }

    #[test]
    fn missing_file_names_path() {
        let dir = TempDir::new().unwrap();

        let error = load_split(dir.path(), DataSplit::Evaluation).unwrap_err();

        assert!(matches!(error, LoadError::FileRead { .. }));
        assert!(error
            .to_string()
            .contains("arc-agi_evaluation_challenges.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), "{ not json", SOLUTIONS);

        let error = load_split(dir.path(), DataSplit::Training).unwrap_err();
        assert!(matches!(error, LoadError::JsonParse { .. }));
    }

    #[test]
    fn ragged_grid_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let ragged = r#"{"abc": {"train": [{"input": [[1, 2], [3]], "output": [[1]]}], "test": []}}"#;
        write_split(dir.path(), ragged, "{}");

        let error = load_split(dir.path(), DataSplit::Training).unwrap_err();
        assert!(matches!(error, LoadError::JsonParse { .. }));
        assert!(error.to_string().contains("row 1 has 1 cells, expected 2"));
    }

    #[test]
    fn rejects_misaligned_solutions() {
        let dir = TempDir::new().unwrap();
        let two_solutions = r#"{"007bbfb7": [[[1]], [[2]]]}"#;
        write_split(dir.path(), CHALLENGES, two_solutions);

        let error = load_split(dir.path(), DataSplit::Training).unwrap_err();
        assert!(matches!(
            error,
            LoadError::SolutionCountMismatch {
                tests: 1,
                solutions: 2,
                ..
            }
        ));
    }

    #[test]
    fn accepts_challenges_without_solutions() {
        let dir = TempDir::new().unwrap();
        write_split(dir.path(), CHALLENGES, "{}");

        let dataset = load_split(dir.path(), DataSplit::Training).unwrap();
        assert!(dataset.solutions.is_empty());
        assert_eq!(dataset.solutions.get("007bbfb7", 0), None);
    }

    #[test]
    fn prefers_plain_file_over_compressed() {
        let dir = TempDir::new().unwrap();
        let name = "arc-agi_training_challenges.json";
        fs::write(dir.path().join(format!("{}.zst", name)), b"").unwrap();
        assert_eq!(
            resolve_data_file(dir.path(), name),
            dir.path().join(format!("{}.zst", name))
        );

        fs::write(dir.path().join(name), b"{}").unwrap();
        assert_eq!(resolve_data_file(dir.path(), name), dir.path().join(name));
    }
}
