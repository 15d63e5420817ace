use arc_data_vis::data::challenge::{Challenge, Dataset};
use arc_data_vis::data::loading::{load_split, LoadError};
use arc_data_vis::data::split::DataSplit;
use arc_data_vis::render::plots::{save_challenge_figure, PlotError};
use arc_data_vis::utilities::sampling::{make_rng, sample_ids};
use arc_data_vis::utilities::timestamp::timestamp;
use argh::FromArgs;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Parent of the timestamped directories used when no save directory is given.
const DEFAULT_SAVE_ROOT: &str = "visualizations";

/// Visualize ARC competition data as one PNG per challenge
#[derive(FromArgs, Debug)]
pub struct Args {
    /// directory containing the ARC JSON files (default: data)
    #[argh(option, default = "PathBuf::from(\"data\")")]
    data_dir: PathBuf,

    /// specific challenge ID to visualize
    #[argh(option)]
    challenge_id: Option<String>,

    /// number of random challenges to visualize (default: 100)
    #[argh(option, short = 'n', default = "100")]
    n_samples: usize,

    /// directory to save visualizations (default: visualizations/<timestamp>)
    #[argh(option)]
    save_dir: Option<PathBuf>,

    /// seed for the random challenge selection
    #[argh(option)]
    seed: Option<u64>,
}

/// Errors that can occur while rendering challenges
#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("Loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Plotting error: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to create output directory {}: {}", .path.display(), .source)]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

type Result<T> = core::result::Result<T, VisualizerError>;

/// Logs at `info` unless `RUST_LOG` says otherwise.
fn logger_builder() -> env_logger::Builder {
    let mut builder = env_logger::builder();
    builder.filter_level(log::LevelFilter::Info);
    builder
}

fn main() -> Result<()> {
    logger_builder().parse_default_env().init();

    let args: Args = argh::from_env();
    debug!("{:?}", args);

    println!("Loading ARC data...");
    let dataset = load_split(&args.data_dir, DataSplit::Training)?;
    println!(
        "Loaded {} challenges and {} solutions",
        dataset.challenges.len(),
        dataset.solutions.len()
    );

    match &args.challenge_id {
        Some(challenge_id) => {
            let Some(challenge) = dataset.challenges.get(challenge_id) else {
                println!("Challenge ID '{}' not found!", challenge_id);
                return Ok(());
            };

            let save_dir = create_save_dir(args.save_dir.as_deref())?;
            let path = render_one(&dataset, challenge_id, challenge, &save_dir)?;
            println!("Saved visualization to {}", path.display());
        }
        None => visualize_random(&dataset, &args)?,
    }

    println!("Visualization complete!");
    Ok(())
}

/// Renders `min(n_samples, total)` distinct random challenges.
fn visualize_random(dataset: &Dataset, args: &Args) -> Result<()> {
    let save_dir = create_save_dir(args.save_dir.as_deref())?;
    let mut rng = make_rng(args.seed);
    let challenge_ids = sample_ids(dataset.challenges.keys(), args.n_samples, &mut rng);

    println!("Visualizing {} random challenges...", challenge_ids.len());
    println!("Saving to directory: {}", save_dir.display());

    let progress = ProgressBar::new(challenge_ids.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len}") {
        progress.set_style(style);
    }

    for (index, &challenge_id) in challenge_ids.iter().enumerate() {
        progress.println(format!(
            "Processing challenge {}/{}: {}",
            index + 1,
            challenge_ids.len(),
            challenge_id
        ));
        if let Some(challenge) = dataset.challenges.get(challenge_id) {
            render_one(dataset, challenge_id, challenge, &save_dir)?;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!(
        "\nCompleted! All visualizations saved to: {}",
        save_dir.display()
    );
    Ok(())
}

fn render_one(
    dataset: &Dataset,
    challenge_id: &str,
    challenge: &Challenge,
    save_dir: &Path,
) -> Result<PathBuf> {
    let solutions = dataset.solutions.for_challenge(challenge_id);
    debug!(
        "Rendering {} ({} solutions known)",
        challenge_id,
        solutions.map_or(0, <[_]>::len)
    );
    Ok(save_challenge_figure(
        challenge_id,
        challenge,
        solutions,
        save_dir,
    )?)
}

/// The requested directory, or a fresh timestamped one under [`DEFAULT_SAVE_ROOT`].
fn resolve_save_dir(requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) => path.to_path_buf(),
        None => Path::new(DEFAULT_SAVE_ROOT).join(timestamp()),
    }
}

fn create_save_dir(requested: Option<&Path>) -> Result<PathBuf> {
    let save_dir = resolve_save_dir(requested);
    std::fs::create_dir_all(&save_dir).map_err(|source| VisualizerError::CreateDirectory {
        path: save_dir.clone(),
        source,
    })?;
    Ok(save_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_save_dir_is_timestamped() {
        let save_dir = resolve_save_dir(None);

        assert_eq!(save_dir.parent(), Some(Path::new(DEFAULT_SAVE_ROOT)));
        let name = save_dir.file_name().unwrap().to_str().unwrap();
        assert_eq!(name.len(), "YYYYmmdd_HHMMSS".len());
        assert_eq!(name.as_bytes()[8], b'_');
    }

    #[test]
    fn requested_save_dir_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let requested = temp_dir.path().join("nested").join("figures");

        let save_dir = create_save_dir(Some(&requested)).unwrap();

        assert_eq!(save_dir, requested);
        assert!(requested.is_dir());
    }

    #[test]
    fn save_dir_over_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("taken");
        std::fs::write(&blocker, b"").unwrap();

        let result = create_save_dir(Some(&blocker));

        assert!(matches!(
            result,
            Err(VisualizerError::CreateDirectory { path, .. }) if path == blocker
        ));
    }

    #[test]
    fn logs_at_info_by_default() {
        assert_eq!(logger_builder().build().filter(), log::LevelFilter::Info);
    }
}
