use arc_data_vis::analysis::categories::InterestingChallenges;
use arc_data_vis::analysis::statistics::{DatasetStatistics, StatsError};
use arc_data_vis::data::loading::{load_split, LoadError};
use arc_data_vis::data::split::DataSplit;
use arc_data_vis::render::plots::{render_statistics_figure, PlotError};
use arc_data_vis::utilities::sampling::make_rng;
use argh::FromArgs;
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the statistics overview written into the save directory.
const STATISTICS_FILE_NAME: &str = "arc_statistics.png";

/// Explore the ARC training data: statistics, interesting challenges and recommendations
#[derive(FromArgs, Debug)]
pub struct Args {
    /// directory containing the ARC JSON files (default: data)
    #[argh(option, default = "PathBuf::from(\"data\")")]
    data_dir: PathBuf,

    /// directory the statistics figure is saved to (default: current directory)
    #[argh(option, default = "PathBuf::from(\".\")")]
    save_dir: PathBuf,

    /// seed for the random example picks
    #[argh(option)]
    seed: Option<u64>,
}

/// Errors that can occur while exploring a dataset
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Plotting error: {0}")]
    Plot(#[from] PlotError),

    #[error("Failed to create output directory {}: {}", .path.display(), .source)]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

type Result<T> = core::result::Result<T, ExplorerError>;

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
    let mut rng = make_rng(args.seed);

    println!("Loading ARC data...");
    let dataset = load_split(&args.data_dir, DataSplit::Training)?;
    println!(
        "Loaded {} challenges and {} solutions",
        dataset.challenges.len(),
        dataset.solutions.len()
    );

    let stats = DatasetStatistics::collect(&dataset)?;
    println!("{}", stats.report());

    let interesting = InterestingChallenges::classify(&dataset.challenges);
    println!("{}", interesting.report(&mut rng));

    std::fs::create_dir_all(&args.save_dir).map_err(|source| ExplorerError::CreateDirectory {
        path: args.save_dir.clone(),
        source,
    })?;
    let statistics_path = args.save_dir.join(STATISTICS_FILE_NAME);
    render_statistics_figure(&stats, &statistics_path)?;
    println!("Saved statistics plots to {}", statistics_path.display());

    let recommendations = interesting.recommendations(&mut rng);
    println!("\n=== Recommendations ===");
    println!("For visualization practice, try these challenges:");
    for (category, challenge_id) in &recommendations {
        println!("  {}: {}", category.label(), challenge_id);
    }

    println!("\nUse the visualizer to view these:");
    for (_, challenge_id) in &recommendations {
        println!("  arc-visualizer --challenge-id {}", challenge_id);
    }

    Ok(())
}
