use arc_data_vis::analysis::frequencies::{frequency_report, ValueFrequencies};
use arc_data_vis::data::loading::{load_split, LoadError};
use arc_data_vis::data::split::DatasetSelection;
use arc_data_vis::render::plots::{render_frequency_histogram, PlotError};
use arc_data_vis::utilities::formatting::format_thousands;
use arc_data_vis::utilities::timestamp::timestamp;
use argh::FromArgs;
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// Output used when neither a path nor auto-save is given.
const DEFAULT_OUTPUT: &str = "arc_histogram.png";

/// Generate a histogram of ARC challenge integer frequencies
#[derive(FromArgs, Debug)]
pub struct Args {
    /// directory containing the ARC JSON files (default: data)
    #[argh(option, default = "PathBuf::from(\"data\")")]
    data_dir: PathBuf,

    /// path to save the histogram image
    #[argh(option)]
    save_path: Option<PathBuf>,

    /// include only training data
    #[argh(switch)]
    training_only: bool,

    /// include only test data
    #[argh(switch)]
    test_only: bool,

    /// save with a timestamped file name when no path is given
    #[argh(switch)]
    auto_save: bool,
}

impl Args {
    /// Where the histogram is written.
    fn output_path(&self) -> PathBuf {
        match &self.save_path {
            Some(path) => path.clone(),
            None if self.auto_save => PathBuf::from(format!("arc_histogram_{}.png", timestamp())),
            None => PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Errors that can occur while building the histogram
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Plotting error: {0}")]
    Plot(#[from] PlotError),
}

type Result<T> = core::result::Result<T, HistogramError>;

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
    let selection = DatasetSelection::from_flags(args.training_only, args.test_only);

    println!("Loading ARC data...");
    let mut frequencies = ValueFrequencies::new();
    for split in selection.splits() {
        let dataset = match load_split(&args.data_dir, split) {
            Ok(dataset) => dataset,
            Err(error @ LoadError::FileRead { .. }) => {
                println!("Error loading data: {}", error);
                println!("Make sure the data directory contains the required JSON files.");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };
        println!(
            "Loaded {} {} challenges",
            dataset.challenges.len(),
            split.label().to_lowercase()
        );

        let split_frequencies = ValueFrequencies::from_dataset(&dataset);
        println!(
            "Found {} integers in {} data",
            format_thousands(split_frequencies.total()),
            split.label().to_lowercase()
        );
        frequencies.merge(&split_frequencies);
    }

    println!(
        "\nTotal integers collected: {}",
        format_thousands(frequencies.total())
    );

    let title = format!(
        "ARC Challenge Integer Distribution ({} Data)",
        selection.description()
    );
    let output_path = args.output_path();

    println!("\nGenerating histogram...");
    render_frequency_histogram(&frequencies, &title, &output_path)?;
    println!("Histogram saved to: {}", output_path.display());

    println!("{}", frequency_report(&frequencies));

    Ok(())
}
