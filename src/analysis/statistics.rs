//! Dataset-wide descriptive statistics
//!
//! This module walks every challenge of a split and collects the per-challenge example
//! counts, the dimensions of every training pair, and the colour usage across all grids.

use crate::analysis::frequencies::ValueFrequencies;
use crate::analysis::summary::Summary;
use crate::data::challenge::Dataset;
use crate::data::grid::Shape;
use thiserror::Error;

/// Errors that can occur while aggregating statistics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Dataset contains no challenges")]
    EmptyDataset,

    #[error("Dataset contains no training examples")]
    NoTrainingExamples,
}

type Result<T> = core::result::Result<T, StatsError>;

/// Extremes of a list of grid shapes together with a summary of their areas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSummary {
    /// Smallest shape, ordered by height then width.
    pub smallest: Shape,
    /// Largest shape, ordered by height then width.
    pub largest: Shape,
    pub area: Summary,
}

impl ShapeSummary {
    fn of(shapes: &[Shape]) -> Option<Self> {
        Some(Self {
            smallest: *shapes.iter().min()?,
            largest: *shapes.iter().max()?,
            area: Summary::of(&areas(shapes))?,
        })
    }
}

/// Statistics describing one dataset split.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub challenge_count: usize,
    pub solution_count: usize,
    /// Training examples per challenge, in challenge order.
    pub train_counts: Vec<usize>,
    /// Test examples per challenge, in challenge order.
    pub test_counts: Vec<usize>,
    /// Shape of every training input.
    pub input_shapes: Vec<Shape>,
    /// Shape of every training output, aligned with `input_shapes`.
    pub output_shapes: Vec<Shape>,
    pub train_summary: Summary,
    pub test_summary: Summary,
    pub input_summary: ShapeSummary,
    pub output_summary: ShapeSummary,
    /// Colour usage over every grid, solutions included.
    pub frequencies: ValueFrequencies,
}

impl DatasetStatistics {
    /// Aggregate the statistics of a loaded split
    ///
    /// # Arguments
    /// * `dataset` - The split to describe
    ///
    /// # Returns
    /// * `Ok(DatasetStatistics)` - If the split has at least one training example
    /// * `Err(StatsError)` - If there is nothing to aggregate
    pub fn collect(dataset: &Dataset) -> Result<Self> {
        let mut train_counts = Vec::with_capacity(dataset.challenges.len());
        let mut test_counts = Vec::with_capacity(dataset.challenges.len());
        let mut input_shapes = Vec::new();
        let mut output_shapes = Vec::new();

        for challenge in dataset.challenges.values() {
            train_counts.push(challenge.train.len());
            test_counts.push(challenge.test.len());

            for example in &challenge.train {
                input_shapes.push(example.input.shape());
                output_shapes.push(example.output.shape());
            }
        }

        let train_summary = Summary::of(&train_counts).ok_or(StatsError::EmptyDataset)?;
        let test_summary = Summary::of(&test_counts).ok_or(StatsError::EmptyDataset)?;
        let input_summary =
            ShapeSummary::of(&input_shapes).ok_or(StatsError::NoTrainingExamples)?;
        let output_summary =
            ShapeSummary::of(&output_shapes).ok_or(StatsError::NoTrainingExamples)?;

        Ok(Self {
            challenge_count: dataset.challenges.len(),
            solution_count: dataset.solutions.len(),
            train_counts,
            test_counts,
            input_shapes,
            output_shapes,
            train_summary,
            test_summary,
            input_summary,
            output_summary,
            frequencies: ValueFrequencies::from_dataset(dataset),
        })
    }

    /// Every colour value that occurs in the dataset, ascending.
    pub fn unique_values(&self) -> Vec<u8> {
        self.frequencies.present_values()
    }

    pub fn input_areas(&self) -> Vec<usize> {
        areas(&self.input_shapes)
    }

    pub fn output_areas(&self) -> Vec<usize> {
        areas(&self.output_shapes)
    }

    /// Formats the statistics as the console report printed by the explorer.
    pub fn report(&self) -> String {
        format!(
            "=== ARC Dataset Statistics ===\n\
             Total challenges: {}\n\
             Total solutions: {}\n\n\
             Training examples per challenge:\n  {}\n\n\
             Test examples per challenge:\n  {}\n\n\
             Grid sizes (height x width):\n\
             \x20 Input sizes - Min: {}, Max: {}\n\
             \x20 Output sizes - Min: {}, Max: {}\n\
             \x20 Input areas - {}\n\
             \x20 Output areas - {}\n\n\
             Unique values in dataset: {:?}\n",
            self.challenge_count,
            self.solution_count,
            format_summary(&self.train_summary),
            format_summary(&self.test_summary),
            format_shape(self.input_summary.smallest),
            format_shape(self.input_summary.largest),
            format_shape(self.output_summary.smallest),
            format_shape(self.output_summary.largest),
            format_summary(&self.input_summary.area),
            format_summary(&self.output_summary.area),
            self.unique_values(),
        )
    }
}

fn areas(shapes: &[Shape]) -> Vec<usize> {
    shapes.iter().map(|(height, width)| height * width).collect()
}

fn format_summary(summary: &Summary) -> String {
    format!(
        "Min: {}, Max: {}, Avg: {:.1}",
        summary.min, summary.max, summary.mean
    )
}

fn format_shape((height, width): Shape) -> String {
    format!("{}x{}", height, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::tests::dataset_builders::{challenge, dataset, filled, grid};

    fn sample_dataset() -> Dataset {
        dataset(vec![
            (
                "a",
                challenge(
                    vec![
                        (filled(2, 1), filled(2, 2)),
                        (grid(&[[0, 3, 3]]), grid(&[[3], [3], [0]])),
                    ],
                    vec![filled(3, 4)],
                ),
                Some(vec![filled(3, 8)]),
            ),
            (
                "b",
                challenge(
                    vec![
                        (filled(5, 0), filled(5, 5)),
                        (filled(1, 6), filled(1, 6)),
                        (filled(4, 7), filled(2, 7)),
                    ],
                    vec![filled(2, 0), filled(2, 0)],
                ),
                None,
            ),
        ])
    }

    #[test]
    fn collects_counts_and_shapes() {
        let stats = DatasetStatistics::collect(&sample_dataset()).unwrap();

        assert_eq!(stats.challenge_count, 2);
        assert_eq!(stats.solution_count, 1);
        assert_eq!(stats.train_counts, vec![2, 3]);
        assert_eq!(stats.test_counts, vec![1, 2]);
        assert_eq!(stats.train_summary.mean, 2.5);
        assert_eq!(stats.test_summary.max, 2);

        assert_eq!(stats.input_shapes, vec![(2, 2), (1, 3), (5, 5), (1, 1), (4, 4)]);
        assert_eq!(stats.output_shapes, vec![(2, 2), (3, 1), (5, 5), (1, 1), (2, 2)]);
        assert_eq!(stats.input_summary.smallest, (1, 1));
        assert_eq!(stats.input_summary.largest, (5, 5));
        assert_eq!(stats.output_summary.smallest, (1, 1));
        assert_eq!(stats.input_summary.area.max, 25);
        assert_eq!(stats.input_areas(), vec![4, 3, 25, 1, 16]);
        assert_eq!(stats.output_areas(), vec![4, 3, 25, 1, 4]);
    }

    #[test]
    fn unique_values_are_sorted_palette_subset() {
        let stats = DatasetStatistics::collect(&sample_dataset()).unwrap();
        let values = stats.unique_values();

        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(values.iter().all(|&value| value < 10));
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let result = DatasetStatistics::collect(&Dataset::default());
        assert_eq!(result, Err(StatsError::EmptyDataset));
    }

    #[test]
    fn dataset_without_training_examples_is_an_error() {
        let only_tests = dataset(vec![("a", challenge(vec![], vec![filled(2, 1)]), None)]);

        let result = DatasetStatistics::collect(&only_tests);
        assert_eq!(result, Err(StatsError::NoTrainingExamples));
    }

    #[test]
    fn report_lists_summaries() {
        let report = DatasetStatistics::collect(&sample_dataset()).unwrap().report();

        assert!(report.contains("Total challenges: 2"));
        assert!(report.contains("Min: 2, Max: 3, Avg: 2.5"));
        assert!(report.contains("Input sizes - Min: 1x1, Max: 5x5"));
        assert!(report.contains("Unique values in dataset: [0, 1, 2, 3, 4, 5, 6, 7, 8]"));
    }
}
