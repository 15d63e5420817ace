//! Colour frequency counting
//!
//! This module flattens every cell of a dataset into one count per palette value and
//! derives the summary figures shown next to the frequency histogram:
//! - [`ValueFrequencies`] for counting and the most/least common values
//! - A per-value ASCII table formatted with the [`tabled`] crate

use crate::data::challenge::Dataset;
use crate::data::grid::{Grid, COLOR_COUNT};
use crate::utilities::formatting::format_thousands;
use tabled::{Table, Tabled};

/// Percentage of cells represented by one block in the console bar column.
const PERCENT_PER_BAR_BLOCK: f64 = 5.0;

/// Number of cells holding each colour value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueFrequencies {
    counts: [u64; COLOR_COUNT],
}

impl ValueFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every cell of every grid in the dataset, solutions included.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut frequencies = Self::new();
        for grid in dataset.grids() {
            frequencies.add_grid(grid);
        }
        frequencies
    }

    pub fn add_grid(&mut self, grid: &Grid) {
        for &color in grid.cells() {
            self.counts[usize::from(color)] += 1;
        }
    }

    /// Adds the counts of another tally to this one.
    pub fn merge(&mut self, other: &ValueFrequencies) {
        for (count, extra) in self.counts.iter_mut().zip(other.counts) {
            *count += extra;
        }
    }

    pub fn count(&self, value: u8) -> u64 {
        self.counts.get(usize::from(value)).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64; COLOR_COUNT] {
        &self.counts
    }

    /// Total number of cells counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of colour values that occur at least once.
    pub fn distinct_values(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Colour values that occur at least once, ascending.
    pub fn present_values(&self) -> Vec<u8> {
        (0..COLOR_COUNT as u8)
            .filter(|&value| self.count(value) > 0)
            .collect()
    }

    /// The most frequent value and its count. Ties go to the lowest value.
    pub fn most_common(&self) -> Option<(u8, u64)> {
        self.present().fold(None, |best, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
    }

    /// The least frequent value among those present. Ties go to the lowest value.
    pub fn least_common(&self) -> Option<(u8, u64)> {
        self.present().fold(None, |best, (value, count)| match best {
            Some((_, best_count)) if best_count <= count => best,
            _ => Some((value, count)),
        })
    }

    /// Ratio of the most common count to the least common count.
    pub fn most_to_least_ratio(&self) -> Option<f64> {
        let (_, most) = self.most_common()?;
        let (_, least) = self.least_common()?;
        Some(most as f64 / least as f64)
    }

    /// Share of all cells holding `value`, in percent.
    pub fn percentage(&self, value: u8) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(value) as f64 / total as f64 * 100.0
    }

    fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(value, &count)| (value as u8, count))
    }
}

/// A single row of the console frequency table
#[derive(Debug, Clone, Tabled)]
pub struct FrequencyRow {
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Count")]
    pub count: String,
    #[tabled(rename = "Percentage")]
    pub percentage: String,
    #[tabled(rename = "Bar")]
    pub bar: String,
}

/// One row per palette value followed by a total row.
pub fn frequency_rows(frequencies: &ValueFrequencies) -> Vec<FrequencyRow> {
    let mut rows: Vec<FrequencyRow> = (0..COLOR_COUNT as u8)
        .map(|value| {
            let percentage = frequencies.percentage(value);
            FrequencyRow {
                value: value.to_string(),
                count: format_thousands(frequencies.count(value)),
                percentage: format!("{:.2}%", percentage),
                bar: "█".repeat((percentage / PERCENT_PER_BAR_BLOCK) as usize),
            }
        })
        .collect();

    rows.push(FrequencyRow {
        value: "TOTAL".to_string(),
        count: format_thousands(frequencies.total()),
        percentage: "100.00%".to_string(),
        bar: String::new(),
    });
    rows
}

/// Formats the full console report printed by the histogram tool.
pub fn frequency_report(frequencies: &ValueFrequencies) -> String {
    let heading = "=".repeat(60);
    let mut report = format!(
        "{heading}\nARC CHALLENGE INTEGER STATISTICS\n{heading}\n\
         Total cells analyzed: {}\n\
         Unique values found: {}\n\n\
         Frequency Distribution:\n{}\n",
        format_thousands(frequencies.total()),
        frequencies.distinct_values(),
        Table::new(frequency_rows(frequencies)),
    );

    if let (Some((most, most_count)), Some((least, least_count)), Some(ratio)) = (
        frequencies.most_common(),
        frequencies.least_common(),
        frequencies.most_to_least_ratio(),
    ) {
        report.push_str(&format!(
            "\nMost common value: {} ({} occurrences)\n\
             Least common value: {} ({} occurrences)\n\
             Ratio (most/least): {:.2}x\n",
            most,
            format_thousands(most_count),
            least,
            format_thousands(least_count),
            ratio
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::tests::dataset_builders::{challenge, dataset, grid};

    fn tally(grids: &[Grid]) -> ValueFrequencies {
        let mut frequencies = ValueFrequencies::new();
        for grid in grids {
            frequencies.add_grid(grid);
        }
        frequencies
    }

    #[test]
    fn counts_every_cell() {
        let frequencies = tally(&[grid(&[[0, 0, 1], [2, 0, 1]]), grid(&[[9]])]);

        assert_eq!(frequencies.counts(), &[3, 2, 1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(frequencies.total(), 7);
        assert_eq!(frequencies.distinct_values(), 4);
        assert_eq!(frequencies.present_values(), vec![0, 1, 2, 9]);
        assert_eq!(frequencies.most_common(), Some((0, 3)));
        assert_eq!(frequencies.least_common(), Some((2, 1)));
        assert_eq!(frequencies.most_to_least_ratio(), Some(3.0));
    }

    #[test]
    fn ties_resolve_to_lowest_value() {
        let frequencies = tally(&[grid(&[[5, 3, 5, 3, 8]])]);

        assert_eq!(frequencies.most_common(), Some((3, 2)));
        assert_eq!(frequencies.least_common(), Some((8, 1)));
    }

    #[test]
    fn empty_tally_has_no_extremes() {
        let frequencies = ValueFrequencies::new();

        assert_eq!(frequencies.total(), 0);
        assert_eq!(frequencies.most_common(), None);
        assert_eq!(frequencies.least_common(), None);
        assert_eq!(frequencies.most_to_least_ratio(), None);
        assert_eq!(frequencies.percentage(0), 0.0);
    }

    #[test]
    fn split_totals_add_up_to_combined_total() {
        let training = dataset(vec![(
            "a",
            challenge(vec![(grid(&[[1, 2]]), grid(&[[3]]))], vec![grid(&[[4, 4]])]),
            Some(vec![grid(&[[5]])]),
        )]);
        let evaluation = dataset(vec![(
            "b",
            challenge(vec![(grid(&[[0]]), grid(&[[0, 0], [0, 0]]))], vec![grid(&[[7]])]),
            None,
        )]);

        let training_only = ValueFrequencies::from_dataset(&training);
        let test_only = ValueFrequencies::from_dataset(&evaluation);
        let mut combined = ValueFrequencies::new();
        combined.merge(&training_only);
        combined.merge(&test_only);

        assert_eq!(training_only.total(), 6);
        assert_eq!(test_only.total(), 6);
        assert_eq!(combined.total(), training_only.total() + test_only.total());
        assert_eq!(combined.count(0), 5);
    }

    #[test]
    fn ignores_solutions_without_a_challenge() {
        let mut dataset = dataset(vec![(
            "a",
            challenge(vec![(grid(&[[1, 2]]), grid(&[[3]]))], vec![grid(&[[4, 4]])]),
            Some(vec![grid(&[[5]])]),
        )]);
        dataset.solutions = [
            ("a".to_string(), vec![grid(&[[5]])]),
            ("zzz".to_string(), vec![grid(&[[9, 9], [9, 9]])]),
        ]
        .into_iter()
        .collect();

        let frequencies = ValueFrequencies::from_dataset(&dataset);

        assert_eq!(frequencies.count(9), 0);
        assert_eq!(frequencies.total(), 6);
    }

    #[test]
    fn report_contains_table_and_extremes() {
        let frequencies = tally(&[grid(&[[0; 20], [1; 20]]), grid(&[[4]])]);
        let report = frequency_report(&frequencies);

        assert!(report.contains("Total cells analyzed: 41"));
        assert!(report.contains("Percentage"));
        assert!(report.contains("TOTAL"));
        assert!(report.contains("Most common value: 0 (20 occurrences)"));
        assert!(report.contains("Least common value: 4 (1 occurrences)"));
        assert!(report.contains("Ratio (most/least): 20.00x"));
    }

    #[test]
    fn rows_scale_bars_by_percentage() {
        let frequencies = tally(&[grid(&[[6, 6, 6, 2]])]);
        let rows = frequency_rows(&frequencies);

        assert_eq!(rows.len(), COLOR_COUNT + 1);
        assert_eq!(rows[6].percentage, "75.00%");
        assert_eq!(rows[6].bar.chars().count(), 15);
        assert_eq!(rows[2].bar.chars().count(), 5);
        assert!(rows[0].bar.is_empty());
    }
}
