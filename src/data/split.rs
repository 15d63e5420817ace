//! Dataset splits and the file names they are stored under

/// One of the published ARC-AGI dataset splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSplit {
    Training,
    Evaluation,
}

impl DataSplit {
    /// File name of the challenge document for this split.
    pub fn challenges_file_name(self) -> &'static str {
        match self {
            DataSplit::Training => "arc-agi_training_challenges.json",
            DataSplit::Evaluation => "arc-agi_evaluation_challenges.json",
        }
    }

    /// File name of the solution document for this split.
    pub fn solutions_file_name(self) -> &'static str {
        match self {
            DataSplit::Training => "arc-agi_training_solutions.json",
            DataSplit::Evaluation => "arc-agi_evaluation_solutions.json",
        }
    }

    /// Name shown to users. The evaluation split is presented as "test" data.
    pub fn label(self) -> &'static str {
        match self {
            DataSplit::Training => "Training",
            DataSplit::Evaluation => "Test",
        }
    }
}

/// Which splits contribute to a frequency count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSelection {
    pub training: bool,
    pub evaluation: bool,
}

impl DatasetSelection {
    /// Interprets the `--training-only` / `--test-only` switches.
    ///
    /// Setting exactly one switch narrows the selection to that split. Setting
    /// neither or both selects every split.
    pub fn from_flags(training_only: bool, test_only: bool) -> Self {
        if training_only == test_only {
            return Self {
                training: true,
                evaluation: true,
            };
        }

        Self {
            training: training_only,
            evaluation: test_only,
        }
    }

    /// The selected splits, training first.
    pub fn splits(self) -> Vec<DataSplit> {
        let mut splits = Vec::with_capacity(2);
        if self.training {
            splits.push(DataSplit::Training);
        }
        if self.evaluation {
            splits.push(DataSplit::Evaluation);
        }
        splits
    }

    /// Human-readable description such as `Training + Test`.
    pub fn description(self) -> String {
        self.splits()
            .into_iter()
            .map(DataSplit::label)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
