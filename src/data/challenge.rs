use crate::data::grid::Grid;
use serde::Deserialize;
use std::collections::BTreeMap;

/// An input grid paired with the output that demonstrates the challenge's rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingExample {
    pub input: Grid,
    pub output: Grid,
}

impl TrainingExample {
    /// Whether the transformation changes the grid's dimensions.
    pub fn changes_shape(&self) -> bool {
        self.input.shape() != self.output.shape()
    }
}

/// An input grid whose expected output lives in the solution set, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestExample {
    pub input: Grid,
}

/// One puzzle: demonstration pairs plus the inputs to be solved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Challenge {
    pub train: Vec<TrainingExample>,
    pub test: Vec<TestExample>,
}

impl Challenge {
    /// Every grid stored in the challenge itself: training inputs and outputs, then test inputs.
    pub fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.train
            .iter()
            .flat_map(|example| [&example.input, &example.output])
            .chain(self.test.iter().map(|example| &example.input))
    }
}

/// All challenges of one dataset split, keyed by challenge identifier.
pub type Challenges = BTreeMap<String, Challenge>;

/// Expected outputs for test examples, keyed by challenge identifier.
///
/// Each list is aligned positionally with the challenge's `test` examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SolutionSet(BTreeMap<String, Vec<Grid>>);

impl SolutionSet {
    /// Number of challenges that have solutions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All solutions recorded for a challenge, if the challenge has an entry.
    pub fn for_challenge(&self, challenge_id: &str) -> Option<&[Grid]> {
        self.0.get(challenge_id).map(Vec::as_slice)
    }

    /// The solution to a single test example.
    ///
    /// Returns [`None`] when the challenge has no entry or the index is out of range;
    /// callers treat that as "solution unavailable" rather than an error.
    pub fn get(&self, challenge_id: &str, test_index: usize) -> Option<&Grid> {
        self.for_challenge(challenge_id)
            .and_then(|solutions| solutions.get(test_index))
    }
}

impl FromIterator<(String, Vec<Grid>)> for SolutionSet {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Grid>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One loaded dataset split: its challenges and whatever solutions are known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub challenges: Challenges,
    pub solutions: SolutionSet,
}

impl Dataset {
    /// Every grid in the dataset, challenge by challenge, each followed by its solutions.
    ///
    /// Solution entries without a matching challenge are skipped.
    pub fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.challenges.iter().flat_map(|(id, challenge)| {
            challenge
                .grids()
                .chain(self.solutions.for_challenge(id).unwrap_or_default())
        })
    }
}
