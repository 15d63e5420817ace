//! Classification of challenges into overlapping interest categories
//!
//! A challenge belongs to a category when at least one of its training examples has the
//! category's property. Categories are independent; a challenge can be in any number of
//! them, including none.

use crate::data::challenge::{Challenges, TrainingExample};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Grids with more cells than this count as large.
pub const LARGE_GRID_AREA: usize = 200;

/// Grids with fewer cells than this count as small.
pub const SMALL_GRID_AREA: usize = 10;

/// Grids using more distinct colours than this count as colourful.
pub const MANY_COLORS: usize = 5;

/// Examples whose input and output both use at most this many colours count as simple.
pub const SIMPLE_COLORS: usize = 2;

/// Number of random example IDs printed per category.
const EXAMPLES_PER_CATEGORY: usize = 3;

const CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    LargeGrids = 0,
    SmallGrids = 1,
    ManyColors = 2,
    SimplePatterns = 3,
    SizeChanges = 4,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::LargeGrids,
        Category::SmallGrids,
        Category::ManyColors,
        Category::SimplePatterns,
        Category::SizeChanges,
    ];

    /// Order in which categories are recommended to the user.
    pub const RECOMMENDATION_ORDER: [Category; 4] = [
        Category::SimplePatterns,
        Category::SizeChanges,
        Category::ManyColors,
        Category::LargeGrids,
    ];

    /// Short label, e.g. `Large grids`.
    pub fn label(self) -> &'static str {
        match self {
            Category::LargeGrids => "Large grids",
            Category::SmallGrids => "Small grids",
            Category::ManyColors => "Many colors",
            Category::SimplePatterns => "Simple patterns",
            Category::SizeChanges => "Size changes",
        }
    }

    /// Label including the threshold, e.g. `large grids (>200 cells)`.
    pub fn description(self) -> String {
        match self {
            Category::LargeGrids => format!("large grids (>{} cells)", LARGE_GRID_AREA),
            Category::SmallGrids => format!("small grids (<{} cells)", SMALL_GRID_AREA),
            Category::ManyColors => format!("many colors (>{})", MANY_COLORS),
            Category::SimplePatterns => format!("simple patterns (1-{} colors)", SIMPLE_COLORS),
            Category::SizeChanges => "size changes".to_string(),
        }
    }

    /// Whether a single training example has this category's property.
    pub fn matches(self, example: &TrainingExample) -> bool {
        let (input, output) = (&example.input, &example.output);
        match self {
            Category::LargeGrids => {
                input.area() > LARGE_GRID_AREA || output.area() > LARGE_GRID_AREA
            }
            Category::SmallGrids => {
                input.area() < SMALL_GRID_AREA || output.area() < SMALL_GRID_AREA
            }
            Category::ManyColors => {
                input.distinct_color_count() > MANY_COLORS
                    || output.distinct_color_count() > MANY_COLORS
            }
            Category::SimplePatterns => {
                input.distinct_color_count() <= SIMPLE_COLORS
                    && output.distinct_color_count() <= SIMPLE_COLORS
            }
            Category::SizeChanges => example.changes_shape(),
        }
    }
}

/// Challenge IDs per category, each set sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestingChallenges {
    members: [BTreeSet<String>; CATEGORY_COUNT],
}

impl InterestingChallenges {
    /// Sort every challenge into the categories its training examples satisfy.
    pub fn classify(challenges: &Challenges) -> Self {
        let mut result = Self::default();
        for (id, challenge) in challenges {
            for category in Category::ALL {
                if challenge.train.iter().any(|example| category.matches(example)) {
                    result.members[category as usize].insert(id.clone());
                }
            }
        }
        result
    }

    /// IDs of the challenges in a category.
    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        &self.members[category as usize]
    }

    /// Every category the given challenge belongs to.
    pub fn categories_of(&self, challenge_id: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.get(category).contains(challenge_id))
            .collect()
    }

    /// Up to `amount` random IDs from a category.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        category: Category,
        amount: usize,
        rng: &mut R,
    ) -> Vec<&str> {
        self.get(category)
            .iter()
            .map(String::as_str)
            .choose_multiple(rng, amount)
    }

    /// One random ID from each non-empty category, in recommendation order.
    pub fn recommendations<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<(Category, &str)> {
        Category::RECOMMENDATION_ORDER
            .into_iter()
            .filter_map(|category| {
                self.get(category)
                    .iter()
                    .choose(&mut *rng)
                    .map(|id| (category, id.as_str()))
            })
            .collect()
    }

    /// Formats the per-category counts and random examples printed by the explorer.
    pub fn report<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut report = String::from("=== Interesting Challenges ===\n");
        for category in Category::ALL {
            let members = self.get(category);
            report.push_str(&format!(
                "Challenges with {}: {}\n",
                category.description(),
                members.len()
            ));

            if !members.is_empty() {
                let examples = self.sample(category, EXAMPLES_PER_CATEGORY, &mut *rng);
                report.push_str(&format!("  Examples: {:?}\n", examples));
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::challenge::Challenge;
    use crate::utilities::tests::dataset_builders::{challenge, filled, grid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single(id: &str, challenge: Challenge) -> Challenges {
        [(id.to_string(), challenge)].into_iter().collect()
    }

    #[test]
    fn small_uniform_example_is_small_and_simple() {
        let challenges = single(
            "a",
            challenge(vec![(grid(&[[1, 1], [1, 1]]), grid(&[[2, 2], [2, 2]]))], vec![]),
        );

        let interesting = InterestingChallenges::classify(&challenges);

        assert_eq!(
            interesting.categories_of("a"),
            vec![Category::SmallGrids, Category::SimplePatterns]
        );
    }

    #[test]
    fn large_when_another_example_exceeds_threshold() {
        let challenges = single(
            "a",
            challenge(
                vec![
                    (grid(&[[1, 1], [1, 1]]), grid(&[[2, 2], [2, 2]])),
                    (filled(15, 0), filled(15, 3)),
                ],
                vec![],
            ),
        );

        let interesting = InterestingChallenges::classify(&challenges);

        assert!(interesting.get(Category::LargeGrids).contains("a"));
        assert!(interesting.get(Category::SmallGrids).contains("a"));
        assert!(!interesting.get(Category::SizeChanges).contains("a"));
    }

    #[test]
    fn area_thresholds_are_exclusive() {
        // 10 cells is not small and 200 cells is not large.
        let challenges = single(
            "a",
            challenge(
                vec![(
                    grid(&[[1; 10]]),
                    grid(&vec![vec![1; 10]; 20]),
                )],
                vec![],
            ),
        );

        let interesting = InterestingChallenges::classify(&challenges);

        assert!(!interesting.get(Category::SmallGrids).contains("a"));
        assert!(!interesting.get(Category::LargeGrids).contains("a"));
        assert!(interesting.get(Category::SizeChanges).contains("a"));
    }

    #[test]
    fn many_colors_needs_six_distinct_values() {
        let five = grid(&[[0, 1, 2, 3, 4]]);
        let six = grid(&[[0, 1, 2, 3, 4, 5]]);
        let challenges: Challenges = [
            ("five".to_string(), challenge(vec![(five.clone(), five)], vec![])),
            ("six".to_string(), challenge(vec![(six.clone(), filled(1, 0))], vec![])),
        ]
        .into_iter()
        .collect();

        let interesting = InterestingChallenges::classify(&challenges);

        let expected: BTreeSet<String> = ["six".to_string()].into_iter().collect();
        assert_eq!(interesting.get(Category::ManyColors), &expected);
    }

    #[test]
    fn simple_requires_both_grids() {
        let challenges = single(
            "a",
            challenge(vec![(grid(&[[0, 1]]), grid(&[[0, 1, 2]]))], vec![]),
        );

        let interesting = InterestingChallenges::classify(&challenges);
        assert!(interesting.get(Category::SimplePatterns).is_empty());
    }

    #[test]
    fn recommendations_follow_order_and_skip_empty() {
        let challenges: Challenges = [
            (
                "large".to_string(),
                challenge(vec![(filled(15, 0), filled(15, 0))], vec![]),
            ),
            (
                "resize".to_string(),
                challenge(vec![(filled(3, 0), filled(4, 1))], vec![]),
            ),
        ]
        .into_iter()
        .collect();
        let interesting = InterestingChallenges::classify(&challenges);
        let mut rng = StdRng::seed_from_u64(7);

        let recommendations = interesting.recommendations(&mut rng);

        let categories: Vec<Category> = recommendations.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                Category::SimplePatterns,
                Category::SizeChanges,
                Category::LargeGrids
            ]
        );
        assert_eq!(recommendations[1].1, "resize");
        assert_eq!(recommendations[2].1, "large");
    }

    #[test]
    fn report_counts_each_category() {
        let challenges = single(
            "a",
            challenge(vec![(grid(&[[1, 1], [1, 1]]), grid(&[[2, 2], [2, 2]]))], vec![]),
        );
        let interesting = InterestingChallenges::classify(&challenges);
        let mut rng = StdRng::seed_from_u64(1);

        let report = interesting.report(&mut rng);

        assert!(report.contains("Challenges with small grids (<10 cells): 1"));
        assert!(report.contains("Challenges with large grids (>200 cells): 0"));
        assert!(report.contains("Examples: [\"a\"]"));
    }
}
