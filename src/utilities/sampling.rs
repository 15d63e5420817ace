//! Random selection of challenges

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Creates the random generator used by the tools.
///
/// A fixed seed makes sampling reproducible between runs.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Picks `min(amount, ids.len())` distinct IDs in random order.
pub fn sample_ids<'a, I, R>(ids: I, amount: usize, rng: &mut R) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
    R: rand::Rng + ?Sized,
{
    let mut ids: Vec<&str> = ids.into_iter().map(String::as_str).collect();
    ids.shuffle(rng);
    ids.truncate(amount);
    ids
}
