/// Minimum, maximum and mean of a set of counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl Summary {
    /// Summarises `values`, or returns [`None`] when there is nothing to summarise.
    pub fn of(values: &[usize]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        let mean = values.iter().sum::<usize>() as f64 / values.len() as f64;
        Some(Self { min, max, mean })
    }
}
