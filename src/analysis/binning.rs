//! Histogram binning for the statistics overview
//!
//! Two binning schemes are used: one bin per integer for small counts (examples per
//! challenge), and a fixed number of equal-width bins for wide-ranging values such as
//! grid areas.

/// A half-open bin `[start, end)` and the number of values that fell into it.
///
/// The last bin produced by [`equal_width_bins`] also includes its `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// One bin per integer from 1 up to the largest value.
///
/// Values below 1 fall outside every bin and are not counted.
pub fn unit_bins(values: &[usize]) -> Vec<Bin> {
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };

    (1..=max.max(1))
        .map(|value| Bin {
            start: value as f64,
            end: (value + 1) as f64,
            count: values.iter().filter(|&&v| v == value).count(),
        })
        .collect()
}

/// Splits the range of `values` into `bin_count` bins of equal width.
///
/// When every value is identical the range is widened by 0.5 on both sides so the
/// bins still have a non-zero width.
pub fn equal_width_bins(values: &[usize], bin_count: usize) -> Vec<Bin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bin_count == 0 {
        return Vec::new();
    }

    let (low, high) = if min == max {
        (min as f64 - 0.5, max as f64 + 0.5)
    } else {
        (min as f64, max as f64)
    };
    let width = (high - low) / bin_count as f64;

    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|index| Bin {
            start: low + width * index as f64,
            end: low + width * (index + 1) as f64,
            count: 0,
        })
        .collect();

    for &value in values {
        let offset = ((value as f64 - low) / width) as usize;
        let index = offset.min(bin_count - 1);
        bins[index].count += 1;
    }

    bins
}
