//! Uniform sampling of a closed interval.

/// Closed interval of values (first and last both included).
pub type Range = (f64, f64);

/// Plan for `count` uniformly spaced samples spanning a closed range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleSpec {
    count: usize,
    range: Range,
    delta: f64,
}

impl SampleSpec {
    /// Spacing is zero for fewer than two samples, so a single sample sits at
    /// the start of the range.
    pub fn new(count: usize, range: Range) -> Self {
        let delta = if count > 1 {
            (range.1 - range.0) / (count - 1) as f64
        } else {
            0.0
        };
        Self {
            count,
            range,
            delta,
        }
    }

    /// Number of samples generated by this spec.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// First included value (start of range).
    pub fn first(&self) -> f64 {
        self.range.0
    }

    /// Last included value (end of range).
    pub fn last(&self) -> f64 {
        self.range.1
    }

    /// Value for sampling index `ndx`. Not bounds checked: indices past
    /// `size()` extrapolate beyond the range.
    pub fn value_at_index(&self, ndx: usize) -> f64 {
        self.first() + ndx as f64 * self.delta
    }

    /// Iterator over all sample values in index order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |ndx| self.value_at_index(ndx))
    }
}

/// Every sample described by `spec`, in order.
pub fn samples_according_to(spec: &SampleSpec) -> Vec<f64> {
    spec.values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_included() {
        let spec = SampleSpec::new(33, (-100_000.0, 100_000.0));
        let vals = samples_according_to(&spec);
        assert_eq!(vals.len(), 33);
        assert_relative_eq!(vals[0], -100_000.0);
        assert_relative_eq!(vals[32], 100_000.0, epsilon = 1e-9);
        assert_relative_eq!(spec.delta(), 6250.0);
    }

    #[test]
    fn test_monotonic_increasing() {
        let spec = SampleSpec::new(17, (0.0, std::f64::consts::FRAC_PI_2));
        let vals = samples_according_to(&spec);
        assert!(vals.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(*vals.last().unwrap(), spec.last(), epsilon = 1e-15);
    }

    #[test]
    fn test_reversed_range_decreases() {
        let spec = SampleSpec::new(5, (1.0, -1.0));
        let vals = samples_according_to(&spec);
        assert_eq!(vals, vec![1.0, 0.5, 0.0, -0.5, -1.0]);
    }

    #[test]
    fn test_single_sample_sits_at_start() {
        let spec = SampleSpec::new(1, (2.0, 9.0));
        assert_eq!(spec.delta(), 0.0);
        assert_eq!(samples_according_to(&spec), vec![2.0]);
        // unchecked lookup keeps returning the start
        assert_eq!(spec.value_at_index(4), 2.0);
    }

    #[test]
    fn test_empty_spec() {
        let spec = SampleSpec::new(0, (0.0, 1.0));
        assert!(samples_according_to(&spec).is_empty());
    }

    #[test]
    fn test_index_past_end_extrapolates() {
        let spec = SampleSpec::new(3, (0.0, 2.0));
        assert_relative_eq!(spec.value_at_index(5), 5.0);
    }
}
