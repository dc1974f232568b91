//! Tests for fixed-width intensity histograms

#[cfg(test)]
mod tests {
    use chesswarp::analysis::histogram::{compute_default_histogram, compute_histogram};
    use chesswarp::io::configuration::MAX_HISTOGRAM_BINS;
    use chesswarp::spatial::raster::GrayscaleBuffer;
    use chesswarp::AnalysisError;

    // Tests the default edges split [0, 255] into ten 25.5-wide bins
    // Verified by using 11 bins
    #[test]
    fn test_default_edges() {
        let histogram = compute_default_histogram(&GrayscaleBuffer::from_samples(vec![1.0])).unwrap();

        assert_eq!(histogram.bin_count(), 10);
        assert_eq!(histogram.edges.len(), 11);
        assert_eq!(histogram.bin_bounds(0), Some((0.0, 25.5)));
        assert_eq!(histogram.bin_bounds(9), Some((229.5, 255.0)));
        assert_eq!(histogram.bin_bounds(10), None);
    }

    // Tests bins are closed below and open above, except the last
    // Verified by closing every bin on the upper edge
    #[test]
    fn test_boundary_convention() {
        let buffer = GrayscaleBuffer::from_samples(vec![0.0, 25.499, 25.5, 51.0, 229.5, 254.9, 255.0]);
        let histogram = compute_default_histogram(&buffer).unwrap();

        assert_eq!(histogram.counts, vec![2, 1, 1, 0, 0, 0, 0, 0, 0, 3]);
    }

    // Tests counts sum to the sample count for in-range data
    // Verified by skipping the final sample
    #[test]
    fn test_counts_sum_to_sample_count() {
        let samples: Vec<f64> = (0..=1020).map(|i| f64::from(i) * 0.25).collect();
        let buffer = GrayscaleBuffer::from_samples(samples);
        let histogram = compute_default_histogram(&buffer).unwrap();

        assert_eq!(histogram.total(), buffer.len());
    }

    // Tests identical samples land in a single bin
    // Verified by spreading samples across neighbouring bins
    #[test]
    fn test_identical_samples_single_bin() {
        let buffer = GrayscaleBuffer::from_samples(vec![129.14; 500]);
        let histogram = compute_default_histogram(&buffer).unwrap();

        assert_eq!(histogram.counts.get(5), Some(&500));
        assert_eq!(histogram.max_count(), 500);
        assert_eq!(histogram.total(), 500);
    }

    // Tests out-of-range and NaN samples are not counted
    // Verified by clamping samples into the range
    #[test]
    fn test_out_of_range_ignored() {
        let buffer = GrayscaleBuffer::from_samples(vec![-1.0, 255.01, f64::NAN, 10.0]);
        let histogram = compute_default_histogram(&buffer).unwrap();

        assert_eq!(histogram.total(), 1);
        assert_eq!(histogram.counts.first(), Some(&1));
    }

    // Tests empty input yields all-zero counts
    // Verified by returning an error for empty buffers
    #[test]
    fn test_empty_buffer() {
        let histogram = compute_default_histogram(&GrayscaleBuffer::from_samples(Vec::new())).unwrap();
        assert_eq!(histogram.counts, vec![0; 10]);
    }

    // Tests custom bin counts and ranges
    // Verified by ignoring the requested range
    #[test]
    fn test_custom_bins() {
        let buffer = GrayscaleBuffer::from_samples(vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        let histogram = compute_histogram(&buffer, 4, (0.0, 2.0)).unwrap();

        assert_eq!(histogram.counts, vec![1, 1, 1, 2]);
        assert_eq!(histogram.edges, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    // Tests invalid bin counts and ranges are rejected
    // Verified by removing the bin count limit
    #[test]
    fn test_invalid_parameters() {
        let buffer = GrayscaleBuffer::from_samples(vec![1.0]);

        for (bins, range, expected) in [
            (0, (0.0, 255.0), "bin_count"),
            (MAX_HISTOGRAM_BINS + 1, (0.0, 255.0), "bin_count"),
            (usize::MAX, (0.0, 255.0), "bin_count"),
            (10, (10.0, 10.0), "range"),
            (10, (20.0, 10.0), "range"),
            (10, (0.0, f64::INFINITY), "range"),
        ] {
            match compute_histogram(&buffer, bins, range) {
                Err(AnalysisError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }
}
