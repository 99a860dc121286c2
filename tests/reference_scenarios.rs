//! Fixed-scenario checks for regressogram construction

use approx::{assert_abs_diff_eq, assert_relative_eq};
use scedastic::{
    decile_regressogram, dispersion_regressogram, uniform_regressogram, BinningScheme, Error,
    RegressogramBuilder, RelativeMad, SampleQuantile, UniformBins,
};

#[test]
fn outlier_bin_shows_positive_dispersion() {
    let predictor: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let response = vec![2.0, 2.0, 2.0, 2.0, 2.0, 100.0, 2.0, 2.0, 2.0, 2.0];
    let scheme = BinningScheme::Uniform { bins: Some(2) };
    let rg = dispersion_regressogram(&predictor, &response, &scheme).unwrap();

    assert_eq!(rg.len(), 2);
    let bins = rg.bins();
    assert_relative_eq!(bins[0].left, 1.0);
    assert_relative_eq!(bins[0].right, 5.5);
    assert_relative_eq!(bins[1].right, 10.0);
    assert_relative_eq!(bins[0].midpoint(), 3.25, epsilon = 1e-12);
    assert_relative_eq!(bins[1].midpoint(), 7.75, epsilon = 1e-12);
    assert_eq!(bins[0].count, 5);
    assert_eq!(bins[1].count, 5);

    // First bin is constant: zero spread
    assert_abs_diff_eq!(bins[0].dispersion, 0.0, epsilon = 1e-9);
    // The outlier inflates the second bin's MAD relative to its median
    assert!(bins[1].dispersion > 0.01);
}

#[test]
fn sample_median_scores_lone_outlier_bin_as_zero() {
    // With the classical sample median, the deviations in the outlier bin
    // are [98, 0, 0, 0, 0] and their median is exactly zero. The default
    // Harrell-Davis median is what makes the scenario above register.
    let predictor: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let response = vec![2.0, 2.0, 2.0, 2.0, 2.0, 100.0, 2.0, 2.0, 2.0, 2.0];
    let builder = RegressogramBuilder::new(UniformBins::with_bins(2));
    let rg = builder
        .build(&predictor, &response, &RelativeMad::new(), &SampleQuantile)
        .unwrap();

    assert_abs_diff_eq!(rg.bins()[1].dispersion, 0.0, epsilon = 1e-12);
}

#[test]
fn constant_predictor_is_degenerate() {
    let predictor = vec![5.0; 10];
    let response: Vec<f64> = (0..10).map(|i| i as f64).collect();

    let err = uniform_regressogram(&predictor, &response).unwrap_err();
    assert!(matches!(err, Error::DegenerateBinning(_)));

    // The quantile scheme collapses the same way
    let err = decile_regressogram(&predictor, &response).unwrap_err();
    assert!(matches!(err, Error::DegenerateBinning(_)));
}

#[test]
fn malformed_samples_are_rejected() {
    let err = uniform_regressogram(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = uniform_regressogram(&[1.0], &[1.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = uniform_regressogram(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn zero_median_bin_carries_nan_marker() {
    let predictor: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let mut response = vec![0.0; 5];
    response.extend_from_slice(&[3.0, 4.0, 5.0, 6.0, 7.0]);
    let scheme = BinningScheme::Uniform { bins: Some(2) };
    let rg = dispersion_regressogram(&predictor, &response, &scheme).unwrap();

    assert_eq!(rg.len(), 2);
    assert!(rg.bins()[0].dispersion.is_nan());
    assert!(rg.bins()[1].dispersion.is_finite());

    // points() keeps the marker, finite_points() filters it
    assert_eq!(rg.points().len(), 2);
    assert_eq!(rg.finite_points().len(), 1);
}

#[test]
fn gap_in_predictor_drops_empty_bins() {
    let predictor = vec![0.0, 0.1, 0.2, 0.3, 9.7, 9.8, 9.9, 10.0];
    let response = vec![1.0, 2.0, 3.0, 4.0, 10.0, 20.0, 30.0, 40.0];
    let scheme = BinningScheme::Uniform { bins: Some(5) };
    let rg = dispersion_regressogram(&predictor, &response, &scheme).unwrap();

    // Interior bins have no members and are omitted, not zeroed
    assert_eq!(rg.len(), 2);
    // Nothing is lost: the maximum lands in the right-inclusive last bin
    assert_eq!(rg.assigned_count(), 8);

    let mids = rg.midpoints();
    assert!(mids.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn tied_predictors_collapse_decile_bins() {
    let predictor = vec![
        1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0,
    ];
    let response: Vec<f64> = (0..12).map(|i| (i % 5) as f64 + 1.0).collect();
    let rg = decile_regressogram(&predictor, &response).unwrap();

    // Only three distinct predictor values survive as edges
    assert!(rg.len() < 10);
    assert!(!rg.is_empty());
    assert_eq!(rg.assigned_count(), 12);

    let mids = rg.midpoints();
    assert!(mids.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn partial_probability_grid_leaves_tails_unassigned() {
    let predictor: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let response: Vec<f64> = predictor.iter().map(|x| x * 0.5 + 1.0).collect();
    let scheme = BinningScheme::Quantile {
        grid: Some(vec![0.25, 0.5, 0.75]),
    };
    let rg = dispersion_regressogram(&predictor, &response, &scheme).unwrap();

    assert_eq!(rg.len(), 2);
    assert!(rg.assigned_count() < 100);
    assert_eq!(rg.total_count(), 100);
}

#[test]
fn bad_probability_grids_are_rejected() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y = x.clone();

    let bad_grids = [
        vec![0.5],
        vec![0.2, 0.1],
        vec![0.2, 0.2],
        vec![-0.1, 0.5],
        vec![0.5, 1.5],
    ];
    for grid in bad_grids {
        let scheme = BinningScheme::Quantile { grid: Some(grid) };
        let err = dispersion_regressogram(&x, &y, &scheme).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}

#[test]
fn fitted_versus_residual_shape() {
    // Mimics the diagnostic pairing: predictor = fitted values, response =
    // residuals with spread that doubles over the fitted range.
    let fitted: Vec<f64> = (0..60).map(|i| 10.0 + i as f64).collect();
    let resid: Vec<f64> = (0..60)
        .map(|i| {
            let scale = 1.0 + i as f64 / 59.0;
            if i % 2 == 0 {
                scale
            } else {
                3.0 * scale
            }
        })
        .collect();

    let rg = decile_regressogram(&fitted, &resid).unwrap();
    assert_eq!(rg.len(), 10);

    let points = rg.finite_points();
    assert_eq!(points.len(), 10);
    // Dispersion exists in every bin: each holds both residual magnitudes
    assert!(points.iter().all(|(_, d)| *d > 0.0));
}
