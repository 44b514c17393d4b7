//! Z-score normalisation.

use crate::{Error, Result};

/// Normalise values to z-scores using the population mean and standard deviation.
///
/// If every value is identical (standard deviation exactly zero) the result
/// is all zeros rather than a division by zero.
pub fn z_score_normalisation(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::NoData(
            "No data provided for normalisation.".to_string(),
        ));
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return Ok(vec![0.0; values.len()]);
    }

    Ok(values.iter().map(|x| (x - mean) / std_dev).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_abs_diff_eq;

    fn mean_and_std(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        (mean, variance.sqrt())
    }

    #[test]
    fn test_identical_values() {
        assert_eq!(
            z_score_normalisation(&[5.0, 5.0, 5.0]).unwrap(),
            vec![0.0, 0.0, 0.0]
        );
        assert_eq!(z_score_normalisation(&[42.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_standardised_output() {
        let z = z_score_normalisation(&[1.0, 2.0, 3.0]).unwrap();
        let (mean, std) = mean_and_std(&z);

        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(std, 1.0, epsilon = 1e-12);
        // population std of [1, 2, 3] is sqrt(2/3)
        assert_abs_diff_eq!(z[0], -1.224744871391589, epsilon = 1e-12);
        assert_abs_diff_eq!(z[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_preserves_order() {
        let values = [10.0, 30.0, 20.0, 40.0];
        let z = z_score_normalisation(&values).unwrap();

        assert_eq!(z.len(), values.len());
        assert!(z[0] < z[2] && z[2] < z[1] && z[1] < z[3]);
    }

    #[test]
    fn test_empty_input() {
        let err = z_score_normalisation(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoData);
    }
}
