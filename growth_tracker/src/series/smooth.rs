use crate::series::SeriesError;

/// Applies a symmetric Gaussian-weighted moving average of the given degree.
///
/// The window holds `2 * degree - 1` points; the weight at offset `i` from
/// the window center is `exp(-(4i / window)^2)`. The output holds one value
/// per full window, so its length is `n - (2 * degree - 2)`.
pub fn smooth_gaussian(data: &[f64], degree: usize) -> Result<Vec<f64>, SeriesError> {
    if degree < 2 {
        return Err(SeriesError::InvalidParameter {
            name: "degree",
            reason: "must be at least 2".to_string(),
        });
    }

    let window = degree * 2 - 1;
    if data.len() < window {
        return Err(SeriesError::InsufficientData {
            required: window,
            actual: data.len(),
        });
    }

    let weights: Vec<f64> = (0..window)
        .map(|i| {
            let offset = i as f64 - (degree - 1) as f64;
            let frac = offset / window as f64;
            (-(4.0 * frac).powi(2)).exp()
        })
        .collect();
    let norm: f64 = weights.iter().sum();

    let out_len = data.len() - window + 1;
    let mut smoothed = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let dot: f64 = data[i..i + window]
            .iter()
            .zip(&weights)
            .map(|(value, weight)| value * weight)
            .sum();
        smoothed.push(dot / norm);
    }

    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_length_shrinks_by_window_minus_one() {
        let data: Vec<f64> = (0..20).map(|i| i as f64).collect();
        for degree in [2usize, 3, 5] {
            let smoothed = smooth_gaussian(&data, degree).unwrap();
            assert_eq!(smoothed.len(), data.len() - (2 * degree - 2));
        }
    }

    #[test]
    fn constant_input_stays_constant() {
        let data = vec![7.5; 16];
        let smoothed = smooth_gaussian(&data, 4).unwrap();
        for value in smoothed {
            assert!((value - 7.5).abs() < 1e-9);
        }
    }

    #[test]
    fn softens_a_step_transition() {
        let mut data = vec![0.0; 10];
        data.extend(vec![100.0; 10]);

        let smoothed = smooth_gaussian(&data, 3).unwrap();
        // Values around the step must land strictly between the two levels.
        let mid = smoothed.len() / 2;
        assert!(smoothed[mid] > 0.0 && smoothed[mid] < 100.0);
        // Monotone input stays monotone.
        for pair in smoothed.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn degree_below_two_is_rejected() {
        assert!(matches!(
            smooth_gaussian(&[1.0, 2.0, 3.0], 1),
            Err(SeriesError::InvalidParameter { name: "degree", .. })
        ));
    }

    #[test]
    fn short_input_is_rejected() {
        assert!(matches!(
            smooth_gaussian(&[1.0, 2.0], 3),
            Err(SeriesError::InsufficientData {
                required: 5,
                actual: 2
            })
        ));
    }
}
