use crate::series::SeriesError;

/// Linearly interpolates `steps` points into every gap between consecutive
/// samples, inclusive of the left endpoint and exclusive of the right one.
///
/// The output sequences hold `(n - 1) * steps` points for `n` inputs; the
/// first point emitted for each gap is the gap's original left endpoint, and
/// the final input point is not re-emitted.
pub fn augment(
    xs: &[f64],
    ys: &[f64],
    steps: usize,
) -> Result<(Vec<f64>, Vec<f64>), SeriesError> {
    if steps == 0 {
        return Err(SeriesError::InvalidParameter {
            name: "steps",
            reason: "must be at least 1".to_string(),
        });
    }
    if xs.len() != ys.len() {
        return Err(SeriesError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let gaps = xs.len().saturating_sub(1);
    let mut xnew = Vec::with_capacity(gaps * steps);
    let mut ynew = Vec::with_capacity(gaps * steps);

    for i in 0..gaps {
        let step_x = (xs[i + 1] - xs[i]) / steps as f64;
        let step_y = (ys[i + 1] - ys[i]) / steps as f64;
        for s in 0..steps {
            xnew.push(xs[i] + s as f64 * step_x);
            ynew.push(ys[i] + s as f64 * step_y);
        }
    }

    Ok((xnew, ynew))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_steps_points_per_gap() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [0.0, 100.0, 50.0];

        let (xnew, ynew) = augment(&xs, &ys, 4).unwrap();
        assert_eq!(xnew.len(), 8);
        assert_eq!(ynew.len(), 8);
    }

    #[test]
    fn first_point_of_each_gap_is_left_endpoint() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [5.0, 100.0, 50.0];

        let (xnew, ynew) = augment(&xs, &ys, 4).unwrap();
        assert_eq!(xnew[0], 0.0);
        assert_eq!(ynew[0], 5.0);
        assert_eq!(xnew[4], 10.0);
        assert_eq!(ynew[4], 100.0);
    }

    #[test]
    fn interpolated_points_are_evenly_spaced() {
        let xs = [0.0, 8.0];
        let ys = [0.0, 4.0];

        let (xnew, ynew) = augment(&xs, &ys, 4).unwrap();
        assert_eq!(xnew, vec![0.0, 2.0, 4.0, 6.0]);
        assert_eq!(ynew, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert!(matches!(
            augment(&[0.0, 1.0], &[0.0, 1.0], 0),
            Err(SeriesError::InvalidParameter { name: "steps", .. })
        ));
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        assert!(matches!(
            augment(&[0.0, 1.0], &[0.0], 2),
            Err(SeriesError::LengthMismatch { xs: 2, ys: 1 })
        ));
    }

    #[test]
    fn single_point_yields_empty_output() {
        let (xnew, ynew) = augment(&[42.0], &[7.0], 3).unwrap();
        assert!(xnew.is_empty());
        assert!(ynew.is_empty());
    }
}
