//! Scalar and buffer-level helpers used to bound generator output.

/// Returns `value` limited to `[min, max]`.
///
/// Unlike [`f64::clamp`] this does not panic when `min > max`; the bounds are
/// applied in order, so `max` wins.
///
/// # Examples
///
/// ```
/// use noise_studio::scalar::clamp;
///
/// assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
/// assert_eq!(clamp(-0.25, -1.0, 1.0), -0.25);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Largest absolute value in `buffer`, or `0.0` for an empty buffer.
pub fn peak(buffer: &[f64]) -> f64 {
    buffer.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
}

/// Root-mean-square level of `buffer`, or `0.0` for an empty buffer.
pub fn rms(buffer: &[f64]) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = buffer.iter().map(|s| s * s).sum();
    (sum_sq / buffer.len() as f64).sqrt()
}

/// Rescales `buffer` so its values span `[0, 1]`.
///
/// A constant buffer maps to all zeros. This is a normal outcome, not an
/// error. Applying the function twice gives the same result as applying it
/// once.
///
/// # Examples
///
/// ```
/// use noise_studio::scalar::normalize_min_max;
///
/// assert_eq!(normalize_min_max(&[2.0, 4.0, 3.0]), vec![0.0, 1.0, 0.5]);
/// assert_eq!(normalize_min_max(&[7.0, 7.0]), vec![0.0, 0.0]);
/// ```
pub fn normalize_min_max(buffer: &[f64]) -> Vec<f64> {
    let mut out = buffer.to_vec();
    normalize_min_max_in_place(&mut out);
    out
}

/// In-place form of [`normalize_min_max`].
pub fn normalize_min_max_in_place(buffer: &mut [f64]) {
    let Some((min, max)) = min_max(buffer) else {
        return;
    };
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        buffer.fill(0.0);
        return;
    }
    for sample in buffer.iter_mut() {
        // Division can land a hair outside [0, 1] for extreme ranges.
        *sample = clamp((*sample - min) / range, 0.0, 1.0);
    }
}

/// Scales `buffer` so its largest absolute value equals `target`.
///
/// Silence stays silence: if every sample is zero the buffer is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use noise_studio::scalar::normalize_peak;
///
/// assert_eq!(normalize_peak(&[0.5, -0.25], 1.0), vec![1.0, -0.5]);
/// assert_eq!(normalize_peak(&[0.0, 0.0], 1.0), vec![0.0, 0.0]);
/// ```
pub fn normalize_peak(buffer: &[f64], target: f64) -> Vec<f64> {
    let mut out = buffer.to_vec();
    normalize_peak_in_place(&mut out, target);
    out
}

/// In-place form of [`normalize_peak`].
pub fn normalize_peak_in_place(buffer: &mut [f64], target: f64) {
    let max = peak(buffer);
    if max == 0.0 || !max.is_finite() {
        return;
    }
    let scale = target / max;
    for sample in buffer.iter_mut() {
        *sample *= scale;
    }
}

fn min_max(buffer: &[f64]) -> Option<(f64, f64)> {
    let first = *buffer.first()?;
    Some(
        buffer
            .iter()
            .fold((first, first), |(lo, hi), &s| (lo.min(s), hi.max(s))),
    )
}
