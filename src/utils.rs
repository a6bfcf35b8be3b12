/// Approximate `f'(x)` by the central difference `(f(x + h) - f(x - h)) / 2h`.
///
/// The error is of order `h^2` for smooth `f`, but rounding dominates for very
/// small `h`. A step around `1e-5` is a good default for `f64`.
pub fn central_difference<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2. * h)
}

/// The largest absolute difference between the analytic derivative `df` and
/// the central difference of `f` over `points`.
pub fn max_derivative_error<F: Fn(f64) -> f64, D: Fn(f64) -> f64>(
    f: F,
    df: D,
    points: &[f64],
    h: f64,
) -> f64 {
    points
        .iter()
        .map(|x| (df(*x) - central_difference(&f, *x, h)).abs())
        .fold(0., f64::max)
}
