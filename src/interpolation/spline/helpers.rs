/// Spacings `h[i] = x[i+1] - x[i]` between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Secant slopes `(y[i+1] - y[i]) / h[i]` of each interval
pub(crate) fn deltas(y: &[f64], h: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut d = Vec::with_capacity(n - 1);
    for i in 0..n - 1 { d.push((y[i+1] - y[i]) / h[i]); }
    d
}
