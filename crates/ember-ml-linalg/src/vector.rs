//! Elementwise operations over equal-length `f64` slices.
//!
//! All functions assert that operand lengths agree; passing slices of
//! different lengths is a caller bug, not a recoverable condition.

/// Dot product: sum of pairwise products.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot: operand lengths differ");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Returns `v` scaled by `k`.
pub fn scale(v: &[f64], k: f64) -> Vec<f64> {
    v.iter().map(|x| x * k).collect()
}

/// Returns `a - b` elementwise.
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "sub: operand lengths differ");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// In-place `a -= b`.
pub fn sub_assign(a: &mut [f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "sub_assign: operand lengths differ");
    for (x, y) in a.iter_mut().zip(b) {
        *x -= y;
    }
}

/// In-place `v /= k`.
pub fn div_assign(v: &mut [f64], k: f64) {
    for x in v.iter_mut() {
        *x /= k;
    }
}
