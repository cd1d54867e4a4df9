//! Oscillation-aware cosine quadrature (Filon and Burcher schemes).
//!
//! Both rules compute `∫ f(ω) cos(ωτ) dω` by approximating only the smooth
//! factor `f` and integrating the cosine analytically, so their accuracy
//! does not degrade as `τ` grows and the product starts oscillating faster
//! than any fixed sampling grid.

use crate::rules::COMPOSITE_PANELS;

/// Below this panel phase the closed forms are evaluated by series/fallback
/// to avoid catastrophic cancellation.
const SMALL_THETA: f64 = 1.0 / 6.0;

/// Composite Filon cosine quadrature over `COMPOSITE_PANELS` panels.
///
/// Fits `f` (not the product) with parabolas over panel pairs and integrates
/// each parabola against the cosine exactly. With `τ = 0` the coefficients
/// reduce to `(0, 2/3, 4/3)` and the rule degenerates to composite Simpson.
pub(crate) fn filon<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tau: f64) -> f64 {
    let n = COMPOSITE_PANELS / 2;
    let h = (b - a) / (2 * n) as f64;
    let theta = tau * h;
    let (alpha, beta, gamma) = filon_coefficients(theta);

    let x = |i: usize| h.mul_add(i as f64, a);

    let mut even = 0.0;
    for i in 0..=n {
        let xi = x(2 * i);
        even += f(xi) * (tau * xi).cos();
    }
    even -= 0.5 * (f(b) * (tau * b).cos() + f(a) * (tau * a).cos());

    let mut odd = 0.0;
    for i in 1..=n {
        let xi = x(2 * i - 1);
        odd += f(xi) * (tau * xi).cos();
    }

    let boundary = f(b) * (tau * b).sin() - f(a) * (tau * a).sin();
    h * (alpha * boundary + beta * even + gamma * odd)
}

/// Filon's α, β, γ for panel phase `θ = τ·h`.
///
/// Closed forms lose all significant digits as `θ → 0`; the Maclaurin
/// series takes over below [`SMALL_THETA`].
fn filon_coefficients(theta: f64) -> (f64, f64, f64) {
    if theta.abs() < SMALL_THETA {
        let t2 = theta * theta;
        let t4 = t2 * t2;
        let t6 = t4 * t2;
        let alpha = theta * t2 * (2.0 / 45.0 - t2 / 315.0 * 2.0 + t4 * (2.0 / 4725.0));
        let beta = 2.0 / 3.0 + t2 * (2.0 / 15.0) - t4 * (4.0 / 105.0) + t6 * (2.0 / 567.0);
        let gamma = 4.0 / 3.0 - t2 * (2.0 / 15.0) + t4 / 210.0 - t6 / 11340.0;
        (alpha, beta, gamma)
    } else {
        let s = theta.sin();
        let c = theta.cos();
        let t3 = theta * theta * theta;
        let alpha = (theta * theta + theta * s * c - 2.0 * s * s) / t3;
        let beta = 2.0 * (theta * (1.0 + c * c) - 2.0 * s * c) / t3;
        let gamma = 4.0 * (s - theta * c) / t3;
        (alpha, beta, gamma)
    }
}

/// Burcher cosine quadrature: sample `f` on a uniform grid, treat it as
/// piecewise linear, integrate each linear segment against the cosine in
/// closed form. Exact when `f` itself is piecewise linear on the grid,
/// which the retardation builder's tabulated interpolators are.
pub(crate) fn burcher<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tau: f64) -> f64 {
    let n = COMPOSITE_PANELS;
    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    let mut x1 = a;
    let mut v1 = f(a);
    for i in 1..=n {
        let x2 = h.mul_add(i as f64, a);
        let v2 = f(x2);
        sum += linear_panel(x1, v1, x2, v2, tau);
        x1 = x2;
        v1 = v2;
    }
    sum
}

/// `∫_{x1}^{x2}` of the linear interpolant through `(x1, v1)`, `(x2, v2)`
/// times `cos(τx)`.
fn linear_panel(x1: f64, v1: f64, x2: f64, v2: f64, tau: f64) -> f64 {
    let h = x2 - x1;
    if (tau * h).abs() < 1e-3 {
        // Slowly varying cosine across the panel: the product trapezoid is
        // accurate to (τh)²/12 and free of cancellation.
        return 0.5 * h * (v1 * (tau * x1).cos() + v2 * (tau * x2).cos());
    }
    let slope = (v2 - v1) / h;
    let (s1, c1) = (tau * x1).sin_cos();
    let (s2, c2) = (tau * x2).sin_cos();
    (v2 * s2 - v1 * s1) / tau + slope * (c2 - c1) / (tau * tau)
}
