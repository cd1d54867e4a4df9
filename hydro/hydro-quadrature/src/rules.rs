//! The selectable quadrature rule set and generic definite integration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cosine;
use crate::error::QuadratureError;

/// Number of panels used by the fixed-grid rectangle rule.
///
/// Fixed (rather than tolerance-driven) so that convolution results over
/// sampled integrands are reproducible and hand-checkable: the step size is
/// always `(b - a) / 100`.
pub(crate) const RECTANGLE_PANELS: usize = 100;

/// Number of panels used by the fixed-grid trapezoidal, Simpson and Filon
/// rules. Must be even.
pub(crate) const COMPOSITE_PANELS: usize = 400;

/// A numerical quadrature scheme.
///
/// Two of the rules are oscillation-aware: Filon and Burcher treat the
/// cosine factor of [`cosine_transform`](Self::cosine_transform)
/// analytically. When asked for a plain [`integrate`](Self::integrate) with
/// no known oscillation they fall back to their non-oscillatory
/// counterparts (Simpson and trapezoidal respectively).
///
/// `tol` is honored by the adaptive rules (Gauss-Kronrod, Clenshaw-Curtis);
/// the fixed-grid rules ignore it by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Quadrature {
    /// Adaptive Gauss-Kronrod 7-15 with interval bisection.
    GaussKronrod,
    /// Left-endpoint Riemann sum over a fixed 100-panel grid.
    Rectangle,
    /// Composite Simpson rule over a fixed 400-panel grid.
    Simpson,
    /// Composite trapezoidal rule over a fixed 400-panel grid.
    Trapezoidal,
    /// Piecewise-linear sampling integrated against the cosine in closed
    /// form; exact for linear integrands.
    Burcher,
    /// Clenshaw-Curtis with node doubling until the tolerance is met.
    ClenshawCurtis,
    /// Filon's cosine rule; exact for the oscillatory factor.
    Filon,
}

impl Quadrature {
    /// All supported rules, in parse-name order.
    pub const ALL: [Self; 7] = [
        Self::GaussKronrod,
        Self::Rectangle,
        Self::Simpson,
        Self::Trapezoidal,
        Self::Burcher,
        Self::ClenshawCurtis,
        Self::Filon,
    ];

    /// The canonical configuration name of this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GaussKronrod => "gauss-kronrod",
            Self::Rectangle => "rectangle",
            Self::Simpson => "simpson",
            Self::Trapezoidal => "trapezoidal",
            Self::Burcher => "burcher",
            Self::ClenshawCurtis => "clenshaw-curtis",
            Self::Filon => "filon",
        }
    }

    /// Definite integral of `f` over `[a, b]`.
    ///
    /// Returns 0 for an empty or inverted interval.
    pub fn integrate<F: Fn(f64) -> f64>(self, f: F, a: f64, b: f64, tol: f64) -> f64 {
        if !(b > a) {
            return 0.0;
        }
        match self {
            Self::Rectangle => rectangle(&f, a, b),
            Self::Trapezoidal | Self::Burcher => trapezoidal(&f, a, b),
            Self::Simpson | Self::Filon => simpson(&f, a, b),
            Self::GaussKronrod => gauss_kronrod(&f, a, b, tol),
            Self::ClenshawCurtis => clenshaw_curtis(&f, a, b, tol),
        }
    }

    /// `∫_a^b f(ω) · cos(ωτ) dω`.
    ///
    /// Filon and Burcher integrate the oscillation analytically; every other
    /// rule integrates the product directly. `tau = 0` is valid for all
    /// rules.
    pub fn cosine_transform<F: Fn(f64) -> f64>(
        self,
        f: F,
        a: f64,
        b: f64,
        tau: f64,
        tol: f64,
    ) -> f64 {
        if !(b > a) {
            return 0.0;
        }
        match self {
            Self::Filon => cosine::filon(&f, a, b, tau),
            Self::Burcher => cosine::burcher(&f, a, b, tau),
            rule => rule.integrate(|omega| f(omega) * (omega * tau).cos(), a, b, tol),
        }
    }
}

impl FromStr for Quadrature {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|rule| rule.name() == s)
            .copied()
            .ok_or_else(|| QuadratureError::unknown_rule(s))
    }
}

impl std::fmt::Display for Quadrature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Quadrature {
    type Error = QuadratureError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Quadrature> for String {
    fn from(rule: Quadrature) -> Self {
        rule.name().to_owned()
    }
}

/// Left-endpoint Riemann sum, fixed grid.
fn rectangle<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let h = (b - a) / RECTANGLE_PANELS as f64;
    let mut sum = 0.0;
    for i in 0..RECTANGLE_PANELS {
        sum += f(h.mul_add(i as f64, a));
    }
    sum * h
}

/// Composite trapezoidal rule, fixed grid.
fn trapezoidal<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let n = COMPOSITE_PANELS;
    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(h.mul_add(i as f64, a));
    }
    sum * h
}

/// Composite Simpson rule, fixed grid (even panel count).
fn simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let n = COMPOSITE_PANELS;
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let w = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += w * f(h.mul_add(i as f64, a));
    }
    sum * h / 3.0
}

// Gauss-Kronrod 7-15 nodes and weights (positive abscissae; QUADPACK qk15).
const XGK: [f64; 8] = [
    0.991_455_371_120_813,
    0.949_107_912_342_759,
    0.864_864_423_359_769,
    0.741_531_185_599_394,
    0.586_087_235_467_691,
    0.405_845_151_377_397,
    0.207_784_955_007_898,
    0.0,
];
const WGK: [f64; 8] = [
    0.022_935_322_010_529,
    0.063_092_092_629_979,
    0.104_790_010_322_250,
    0.140_653_259_715_525,
    0.169_004_726_639_267,
    0.190_350_578_064_785,
    0.204_432_940_075_298,
    0.209_482_141_084_728,
];
const WG: [f64; 4] = [
    0.129_484_966_168_870,
    0.279_705_391_489_277,
    0.381_830_050_505_119,
    0.417_959_183_673_469,
];

/// One Gauss-Kronrod 7-15 evaluation: returns (integral, error estimate).
fn qk15<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> (f64, f64) {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let fc = f(center);
    let mut resk = WGK[7] * fc;
    let mut resg = WG[3] * fc;
    for (i, &x) in XGK.iter().enumerate().take(7) {
        let dx = half * x;
        let fsum = f(center - dx) + f(center + dx);
        resk += WGK[i] * fsum;
        if i % 2 == 1 {
            resg += WG[i / 2] * fsum;
        }
    }
    (resk * half, (resk - resg).abs() * half)
}

/// Adaptive Gauss-Kronrod with interval bisection.
fn gauss_kronrod<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64) -> f64 {
    fn recurse<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64, depth: u32) -> f64 {
        let (value, error) = qk15(f, a, b);
        if depth >= 14 || error <= tol * value.abs().max(1.0) {
            return value;
        }
        let mid = 0.5 * (a + b);
        recurse(f, a, mid, 0.5 * tol, depth + 1) + recurse(f, mid, b, 0.5 * tol, depth + 1)
    }
    recurse(f, a, b, tol.max(f64::EPSILON), 0)
}

/// Clenshaw-Curtis weight for node `k` of an `n + 1`-point rule.
fn cc_weight(n: usize, k: usize) -> f64 {
    let c_k = if k == 0 || k == n { 1.0 } else { 2.0 };
    let mut s = 1.0;
    for j in 1..=n / 2 {
        let b_j = if 2 * j == n { 1.0 } else { 2.0 };
        let angle = 2.0 * j as f64 * k as f64 * std::f64::consts::PI / n as f64;
        s -= b_j / (4 * j * j - 1) as f64 * angle.cos();
    }
    c_k / n as f64 * s
}

/// Clenshaw-Curtis with `n + 1` Chebyshev nodes mapped onto `[a, b]`.
fn clenshaw_curtis_n<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> f64 {
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let mut sum = 0.0;
    for k in 0..=n {
        let x = (k as f64 * std::f64::consts::PI / n as f64).cos();
        sum += cc_weight(n, k) * f(half.mul_add(x, mid));
    }
    sum * half
}

/// Clenshaw-Curtis, doubling the node count until estimates agree to `tol`.
fn clenshaw_curtis<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64) -> f64 {
    let tol = tol.max(f64::EPSILON);
    let mut n = 32;
    let mut previous = clenshaw_curtis_n(f, a, b, n);
    while n < 1024 {
        n *= 2;
        let current = clenshaw_curtis_n(f, a, b, n);
        if (current - previous).abs() <= tol * current.abs().max(1.0) {
            return current;
        }
        previous = current;
    }
    previous
}
