//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::Neville`]       Neville's iterated interpolation
/// - [`Algorithm::NewtonForward`] Newton forward differences (equal spacing)
/// - [`Algorithm::Hermite`]       Hermite divided differences with derivatives
/// - [`Algorithm::SplineNatural`] natural cubic-spline second-derivative system
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Neville,
    NewtonForward,
    Hermite,
    SplineNatural,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Neville       => "neville",
            Algorithm::NewtonForward => "newton forward",
            Algorithm::Hermite       => "hermite",
            Algorithm::SplineNatural => "natural cubic spline",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
