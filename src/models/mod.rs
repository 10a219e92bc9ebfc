pub mod bs;
pub mod monte_carlo;

/// Numerical helpers shared by the pricers
pub mod utils {
    use std::f64::consts::{PI, SQRT_2};

    /// Standard normal cumulative distribution function, 0.5·[1 + erf(x/√2)]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / SQRT_2))
    }

    /// Standard normal density
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
