//! Special-function primitives implemented from first principles.
//!
//! The only transcendental the engine needs beyond `std` is the gamma
//! function, used to pin the Weibull scale so every generated distribution
//! has mean 1.

/// Lanczos approximation for ln(Gamma(x)), g=7, n=9.
///
/// Accurate to roughly 1e-13 over the range the engine uses (x > 1, since
/// the argument is always `1 + 1/shape`). The reflection branch keeps the
/// function total over positive reals.
pub fn ln_gamma(x: f64) -> f64 {
    // Lanczos coefficients for g=7, n=9
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // Reflection formula: Gamma(x) * Gamma(1-x) = pi / sin(pi*x)
        let log_pi = std::f64::consts::PI.ln();
        let sin_val = (std::f64::consts::PI * x).sin();
        if sin_val.abs() < 1e-300 {
            return f64::INFINITY;
        }
        return log_pi - sin_val.abs().ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS.iter().enumerate().skip(1) {
        sum += c / (x + i as f64);
    }

    let t = x + G + 0.5;
    let log_sqrt_2pi = (2.0 * std::f64::consts::PI).sqrt().ln();

    log_sqrt_2pi + (t.ln() * (x + 0.5)) - t + sum.ln()
}

/// Gamma(x) for positive x.
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ln_gamma_known_values() {
        // Gamma(1) = 1, so ln(Gamma(1)) = 0
        assert!((ln_gamma(1.0)).abs() < 1e-10);

        // Gamma(2) = 1, so ln(Gamma(2)) = 0
        assert!((ln_gamma(2.0)).abs() < 1e-10);

        // Gamma(3) = 2, so ln(Gamma(3)) = ln(2)
        assert!((ln_gamma(3.0) - 2.0_f64.ln()).abs() < 1e-10);

        // Gamma(5) = 24, so ln(Gamma(5)) = ln(24)
        assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);

        // Gamma(0.5) = sqrt(pi)
        let expected = std::f64::consts::PI.sqrt().ln();
        assert!((ln_gamma(0.5) - expected).abs() < 1e-10);
    }

    #[test]
    fn gamma_half_integer() {
        // Gamma(1.5) = sqrt(pi) / 2
        let expected = std::f64::consts::PI.sqrt() / 2.0;
        assert!((gamma(1.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn gamma_recurrence() {
        // Gamma(x+1) = x * Gamma(x)
        for &x in &[0.7, 1.3, 2.5, 4.0] {
            let lhs = gamma(x + 1.0);
            let rhs = x * gamma(x);
            assert!(
                (lhs - rhs).abs() < 1e-10 * rhs.abs(),
                "recurrence failed at x={x}: {lhs} vs {rhs}"
            );
        }
    }
}
