use crate::domain::ports::PowerStrategy;

/// Delegates to `f64::powf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPower;

impl PowerStrategy for StdPower {
    fn name(&self) -> &'static str {
        "std"
    }

    fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}
