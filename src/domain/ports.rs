use crate::domain::model::Backend;

/// One way of raising a base to a power.
pub trait PowerStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn power(&self, base: f64, exponent: f64) -> f64;
}

pub trait ConfigProvider {
    fn backend(&self) -> Backend;
    fn log_level(&self) -> Option<&str>;
}
