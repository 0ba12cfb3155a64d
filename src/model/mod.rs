pub mod criteria;
pub mod page;
pub mod recommendation;
pub mod snapshot;
pub mod thresholds;

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
