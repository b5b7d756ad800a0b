//! Utility functions

pub mod moving_average;
pub mod natural;
pub mod workdir;

pub use moving_average::{moving_average, MovingAverage};
pub use natural::{natural_sort, natural_sort_key, NaturalKey};
pub use workdir::{with_working_dir, WorkingDirGuard};

/// Format a mean for display, dropping a trailing `.0` (e.g. 42.0 → "42").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
