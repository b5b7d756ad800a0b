//! CLI argument merging with config

use super::{OutputFormat, Settings};
use crate::clipboard::ClipboardBackend;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub min_prefix_len: Option<usize>,
    pub min_prefix_percent: Option<f64>,
    pub group_threshold: Option<usize>,
    pub moving_average_window: Option<usize>,
    pub clipboard_backend: Option<ClipboardBackend>,
    pub output_format: Option<OutputFormat>,
}

pub fn merge_cli_with_config(mut base: Settings, cli: CliOverrides) -> Settings {
    if let Some(min_prefix_len) = cli.min_prefix_len {
        base.summary.min_prefix_len = min_prefix_len;
    }
    if let Some(min_prefix_percent) = cli.min_prefix_percent {
        base.summary.min_prefix_percent = min_prefix_percent;
    }
    if let Some(group_threshold) = cli.group_threshold {
        base.summary.group_threshold = group_threshold;
    }

    if let Some(window) = cli.moving_average_window {
        base.moving_average_window = window;
    }
    if let Some(backend) = cli.clipboard_backend {
        base.clipboard_backend = backend;
    }
    if let Some(format) = cli.output_format {
        base.output_format = format;
    }

    base
}
