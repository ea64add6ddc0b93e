//! Browser console logging

use tracing::Level;
use tracing_wasm::{WASMLayerConfig, WASMLayerConfigBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub max_level: Level,
    /// Also emit spans as `performance` marks
    pub report_logs_in_timings: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_level: Level::INFO,
            report_logs_in_timings: false,
        }
    }
}

impl LogConfig {
    /// Verbose logging for local development
    pub fn dev() -> Self {
        Self {
            max_level: Level::DEBUG,
            report_logs_in_timings: true,
        }
    }

    pub fn with_max_level(mut self, max_level: Level) -> Self {
        self.max_level = max_level;
        self
    }

    fn layer_config(&self) -> WASMLayerConfig {
        WASMLayerConfigBuilder::new()
            .set_max_level(self.max_level)
            .set_report_logs_in_timings(self.report_logs_in_timings)
            .build()
    }

    /// Install the console subscriber; call once before rendering
    pub fn init(&self) {
        tracing_wasm::set_as_global_default_with_config(self.layer_config());
    }
}
