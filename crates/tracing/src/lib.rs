//! Tracing setup for lexeth.
//!
//! Builds a [`tracing_subscriber`] registry out of boxed layers: one stdout layer and an optional
//! file layer, each with its own format and filter.
//!
//! ```no_run
//! use lexeth_tracing::{LayerInfo, LexethTracer, LogFormat, Tracer};
//!
//! let stdout = LayerInfo::new(LogFormat::Terminal, "info".to_string(), String::new(), None);
//! let _guard = LexethTracer::new().with_stdout(stdout).init().expect("failed to init tracing");
//! ```

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Directive, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

// Re-export our types
pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard, Layers};

mod formatter;
mod layers;

/// Tracer for application logging.
///
/// Manages the configuration and initialization of logging layers, including standard output and
/// an optional log file.
#[derive(Debug, Clone)]
pub struct LexethTracer {
    stdout: LayerInfo,
    file: Option<(LayerInfo, FileInfo)>,
}

impl LexethTracer {
    /// Constructs a new `LexethTracer` with default settings: terminal format, `INFO` level and
    /// no file layer.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), file: None }
    }

    /// Sets the stdout layer configuration.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Enables a file layer with the given configuration.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Default for LexethTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a logging layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Constructs a new `LayerInfo`.
    ///
    /// * `format` - Specifies the format for log messages.
    /// * `default_directive` - Directive for filtering log messages, e.g. `info`.
    /// * `filters` - Additional comma separated filtering directives.
    /// * `color` - Optional color configuration for the log messages.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: LevelFilter::INFO.to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Trait defining a general interface for logging configuration.
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// Returns the file worker guard when a file layer was configured. Dropping it stops the
    /// file writer.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

impl Tracer for LexethTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse::<Directive>()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        let file_guard = if let Some((config, file_info)) = self.file {
            Some(layers.file(config.format, &config.filters, file_info)?)
        } else {
            None
        };

        tracing_subscriber::registry().with(layers.into_inner()).try_init()?;
        Ok(file_guard)
    }
}
