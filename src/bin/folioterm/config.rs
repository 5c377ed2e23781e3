//! CLI flags so every runtime knob is visible in `--help`.

use std::path::PathBuf;

use clap::Parser;
use folioterm::contact::DEFAULT_CONTACT_ADDRESS;

use crate::theme::ThemeName;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "folioterm",
    version,
    about = "Single-page portfolio viewer for the terminal"
)]
pub(crate) struct ViewerConfig {
    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeName::Warm, env = "FOLIOTERM_THEME")]
    pub(crate) theme: ThemeName,

    /// TOML file overriding individual theme colors.
    #[arg(long, env = "FOLIOTERM_THEME_FILE")]
    pub(crate) theme_file: Option<PathBuf>,

    /// Disable colors entirely (same as --theme plain).
    #[arg(long, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Start with the decorative animation paused.
    #[arg(long, default_value_t = false)]
    pub(crate) reduced_motion: bool,

    /// Write debug logs to the temp log file.
    #[arg(long, default_value_t = false)]
    pub(crate) logs: bool,

    /// Also emit JSON timing traces alongside the debug log.
    #[arg(long, default_value_t = false)]
    pub(crate) log_timings: bool,

    /// Disable all logging, overriding --logs and --log-timings.
    #[arg(long, default_value_t = false)]
    pub(crate) no_logs: bool,

    /// Address the contact form's mail draft is sent to.
    #[arg(long, env = "FOLIOTERM_MAILTO_TO", default_value = DEFAULT_CONTACT_ADDRESS)]
    pub(crate) mailto_to: String,
}

impl ViewerConfig {
    pub(crate) fn logging_enabled(&self) -> bool {
        (self.logs || self.log_timings) && !self.no_logs
    }

    pub(crate) fn tracing_enabled(&self) -> bool {
        self.log_timings && !self.no_logs
    }

    pub(crate) fn effective_theme(&self) -> ThemeName {
        if self.no_color {
            ThemeName::Plain
        } else {
            self.theme
        }
    }
}
