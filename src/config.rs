//! Runtime configuration from CLI flags and environment variables.
//!
//! Every option has a flag, an environment variable and a default. The
//! base URL default points at the Spring backend on its usual local port;
//! `--insecure` matches the certificate-check-free development proxy this
//! tool stands in for.

use clap::Parser;

use crate::theme;

/// Terminal CRUD client for the school registry REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "registro-tui", version)]
#[command(about = "Terminal CRUD client for the school registry REST API")]
pub struct Config {
    /// Base URL of the REST backend; requests go to {base}/api/...
    #[arg(long, default_value = "http://localhost:8009", env = "REGISTRO_BASE_URL")]
    pub base_url: String,

    /// Accept invalid TLS certificates
    #[arg(long, default_value_t = false, env = "REGISTRO_INSECURE")]
    pub insecure: bool,

    /// Color theme
    #[arg(long, default_value = "terminal", env = "REGISTRO_THEME")]
    pub theme: String,

    /// Diagnostic log file; stdout belongs to the UI
    #[arg(long, default_value = "registro-tui.log", env = "REGISTRO_LOG")]
    pub log_file: String,

    /// Log filter directives (tracing EnvFilter syntax)
    #[arg(long, default_value = "info", env = "REGISTRO_LOG_FILTER")]
    pub log_filter: String,
}

impl Config {
    /// Check values clap cannot check on its own.
    pub fn validate(&self) -> Result<(), String> {
        if theme::get_preset(&self.theme).is_none() {
            return Err(format!(
                "unknown theme '{}' (available: {})",
                self.theme,
                theme::preset_names().join(", ")
            ));
        }
        if self.base_url.is_empty() {
            return Err("base URL must not be empty".to_string());
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
