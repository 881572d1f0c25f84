//! CLI-only commands: config info.
//!
//! These run without opening the TUI and produce plain text output.

use crate::core::app;
use crate::core::config::{Config, ServiceConfig};
use crate::core::paths;

/// Run the `config` command: display version, cache path, angle mode, and
/// which fallback services hold an API key.
pub fn run_config(config: &Config) {
    let cache_dir = paths::cache_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());

    println!("{} {}", app::NAME, app::VERSION);
    println!("Cache:           {}", cache_dir);
    println!("Angle mode:      {}", config.angle_mode);
    println!("W|A Instant key: {}", key_status(&config.wolfram_instant));
    println!("Gemini key:      {}", key_status(&config.gemini));
    println!("W|A LLM key:     {}", key_status(&config.wolfram_llm));
}

fn key_status(service: &Option<ServiceConfig>) -> &'static str {
    if service.is_some() { "set ✓" } else { "not set" }
}
