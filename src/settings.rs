//! Runtime settings: command line flags plus environment variables.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tui_orrery_core::SceneConfig;
use tui_orrery_types::{tick_interval_ms, DEFAULT_FPS};

/// Environment variable naming the log file. Logging is off without it.
pub const LOG_PATH_ENV: &str = "ORRERY_LOG_PATH";
/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "ORRERY_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tui-orrery", version, about = "Solar system in your terminal")]
pub struct Settings {
    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Hide planet orbit outlines
    #[arg(long = "no-orbits", action = clap::ArgAction::SetFalse)]
    pub orbits: bool,

    /// Show the key legend
    #[arg(long)]
    pub hints: bool,

    /// Seed for belt layout
    #[arg(long, default_value_t = 1)]
    pub seed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            orbits: true,
            hints: false,
            seed: 1,
        }
    }
}

impl Settings {
    /// Delay between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(tick_interval_ms(self.fps))
    }

    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            seed: self.seed,
            orbits: self.orbits,
            hints: self.hints,
        }
    }

    /// Log file from the environment, if set and non-blank.
    pub fn log_path_from_env() -> Option<PathBuf> {
        std::env::var(LOG_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
    }
}
