use clap::{Parser, ValueEnum};

use crate::engine::AnimationConfig;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ThemeArg {
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sky-backdrop",
    version,
    about = "Weather-driven animated terminal backdrop"
)]
pub struct Cli {
    /// Weather condition code (Clear, Clouds, Rain, Drizzle, Thunderstorm,
    /// Snow, Mist, ...); unknown values fall back to Clear
    pub condition: Option<String>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Theme override
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    pub theme: ThemeArg,

    /// Cycle through every weather variant on a timer
    #[arg(long)]
    pub demo: bool,

    /// Seconds each demo condition stays on screen
    #[arg(long, default_value_t = 8)]
    pub demo_interval: u64,

    /// Lower motion mode (smaller particle pools)
    #[arg(long)]
    pub reduced_motion: bool,

    /// Disable the thunder flash overlay
    #[arg(long)]
    pub no_flash: bool,
}

impl Cli {
    #[must_use]
    pub fn initial_condition(&self) -> String {
        self.condition.clone().unwrap_or_else(|| "Clear".to_string())
    }

    #[must_use]
    pub fn animation_config(&self) -> AnimationConfig {
        let config = AnimationConfig {
            target_fps: u32::from(self.fps),
            flash_enabled: !self.no_flash,
            ..AnimationConfig::default()
        };
        if self.reduced_motion {
            config.reduced_motion()
        } else {
            config
        }
    }
}
