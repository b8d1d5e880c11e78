//! MedVision core library
//!
//! This module exports the core functionality of the MedVision screening
//! prototype: domain models, the page-level state machines, the mock data
//! registry, and the desktop UI shell.

pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod ui;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    use ::config::{ConfigError, Environment, File};

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub app: AppConfig,
        pub screening: ScreeningConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct AppConfig {
        pub title: String,
        pub tagline: String,
    }

    /// Tunables for the simulated analysis run.
    #[derive(Debug, Clone, Deserialize)]
    pub struct ScreeningConfig {
        /// Milliseconds between progress ticks.
        pub tick_ms: u64,
        /// Progress added per tick.
        pub increment: u8,
        /// Milliseconds to hold at 100% before revealing the outcome.
        pub reveal_delay_ms: u64,
        /// Probability that the simulated prediction comes back malignant.
        pub malignant_rate: f64,
    }

    impl ScreeningConfig {
        /// Number of ticks the progress bar sits at 100% before the report
        /// is revealed.
        pub fn hold_ticks(&self) -> u32 {
            (self.reveal_delay_ms / self.tick_ms.max(1)).min(u64::from(u32::MAX)) as u32
        }
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                app: AppConfig {
                    title: "MedVision AI".into(),
                    tagline: "Intelligent Breast Cancer Screening Platform".into(),
                },
                screening: ScreeningConfig::default(),
            }
        }
    }

    impl Default for ScreeningConfig {
        fn default() -> Self {
            Self {
                tick_ms: 200,
                increment: 5,
                reveal_delay_ms: 1000,
                malignant_rate: 0.3,
            }
        }
    }

    /// Load configuration from file
    pub fn load_config() -> Result<Config, ConfigError> {
        let defaults = Config::default();

        // Start with built-in defaults
        let mut settings = ::config::Config::builder()
            .set_default("app.title", defaults.app.title)?
            .set_default("app.tagline", defaults.app.tagline)?
            .set_default("screening.tick_ms", defaults.screening.tick_ms as i64)?
            .set_default("screening.increment", defaults.screening.increment as i64)?
            .set_default(
                "screening.reveal_delay_ms",
                defaults.screening.reveal_delay_ms as i64,
            )?
            .set_default("screening.malignant_rate", defaults.screening.malignant_rate)?;

        // Layer the shared file, then environment-specific settings
        settings = settings.add_source(File::with_name("config/default").required(false));
        let env = std::env::var("MEDVISION_ENV").unwrap_or_else(|_| "development".into());
        settings = settings.add_source(File::with_name(&format!("config/{env}")).required(false));

        // Override with environment variables
        settings = settings.add_source(Environment::with_prefix("MEDVISION"));

        settings.build()?.try_deserialize()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn hold_ticks_matches_default_timings() {
            let sim = ScreeningConfig::default();
            // 1000ms reveal delay at 200ms per tick
            assert_eq!(sim.hold_ticks(), 5);
        }

        #[test]
        fn hold_ticks_survives_zero_tick_interval() {
            let sim = ScreeningConfig {
                tick_ms: 0,
                ..ScreeningConfig::default()
            };
            assert_eq!(sim.hold_ticks(), 1000);
        }

        #[test]
        fn defaults_deserialize_without_config_files() {
            let config = load_config().expect("defaults should always resolve");
            assert_eq!(config.screening.increment, 5);
            assert!(config.screening.malignant_rate > 0.0);
        }
    }
}
