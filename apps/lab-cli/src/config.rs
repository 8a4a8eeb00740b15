//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default | Meaning                          |
//! |--------------------------|---------|----------------------------------|
//! | `LAB_SKS_LIMIT`          | `24`    | Maximum credit load per semester |
//! | `LAB_SCHEDULE_CONFLICTS` | `24111` | Comma-separated NIMs with clashes |

use serde::Serialize;
use std::env;

use lab_core::registration::{
    PrerequisiteRule, ScheduleConflictRule, SksLimitRule, ValidationRule,
    DEFAULT_CONFLICTING_NIM, SKS_LIMIT,
};
use lab_core::validation::validate_student_id;

pub const SKS_LIMIT_VAR: &str = "LAB_SKS_LIMIT";
pub const SCHEDULE_CONFLICTS_VAR: &str = "LAB_SCHEDULE_CONFLICTS";

/// Registration settings for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabConfig {
    pub sks_limit: u32,
    pub schedule_conflicts: Vec<String>,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            sks_limit: SKS_LIMIT,
            schedule_conflicts: vec![DEFAULT_CONFLICTING_NIM.to_string()],
        }
    }
}

impl LabConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LabConfig::default();

        if let Some(raw) = lookup(SKS_LIMIT_VAR) {
            config.sks_limit = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(SKS_LIMIT_VAR.to_string()))?;
        }

        if let Some(raw) = lookup(SCHEDULE_CONFLICTS_VAR) {
            let nims: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|nim| !nim.is_empty())
                .map(String::from)
                .collect();

            for nim in &nims {
                validate_student_id(nim)
                    .map_err(|_| ConfigError::InvalidValue(SCHEDULE_CONFLICTS_VAR.to_string()))?;
            }
            config.schedule_conflicts = nims;
        }

        Ok(config)
    }

    /// The standard registration chain with this configuration applied.
    pub fn registration_rules(&self) -> Vec<Box<dyn ValidationRule>> {
        vec![
            Box::new(SksLimitRule::with_limit(self.sks_limit)),
            Box::new(PrerequisiteRule),
            Box::new(ScheduleConflictRule::new(self.schedule_conflicts.iter().cloned())),
        ]
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
