//! Configuration for OTP settings module

use crate::contract::OtpSettingsError;
use crate::domain::{validation::validate_actions, SeedingPolicy, DEFAULT_ACTIONS};
use serde::{Deserialize, Serialize};

/// OTP settings module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Actions seeded into an empty store, in order
    #[serde(default = "default_actions")]
    pub default_actions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_actions: default_actions(),
        }
    }
}

impl Config {
    /// Reject action lists that could not be seeded
    pub fn validate(&self) -> Result<(), OtpSettingsError> {
        validate_actions(&self.default_actions)
    }

    pub fn seeding_policy(&self) -> SeedingPolicy {
        SeedingPolicy::new(self.default_actions.clone())
    }
}

fn default_actions() -> Vec<String> {
    DEFAULT_ACTIONS.iter().map(|a| (*a).to_owned()).collect()
}
