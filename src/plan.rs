//! Plan configuration and validation.
//!
//! A `PlanConfig` carries everything a planning run needs: budget, unit
//! costs and strengths, the enemy territories, and search options. It is
//! validated once into a `Plan` before any search runs.
//!
//! JSON layout:
//!
//! ```json
//! {
//!   "budget": 20,
//!   "costs": {"infantry": 1, "cavalry": 3, "artillery": 5},
//!   "strengths": {"infantry": 1, "cavalry": 3, "artillery": 5},
//!   "territories": [{"defense": 5, "terrain": "plain"}],
//!   "options": {"prioritize_weakest": true, "terrain": "ignore", "mode": "exhaustive"}
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::territory::Territory;
use crate::board::unit::{TroopCosts, TroopStrength, UnitType};
use crate::search::SearchOptions;

/// Errors raised while loading or validating a plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid input: {defenses} defense values but {terrains} terrain tags")]
    LengthMismatch { defenses: usize, terrains: usize },

    #[error("invalid input: {0} cost must be positive")]
    ZeroCost(UnitType),

    #[error("invalid input: {0} strength must be positive")]
    ZeroStrength(UnitType),

    #[error("invalid input: territory {territory} defense must be positive")]
    ZeroDefense { territory: usize },

    #[error("invalid input: {count} territories exceeds the order search limit of {max}")]
    TooManyTerritories { count: usize, max: usize },

    #[error("invalid input: '{value}' is not a valid {field}")]
    Parse { field: String, value: String },

    #[error("input ended while reading {field}")]
    UnexpectedEof { field: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse plan JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw planning input, as read from a file, prompts, or built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub budget: u32,
    pub costs: TroopCosts,
    pub strengths: TroopStrength,
    #[serde(default)]
    pub territories: Vec<Territory>,
    #[serde(default)]
    pub options: SearchOptions,
}

/// A validated plan. Costs, strengths and defenses are positive and the
/// territory count is within the order search limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    config: PlanConfig,
}

impl PlanConfig {
    /// Checks the preconditions every search relies on.
    pub fn validate(self) -> Result<Plan, PlanError> {
        for (unit, cost) in self.costs.iter() {
            if cost == 0 {
                return Err(PlanError::ZeroCost(unit));
            }
        }
        for (unit, strength) in self.strengths.iter() {
            if strength == 0 {
                return Err(PlanError::ZeroStrength(unit));
            }
        }
        if let Some(i) = self.territories.iter().position(|t| t.defense == 0) {
            return Err(PlanError::ZeroDefense { territory: i + 1 });
        }
        let count = self.territories.len();
        let max = self.options.max_order_territories;
        if count > max {
            return Err(PlanError::TooManyTerritories { count, max });
        }
        Ok(Plan { config: self })
    }
}

impl Plan {
    pub fn budget(&self) -> u32 {
        self.config.budget
    }

    pub fn costs(&self) -> &TroopCosts {
        &self.config.costs
    }

    pub fn strengths(&self) -> &TroopStrength {
        &self.config.strengths
    }

    pub fn territories(&self) -> &[Territory] {
        &self.config.territories
    }

    pub fn options(&self) -> &SearchOptions {
        &self.config.options
    }

    /// Returns the defense values in input order.
    pub fn defenses(&self) -> Vec<u32> {
        crate::board::territory::defenses(&self.config.territories)
    }
}

/// Loads a plan configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<PlanConfig, PlanError> {
    let data = fs::read_to_string(path).map_err(|source| PlanError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads a plan configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<PlanConfig, PlanError> {
    Ok(serde_json::from_str(json)?)
}
