use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{Result, StagelineError};
use crate::stage::STAGES;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StagelineConfig {
    pub display: DisplayConfig,
    pub driver: DriverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the progress bar in characters.
    pub bar_width: usize,
    /// Per-stage label overrides, keyed by stage id. Ids must exist in the
    /// catalogue; the sequence itself can't be changed from config.
    pub labels: HashMap<String, String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: 30,
            labels: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Seconds the simulated driver spends in each stage.
    pub stage_secs: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self { stage_secs: 2 }
    }
}

impl StagelineConfig {
    pub async fn load(path: &Path) -> Result<Self> {
        let config: Self = if path.exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Validate configuration values for consistency.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.display.bar_width == 0 {
            errors.push("display.bar_width must be greater than 0".to_string());
        }
        if self.display.bar_width > 120 {
            errors.push("display.bar_width must be at most 120".to_string());
        }

        for key in self.display.labels.keys() {
            if !STAGES.iter().any(|s| s.id.as_str() == key) {
                errors.push(format!("display.labels contains unknown stage id: {}", key));
            }
        }

        if self.driver.stage_secs == 0 {
            errors.push("driver.stage_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StagelineError::Config(errors.join("; ")))
        }
    }
}
