use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drawable::DrawableConfig;
use crate::error::Result;
use crate::slot::SlotTable;
use crate::transform::{AxisMode, PathTransformer};

/// Everything that shapes the generated artifacts. Every field has a
/// default, so an empty document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub slots: SlotTable,
    pub axis_mode: AxisMode,
    pub drawable: DrawableConfig,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
	let config: Config = toml::from_str(text)?;
	debug!(slots = config.slots.len(), axis_mode = ?config.axis_mode, "loaded configuration");

	Ok(config)
    }

    pub fn transformer(&self) -> PathTransformer<'_> {
	PathTransformer::new(&self.slots).with_mode(self.axis_mode)
    }
}
