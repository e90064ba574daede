use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartOptions, Renderer};

use super::{ChartEngine, ChartEngineConfig};

pub const CHART_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: ChartOptions,
}

impl ChartOptions {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartOptionsJsonContractV1 {
            schema_version: CHART_OPTIONS_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize options contract v1: {e}"))
        })
    }

    /// Accepts either bare options or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ChartOptionsJsonContractV1>(input) {
            if payload.schema_version != CHART_OPTIONS_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported options schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.options);
        }
        serde_json::from_str::<ChartOptions>(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options json: {e}")))
    }
}

impl ChartEngineConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse engine config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Serializes the renderer's live options.
    pub fn live_options_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.renderer.get_option()?.to_json_contract_v1_pretty()
    }
}
