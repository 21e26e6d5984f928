// crates/usecase/src/config.rs
use derive_builder::Builder;
use event_coverage_shared_kernel::{ConfigError, RunNumber};
use serde::{Deserialize, Serialize};

/// What to do with a contribution identical to one already absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The same data was read twice; keep the first copy.
    #[default]
    Skip,
    Reject,
}

/// What to do with a contribution that overlaps the accumulated coverage
/// without being identical to an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    #[default]
    Reject,
    /// Drop the contribution with a warning.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(default)]
pub struct AccumulatorConfig {
    #[builder(default)]
    pub duplicates: DuplicatePolicy,
    #[builder(default)]
    pub overlaps: OverlapPolicy,
    /// Pins the run up front instead of adopting the first contribution's.
    #[builder(default, setter(strip_option))]
    pub expected_run: Option<RunNumber>,
}

impl AccumulatorConfig {
    pub fn builder() -> AccumulatorConfigBuilder {
        AccumulatorConfigBuilder::default()
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input).map_err(|e| ConfigError::Parse {
            format: "JSON".to_string(),
            details: e.to_string(),
        })?;
        config.validate()
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(input).map_err(|e| ConfigError::Parse {
            format: "YAML".to_string(),
            details: e.to_string(),
        })?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match self.expected_run {
            Some(run) if !run.is_valid() => Err(ConfigError::Invalid {
                reason: "expected_run must be a valid run number".to_string(),
            }),
            _ => Ok(self),
        }
    }
}

impl From<AccumulatorConfigBuilderError> for ConfigError {
    fn from(err: AccumulatorConfigBuilderError) -> Self {
        Self::Invalid { reason: err.to_string() }
    }
}
