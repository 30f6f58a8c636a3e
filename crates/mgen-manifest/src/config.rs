//! Deployment scaffolding and generator configuration

use crate::error::ConfigError;
use mgen_tree::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static deployment fields copied verbatim into the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Deployment name
    pub name: String,
    /// The single instance group running every job
    pub instance_group: InstanceGroupConfig,
}

impl DeploymentConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With deployment name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With instance group
    #[inline]
    #[must_use]
    pub fn with_instance_group(mut self, group: InstanceGroupConfig) -> Self {
        self.instance_group = group;
        self
    }

    /// Load from a `.yml`/`.yaml` or `.toml` file
    ///
    /// Fields missing from the file keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read, decoded, or has an
    /// unknown extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let config = match format.as_deref() {
            Some("yml" | "yaml") => {
                serde_yaml::from_str(&content()?).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Some("toml") => toml::from_str(&content()?).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(config = %path.display(), "loaded deployment config");
        Ok(config)
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            name: "MyDeployment".to_string(),
            instance_group: InstanceGroupConfig::default(),
        }
    }
}

/// Instance group scaffolding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceGroupConfig {
    /// Group name
    pub name: String,
    /// Availability zones
    pub azs: Vec<String>,
    /// Instance count
    pub instances: u32,
    /// VM type
    pub vm_type: String,
    /// Stemcell alias
    pub stemcell: String,
    /// Network entries, emitted as written
    pub networks: Vec<String>,
}

impl InstanceGroupConfig {
    /// With group name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With availability zones
    #[inline]
    #[must_use]
    pub fn with_azs<I, S>(mut self, azs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.azs = azs.into_iter().map(Into::into).collect();
        self
    }

    /// With instance count
    #[inline]
    #[must_use]
    pub fn with_instances(mut self, instances: u32) -> Self {
        self.instances = instances;
        self
    }
}

impl Default for InstanceGroupConfig {
    fn default() -> Self {
        Self {
            name: "MyName".to_string(),
            azs: vec!["z1".to_string()],
            instances: 1,
            vm_type: "default".to_string(),
            stemcell: "default".to_string(),
            networks: vec!["{name: default}".to_string()],
        }
    }
}

/// What to do when one job's spec cannot be turned into properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log a warning and leave the job out of the manifest
    #[default]
    Skip,
    /// Stop the run with an error
    Abort,
}

/// Order of property roots, children and leaves in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    /// First-seen order from the spec document
    #[default]
    Insertion,
    /// Lexicographic by name at every level
    Sorted,
}

/// Everything the generator needs besides the job source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Static scaffolding
    pub deployment: DeploymentConfig,
    /// Renderer switches
    pub render: RenderOptions,
    /// Per-job failure handling
    pub policy: ErrorPolicy,
    /// Output ordering
    pub ordering: Ordering,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With deployment scaffolding
    #[inline]
    #[must_use]
    pub fn with_deployment(mut self, deployment: DeploymentConfig) -> Self {
        self.deployment = deployment;
        self
    }

    /// With description comments enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_descriptions(mut self, enabled: bool) -> Self {
        self.render = self.render.with_descriptions(enabled);
        self
    }

    /// With error policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// With ordering
    #[inline]
    #[must_use]
    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }
}
