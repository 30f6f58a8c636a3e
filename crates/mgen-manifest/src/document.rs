//! Manifest text assembly
//!
//! ```text
//! ---
//! name: <deployment>
//!
//! instance_groups:
//! - name: <group>
//!   azs: [<az>, ...]
//!   instances: <n>
//!   vm_type: <vm_type>
//!   stemcell: <stemcell>
//!   networks: [<network>, ...]
//!   jobs:
//!     - name: <job>
//!       release: <job>
//!       properties:
//!         <property tree>
//! ```

use crate::config::{DeploymentConfig, InstanceGroupConfig};
use mgen_tree::{render_forest, Forest, RenderOptions};
use std::fmt::Write;

/// Indentation of a job list item under `jobs:`
pub const JOB_INDENT: usize = 4;

/// Indentation of fields inside a job list item
pub const JOB_FIELD_INDENT: usize = JOB_INDENT + 2;

/// Base indentation of property roots under `properties:`
pub const PROPERTY_INDENT: usize = JOB_FIELD_INDENT + 2;

/// One job ready to be placed in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobBlock {
    /// Job name
    pub name: String,
    /// Release providing the job
    pub release: String,
    /// Property trees for the job
    pub properties: Forest,
}

impl JobBlock {
    /// Create block whose release is named after the job
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, properties: Forest) -> Self {
        let name = name.into();
        Self {
            release: name.clone(),
            name,
            properties,
        }
    }

    /// Render the job list item
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        let pad = " ".repeat(JOB_INDENT);
        let field_pad = " ".repeat(JOB_FIELD_INDENT);
        let mut out = format!(
            "{pad}- name: {}\n{field_pad}release: {}\n{field_pad}properties:\n",
            self.name, self.release
        );
        out.push_str(&render_forest(&self.properties, PROPERTY_INDENT, options));
        out
    }
}

/// Render the full manifest document
#[must_use]
pub fn render_manifest(
    deployment: &DeploymentConfig,
    jobs: &[JobBlock],
    options: &RenderOptions,
) -> String {
    let mut out = format!("---\nname: {}\n\ninstance_groups:\n", deployment.name);
    write_instance_group(&mut out, &deployment.instance_group);
    for job in jobs {
        out.push_str(&job.render(options));
    }
    out
}

fn write_instance_group(out: &mut String, group: &InstanceGroupConfig) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "- name: {}\n  azs: {}\n  instances: {}\n  vm_type: {}\n  stemcell: {}\n  networks: {}\n  jobs:\n",
        group.name,
        flow_list(&group.azs),
        group.instances,
        group.vm_type,
        group.stemcell,
        flow_list(&group.networks),
    );
}

fn flow_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
