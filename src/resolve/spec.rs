//! Deployment specification decoded into an attribute-named value tree.

use super::naming::attribute_name;
use crate::error::{Error, Result};
use crate::value::{self, Map, Value};
use std::fs;
use std::path::Path;

/// Attribute path of the flattened variable block that mappings address.
pub const ANSIBLE_VARS_PATH: [&str; 4] = ["Spec", "NodeTemplate", "Ansible", "AnsibleVars"];

/// DeploymentSpec is a cluster-side deployment descriptor.
///
/// Every map key is stored under its attribute name (see
/// [`attribute_name`]), so `nodeTemplate.ansible.ansibleVars.edpm_ovn_bridge`
/// is reached as `NodeTemplate / Ansible / AnsibleVars / EdpmOvnBridge`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentSpec {
    root: Value,
}

impl DeploymentSpec {
    /// Builds a specification from an already decoded document.
    pub fn from_value(doc: &Value) -> Self {
        DeploymentSpec {
            root: doc.map_keys(&attribute_name),
        }
    }

    /// Decodes a specification from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::from_value(&value::from_yaml(yaml)?))
    }

    /// Decodes a specification from JSON text, as printed by `oc get -o json`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_value(&value::from_json(json)?))
    }

    /// Reads and decodes a YAML or JSON specification file.
    ///
    /// Files ending in `.json` are decoded as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Returns the root of the attribute tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walks `attrs` from the root, one attribute name per level.
    pub fn field(&self, attrs: &[&str]) -> Option<&Value> {
        attrs
            .iter()
            .try_fold(&self.root, |node, attr| node.as_map()?.get(attr))
    }

    /// Returns the flattened variable block mappings are resolved against.
    pub fn ansible_vars(&self) -> Option<&Map> {
        self.field(&ANSIBLE_VARS_PATH)?.as_map()
    }
}
