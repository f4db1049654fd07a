//! Service mapping configuration.

use crate::config::FilterSet;
use crate::diff::MappingSpec;
use crate::error::{Error, Result};
use crate::fetch::Source;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// ServiceConfig is the decoded service mapping document.
///
/// ```yaml
/// services:
///   keystone:
///     enable: true
///     podman_name: keystone
///     pod_name: keystone
///     container_name: keystone-api
///     path:
///       - /etc/keystone/keystone.conf
///     filters:
///       keys: [transport_url]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub services: IndexMap<String, Service>,
}

/// Service describes where one service's configuration lives on each side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub enable: bool,
    pub podman_id: String,
    pub podman_image: String,
    pub podman_name: String,
    pub pod_name: String,
    pub container_name: String,
    pub strict_pod_name_match: bool,
    pub path: Vec<String>,
    /// Carried only so the mapping file round-trips; not used for fetching.
    pub hosts: Vec<String>,
    /// Carried only so the mapping file round-trips; not used for fetching.
    pub service_command: String,
    /// Carried only so the mapping file round-trips; not used for fetching.
    pub cat_output: bool,
    pub config_mapping: MappingSpec,
    pub filters: FilterSet,
}

impl ServiceConfig {
    /// Decodes a service mapping document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ServiceConfig = serde_yaml::from_str(yaml)?;
        for (name, service) in &config.services {
            service
                .config_mapping
                .validate()
                .map_err(|e| Error::InvalidMapping(format!("service {}: {}", name, e)))?;
        }
        Ok(config)
    }

    /// Reads and decodes a service mapping file. Every call returns a fresh
    /// value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), services = config.services.len(), "loaded service config");
        Ok(config)
    }

    /// Returns the named service.
    pub fn service(&self, name: &str) -> Result<&Service> {
        self.services
            .get(name)
            .ok_or_else(|| Error::UnknownService(name.to_string()))
    }

    /// Iterates over enabled services in document order.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &Service)> {
        self.services
            .iter()
            .filter(|(_, s)| s.enable)
            .map(|(name, s)| (name.as_str(), s))
    }
}

impl Service {
    /// Source reading `path` from this service's podman container.
    pub fn podman_source(&self, ssh_cmd: &str, path: &str) -> Source {
        let container = if self.podman_name.is_empty() {
            &self.podman_id
        } else {
            &self.podman_name
        };
        Source::podman(ssh_cmd, container, path)
    }

    /// Source reading `path` from this service's pod.
    pub fn pod_source(&self, path: &str) -> Source {
        Source::Pod {
            pod: self.pod_name.clone(),
            container: self.container_name.clone(),
            path: path.to_string(),
            strict: self.strict_pod_name_match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SERVICES: &str = r#"services:
  keystone:
    enable: true
    podman_name: keystone
    pod_name: keystone
    container_name: keystone-api
    strict_pod_name_match: false
    path:
      - /etc/keystone/keystone.conf
    filters:
      sections: [database]
      keys: [transport_url]
  glance:
    enable: false
    podman_id: a6e1ca049eee
    pod_name: glance-external-api
    container_name: glance-api
  ovs_external_ids:
    enable: true
    config_mapping:
      ovn-bridge: edpm_ovn_bridge
      ovn-remote-probe-interval: edpm_ovn_remote_probe_interval
"#;

    #[test]
    fn test_decode_services() {
        let config = ServiceConfig::from_yaml(SERVICES).unwrap();
        let keystone = config.service("keystone").unwrap();
        assert_eq!(keystone.path, vec!["/etc/keystone/keystone.conf"]);
        assert!(keystone.filters.excludes_section("database"));
        assert!(keystone.filters.excludes_key("transport_url"));

        let ovs = config.service("ovs_external_ids").unwrap();
        assert_eq!(ovs.config_mapping.get("ovn-bridge"), Some("edpm_ovn_bridge"));
        assert_eq!(ovs.config_mapping.len(), 2);
    }

    #[test]
    fn test_enabled_in_document_order() {
        let config = ServiceConfig::from_yaml(SERVICES).unwrap();
        let names: Vec<&str> = config.enabled().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["keystone", "ovs_external_ids"]);
    }

    #[test]
    fn test_unknown_service() {
        let config = ServiceConfig::from_yaml(SERVICES).unwrap();
        assert!(matches!(config.service("nova"), Err(Error::UnknownService(_))));
    }

    #[test]
    fn test_invalid_mapping_is_rejected() {
        let yaml = "services:\n  ovs:\n    config_mapping:\n      ovn-bridge: ''\n";
        assert!(matches!(ServiceConfig::from_yaml(yaml), Err(Error::InvalidMapping(_))));
    }

    #[test]
    fn test_sources() {
        let config = ServiceConfig::from_yaml(SERVICES).unwrap();
        let glance = config.service("glance").unwrap();
        assert_eq!(
            glance.podman_source("ssh standalone", "/etc/glance/glance-api.conf"),
            Source::Shell {
                command: "ssh standalone podman exec a6e1ca049eee".into(),
                path: "/etc/glance/glance-api.conf".into(),
            }
        );
        assert_eq!(
            glance.pod_source("/etc/glance/glance.conf.d/00-config.conf"),
            Source::Pod {
                pod: "glance-external-api".into(),
                container: "glance-api".into(),
                path: "/etc/glance/glance.conf.d/00-config.conf".into(),
                strict: false,
            }
        );
    }

    #[test]
    fn test_each_load_is_independent() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        first.write_all(SERVICES.as_bytes()).unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        second
            .write_all(b"services:\n  nova:\n    enable: true\n")
            .unwrap();

        let a = ServiceConfig::load(first.path()).unwrap();
        let b = ServiceConfig::load(second.path()).unwrap();
        assert_eq!(a.services.len(), 3);
        assert_eq!(b.services.len(), 1);
        assert!(b.service("keystone").is_err());
    }
}
