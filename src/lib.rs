//! # os-diff
//!
//! Compares the configuration of a service deployed with podman on a
//! standalone host against the same service deployed on OpenShift.
//!
//! ## Modules
//!
//! - [`config`] - Canonical `section -> key -> values` model and INI parser
//! - [`resolve`] - Attribute-name translation and lookups on deployment specifications
//! - [`diff`] - Direct and mapping-mode comparison producing diff entries
//! - [`report`] - `-`/`+` line rendering of diff entries
//! - [`fetch`] - Raw content from local files, ssh/podman and `oc exec`
//! - [`service`] - Service mapping configuration
//! - [`value`] - Generic YAML/JSON value tree

pub mod config;
pub mod diff;
pub mod error;
pub mod fetch;
pub mod report;
pub mod resolve;
pub mod service;
pub mod value;

pub use config::{parse, CanonicalConfig, FilterSet};
pub use diff::{compare_configs, compare_ini, compare_mapping, DiffEntry, MappingSpec};
pub use error::{Error, Result};
pub use fetch::Source;
pub use report::{render, Report};
pub use resolve::{render_value, resolve, DeploymentSpec};
pub use service::{Service, ServiceConfig};
pub use value::Value;
