//! Extraction of `customServiceConfig` snippets from control-plane resources.

use crate::error::Result;
use crate::value::{self, Value};
use indexmap::IndexMap;

/// Collects every `<service>.template.customServiceConfig` string found one
/// level below the document's top-level maps (typically `spec`).
pub fn extract_custom_service_config(yaml: &str) -> Result<Vec<String>> {
    let doc = value::from_yaml(yaml)?;
    let Some(top) = doc.as_map() else {
        return Ok(Vec::new());
    };

    let mut configs = Vec::new();
    for (_, section) in top.iter() {
        let Some(services) = section.as_map() else {
            continue;
        };
        for (_, service) in services.iter() {
            if let Some(config) = custom_service_config(service) {
                configs.push(config.to_string());
            }
        }
    }
    Ok(configs)
}

/// Returns the string entries of a ConfigMap's `data` block, keyed by file
/// name, as printed by `oc get configmap/<name> -o yaml`.
pub fn configmap_data(yaml: &str) -> Result<IndexMap<String, String>> {
    let doc = value::from_yaml(yaml)?;
    let data = doc
        .as_map()
        .and_then(|m| m.get("data"))
        .and_then(Value::as_map);

    let mut out = IndexMap::new();
    if let Some(data) = data {
        for (name, content) in data.iter() {
            if let Some(content) = content.as_str() {
                out.insert(name.clone(), content.to_string());
            }
        }
    }
    Ok(out)
}

fn custom_service_config(service: &Value) -> Option<&str> {
    service
        .as_map()?
        .get("template")?
        .as_map()?
        .get("customServiceConfig")?
        .as_str()
}
