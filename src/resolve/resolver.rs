//! Path resolution against a deployment specification and value rendering.

use super::naming::attribute_name;
use super::spec::DeploymentSpec;
use crate::value::{Map, Value};

/// Resolves an on-host style `path` in the specification's variable block.
///
/// `path` is translated segment by segment with [`attribute_name`]. A plain
/// name such as `edpm_ovn_bridge` addresses a variable directly; a
/// `.`-separated path such as `service_net_map.nova_api_network` walks into
/// nested maps, and numeric segments index lists.
///
/// Returns `None` when the name does not exist in the current shape.
pub fn resolve<'a>(spec: &'a DeploymentSpec, path: &str) -> Option<&'a Value> {
    let Some(vars) = spec.ansible_vars() else {
        tracing::debug!(path, "specification has no variable block");
        return None;
    };
    let found = resolve_in(vars, path);
    if found.is_none() {
        tracing::debug!(path, attribute = %attribute_name(path), "path not found in specification");
    }
    found
}

/// Resolves `path` starting from an arbitrary map.
pub fn resolve_in<'a>(map: &'a Map, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut node = map.get(&attribute_name(first))?;
    for segment in segments {
        node = match node {
            Value::Map(m) => m.get(&attribute_name(segment))?,
            Value::List(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Renders a value to the text form used for comparison with raw config.
///
/// Booleans become `true`/`false`, lists `[a b c]`, maps `{k:v k2:v2}` in
/// document order, and null becomes the empty string.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(" "))
        }
        Value::Map(m) => {
            let rendered: Vec<String> = m
                .iter()
                .map(|(k, v)| format!("{}:{}", k, render_value(v)))
                .collect();
            format!("{{{}}}", rendered.join(" "))
        }
    }
}

/// Renders a resolution result; a miss renders as the empty string.
pub fn render_resolved(value: Option<&Value>) -> String {
    value.map(render_value).unwrap_or_default()
}
