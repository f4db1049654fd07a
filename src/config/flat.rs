//! Loaders for flat `key -> value` sources such as OVS external-ids dumps.

use super::parser::split_key_value;
use indexmap::IndexMap;

/// Parses one `key=value` or `key: value` pair per line.
///
/// Later occurrences of a key replace earlier ones. Lines without a
/// separator are skipped.
pub fn parse_flat(text: &str) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for line in text.lines() {
        if let Some((key, value)) = split_key_value(line.trim()) {
            out.insert(key.to_string(), value.to_string());
        }
    }
    out
}

/// Parses the output of `ovs-vsctl get Open_vSwitch . external_ids`.
///
/// The dump looks like `{hostname=compute-0, ovn-encap-type=geneve,
/// ovn-bridge-mappings="datacentre:br-ex,tenant:br-tenant"}`. Commas inside
/// double quotes do not split entries.
pub fn parse_external_ids(text: &str) -> IndexMap<String, String> {
    let body = text.trim();
    let body = body.strip_prefix('{').unwrap_or(body);
    let body = body.strip_suffix('}').unwrap_or(body);

    let mut out = IndexMap::new();
    for entry in split_unquoted(body, ',') {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        out.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    out
}

fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == sep && !in_quotes {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}
