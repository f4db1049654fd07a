//! Translation from on-host key names to specification attribute names.

/// Translates an underscore-separated name to an attribute name.
///
/// Each segment gets its first character upper-cased and the segments are
/// concatenated: `edpm_ovn_bridge` becomes `EdpmOvnBridge`, and
/// `ansibleVars` becomes `AnsibleVars`.
pub fn attribute_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
