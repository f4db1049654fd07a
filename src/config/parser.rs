//! Permissive INI-style parser.

use super::canonical::CanonicalConfig;
use super::filter::FilterSet;
use crate::error::Result;

/// Parses raw configuration bytes into a [`CanonicalConfig`].
///
/// Fails only when `raw` is not UTF-8. Lines that are neither a section
/// header nor a `key = value` / `key: value` pair are skipped.
pub fn parse(raw: &[u8], filters: &FilterSet) -> Result<CanonicalConfig> {
    let text = std::str::from_utf8(raw)?;
    Ok(parse_str(text, filters))
}

/// Parses configuration text into a [`CanonicalConfig`].
pub fn parse_str(text: &str, filters: &FilterSet) -> CanonicalConfig {
    let mut config = CanonicalConfig::new();
    let mut section = String::new();
    let mut skipping_section = filters.excludes_section(&section);
    let mut skipped = 0usize;

    for (lineno, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = section_header(line) {
            section = name.to_string();
            skipping_section = filters.excludes_section(&section);
            if !skipping_section {
                config.add_section(&section);
            }
            continue;
        }

        let Some((key, value)) = split_key_value(line) else {
            tracing::trace!(line = lineno + 1, "skipping malformed line");
            skipped += 1;
            continue;
        };

        if skipping_section || filters.excludes_key(key) {
            continue;
        }
        config.push(&section, key, value);
    }

    tracing::debug!(
        sections = config.sections().count(),
        keys = config.key_count(),
        skipped,
        "parsed configuration"
    );
    config
}

/// Returns the section name if `line` is a `[name]` header.
fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Splits `line` at whichever of `=` or `:` comes first.
///
/// Both halves are trimmed. Returns `None` when there is no separator or
/// the key is empty.
pub(crate) fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(['=', ':'])?;
    let key = line[..idx].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[idx + 1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_sections_and_keys() {
        let raw = b"top = 1\n[DEFAULT]\ndebug = True\nlog_dir: /var/log\n\n[database]\nconnection=mysql://u:p@h/db\n";
        let config = parse(raw, &FilterSet::new()).unwrap();

        assert_eq!(config.get("", "top").unwrap(), &values(&["1"])[..]);
        assert_eq!(config.get("DEFAULT", "debug").unwrap(), &values(&["True"])[..]);
        assert_eq!(config.get("DEFAULT", "log_dir").unwrap(), &values(&["/var/log"])[..]);
        assert_eq!(
            config.get("database", "connection").unwrap(),
            &values(&["mysql://u:p@h/db"])[..]
        );
    }

    #[test]
    fn test_first_separator_wins() {
        assert_eq!(split_key_value("url = http://host:5000"), Some(("url", "http://host:5000")));
        assert_eq!(split_key_value("url: a=b"), Some(("url", "a=b")));
        assert_eq!(split_key_value("empty ="), Some(("empty", "")));
        assert_eq!(split_key_value("= orphan"), None);
        assert_eq!(split_key_value("no separator"), None);
    }

    #[test]
    fn test_multi_valued_key_keeps_every_value() {
        let config = parse(b"a=1\na=2\na=1\n", &FilterSet::new()).unwrap();
        assert_eq!(config.get("", "a").unwrap(), &values(&["1", "2", "1"])[..]);
    }

    #[test]
    fn test_comments_and_malformed_lines_are_skipped() {
        let raw = b"# comment\n; another\n[DEFAULT]\n  # indented comment\nnot a pair\nkey = value\n[]\n";
        let config = parse(raw, &FilterSet::new()).unwrap();
        assert_eq!(config.key_count(), 1);
        assert_eq!(config.get("DEFAULT", "key").unwrap(), &values(&["value"])[..]);
    }

    #[test]
    fn test_filtered_key_is_dropped_everywhere() {
        let filters = FilterSet::new().with_keys(["password"]);
        let raw = b"password = a\n[db]\npassword = b\nuser = c\n";
        let config = parse(raw, &filters).unwrap();
        assert!(!config.contains("", "password"));
        assert!(!config.contains("db", "password"));
        assert!(config.contains("db", "user"));
    }

    #[test]
    fn test_filtered_section_drops_all_keys() {
        let filters = FilterSet::new().with_sections(["keystone_authtoken"]);
        let raw = b"[keystone_authtoken]\nauth_url = x\n[DEFAULT]\ndebug = True\n[keystone_authtoken]\nmore = y\n";
        let config = parse(raw, &filters).unwrap();
        assert!(config.section("keystone_authtoken").is_none());
        assert_eq!(config.key_count(), 1);
    }

    #[test]
    fn test_sectionless_keys_can_be_filtered_as_section() {
        let filters = FilterSet::new().with_sections([""]);
        let config = parse(b"a = 1\n[s]\nb = 2\n", &filters).unwrap();
        assert!(!config.contains("", "a"));
        assert!(config.contains("s", "b"));
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let err = parse(&[b'a', b'=', 0xff, 0xfe], &FilterSet::new()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Parse(_)));
    }

    #[test]
    fn test_reparse_of_rendered_config_is_equal() {
        let raw = b"x = 0\n[DEFAULT]\ndebug = True\ndebug = False\nurl: http://h:1/p\n[empty]\n[b]\nk =\n";
        let first = parse(raw, &FilterSet::new()).unwrap();
        let second = parse(first.to_ini_string().as_bytes(), &FilterSet::new()).unwrap();
        assert_eq!(first, second);
    }
}
