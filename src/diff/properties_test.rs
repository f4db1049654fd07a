//! Property-style tests for the diff engine over a set of fixture configs.

#[cfg(test)]
mod tests {
    use crate::config::{parse, CanonicalConfig, FilterSet};
    use crate::diff::{compare_configs, compare_ini, DiffEntry};
    use crate::report::render;
    use pretty_assertions::assert_eq;

    const FIXTURES: &[&str] = &[
        "",
        "[DEFAULT]\ndebug = True\n",
        "[DEFAULT]\ndebug = False\nlog_dir = /var/log/keystone\n",
        "top = 1\n[DEFAULT]\ndebug = True\n[database]\nconnection = mysql+pymysql://keystone:pw@db/keystone\n",
        "[DEFAULT]\nenabled_backends = a\nenabled_backends = b\n[oslo_messaging]\ntransport_url: rabbit://u:p@rabbit:5672/\n",
        "[DEFAULT]\nenabled_backends = b\nenabled_backends = a\n[cache]\nbackend = dogpile.cache.memcached\nenabled = true\n",
        "a=1\na=2\na=1\n[database]\nmax_retries = -1\n",
    ];

    fn configs() -> Vec<CanonicalConfig> {
        FIXTURES
            .iter()
            .map(|raw| parse(raw.as_bytes(), &FilterSet::new()).unwrap())
            .collect()
    }

    #[test]
    fn test_reparse_is_idempotent() {
        for config in configs() {
            let reparsed = parse(config.to_ini_string().as_bytes(), &FilterSet::new()).unwrap();
            assert_eq!(config, reparsed);
        }
    }

    #[test]
    fn test_compare_with_self_is_empty() {
        for config in configs() {
            assert!(compare_configs(&config, &config).is_empty());
        }
    }

    #[test]
    fn test_compare_is_symmetric() {
        let all = configs();
        for left in &all {
            for right in &all {
                let forward = compare_configs(left, right);
                let backward = compare_configs(right, left);
                assert_eq!(forward.len(), backward.len());

                let mut inverted: Vec<(String, String, DiffEntry)> = forward
                    .iter()
                    .map(|e| (e.section().to_string(), e.key().to_string(), e.inverted()))
                    .collect();
                let mut expected: Vec<(String, String, DiffEntry)> = backward
                    .iter()
                    .map(|e| (e.section().to_string(), e.key().to_string(), e.clone()))
                    .collect();
                inverted.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
                expected.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
                assert_eq!(inverted, expected);
            }
        }
    }

    #[test]
    fn test_filtering_is_monotonic() {
        let filter_chain = [
            FilterSet::new(),
            FilterSet::new().with_keys(["debug"]),
            FilterSet::new().with_keys(["debug", "enabled_backends"]),
            FilterSet::new()
                .with_keys(["debug", "enabled_backends"])
                .with_sections(["database"]),
            FilterSet::new()
                .with_keys(["debug", "enabled_backends", "a"])
                .with_sections(["database", "DEFAULT", "cache"]),
        ];

        for left in FIXTURES {
            for right in FIXTURES {
                let mut previous = usize::MAX;
                for filters in &filter_chain {
                    let count = compare_ini(left.as_bytes(), right.as_bytes(), filters)
                        .unwrap()
                        .len();
                    assert!(count <= previous, "filters {:?} increased diff", filters);
                    previous = count;
                }
            }
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        let left = FIXTURES[3].as_bytes();
        let right = FIXTURES[5].as_bytes();
        let first = render(&compare_ini(left, right, &FilterSet::new()).unwrap());
        for _ in 0..5 {
            let again = render(&compare_ini(left, right, &FilterSet::new()).unwrap());
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_end_to_end_debug_scenario() {
        let entries = compare_ini(
            b"[DEFAULT]\ndebug = True\n",
            b"[DEFAULT]\ndebug = False\n",
            &FilterSet::new(),
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], DiffEntry::Changed { .. }));
        assert_eq!(render(&entries), vec!["-debug=True", "+debug=False"]);
    }
}
