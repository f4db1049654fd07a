//! Pod name resolution from `oc get pods` listings.

/// Picks the full name of a running pod from `oc get pods --no-headers`.
///
/// With `strict` the pod name must equal `name`; otherwise the first running
/// pod whose name starts with `name` wins.
pub fn select_running_pod(listing: &str, name: &str, strict: bool) -> Option<String> {
    listing.lines().find_map(|line| {
        let mut columns = line.split_whitespace();
        let pod = columns.next()?;
        let status = columns.nth(1)?;
        let matches = if strict { pod == name } else { pod.starts_with(name) };
        (matches && status.eq_ignore_ascii_case("running")).then(|| pod.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
keystone-cron-28374-abcde            0/1   Completed   0   3h
keystone-6cf6c98564-blggc            1/1   Running     0   2d
glance-external-api-6cf6c98564-xx    3/3   Running     1   2d
glance-external-api-6cf6c98564-yy    0/3   Pending     0   1m
glance                               1/1   Running     0   5d
";

    #[test]
    fn test_prefix_match_skips_non_running() {
        assert_eq!(
            select_running_pod(LISTING, "keystone", false).as_deref(),
            Some("keystone-6cf6c98564-blggc")
        );
        assert_eq!(
            select_running_pod(LISTING, "glance-external-api", false).as_deref(),
            Some("glance-external-api-6cf6c98564-xx")
        );
    }

    #[test]
    fn test_strict_match() {
        assert_eq!(select_running_pod(LISTING, "glance", true).as_deref(), Some("glance"));
        assert_eq!(select_running_pod(LISTING, "keystone", true), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(select_running_pod(LISTING, "nova", false), None);
        assert_eq!(select_running_pod("", "nova", false), None);
    }
}
