//! Helpers for the `/`-joined relative paths used by the API.
//!
//! The root directory is the empty string. Paths never carry a leading slash.

/// Join a directory path and an entry name.
pub fn join_path(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Parent of `path`, or `None` for the root.
pub fn parent_path(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    Some(path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or(""))
}

/// Last segment of `path`.
pub fn base_name(path: &str) -> &str {
    path.rsplit_once('/').map(|(_, name)| name).unwrap_or(path)
}

/// Cumulative prefixes of `path` paired with their segment names.
///
/// `"a/b"` yields `[("a", "a"), ("b", "a/b")]`.
pub fn segments(path: &str) -> Vec<(&str, &str)> {
    let mut result = Vec::new();
    let mut offset = 0;
    for segment in path.split('/') {
        let end = offset + segment.len();
        if !segment.is_empty() {
            result.push((segment, &path[..end]));
        }
        offset = end + 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn given_root_parent_when_joined_then_no_leading_slash() {
        assert_eq!(join_path("", "docs"), "docs");
        assert_eq!(join_path("docs", "a.txt"), "docs/a.txt");
        assert_eq!(join_path("docs/", "a.txt"), "docs/a.txt");
    }

    #[test]
    fn given_nested_path_when_parent_requested_then_last_segment_is_dropped() {
        assert_eq!(parent_path("docs/img/a.png"), Some("docs/img"));
        assert_eq!(parent_path("docs"), Some(""));
        assert_eq!(parent_path(""), None);
    }

    #[test]
    fn given_path_when_base_name_requested_then_last_segment_is_returned() {
        assert_eq!(base_name("docs/img/a.png"), "a.png");
        assert_eq!(base_name("a.png"), "a.png");
    }

    #[test]
    fn given_nested_path_when_split_then_prefixes_accumulate() {
        assert_eq!(
            segments("docs/img/raw"),
            vec![
                ("docs", "docs"),
                ("img", "docs/img"),
                ("raw", "docs/img/raw")
            ]
        );
        assert!(segments("").is_empty());
    }
}
