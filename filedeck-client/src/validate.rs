const FORBIDDEN_CHARS: [char; 9] =
    ['/', '\\', '*', ':', '<', '>', '?', '"', '|'];

/// Human readable rules shown next to name inputs.
pub const FILENAME_RULES: [&str; 4] = [
    "Must not be empty, \".\" or \"..\"",
    "Must not contain / \\ * : < > ? \" |",
    "Must not start with whitespace",
    "Must not end with whitespace",
];

/// Check a candidate file or directory name against the safety rules.
pub fn is_filename_valid(name: Option<&str>) -> bool {
    let Some(name) = name else {
        return false;
    };

    if name.is_empty() || name == "." || name == ".." {
        return false;
    }

    if name.contains(FORBIDDEN_CHARS) {
        return false;
    }

    name.trim() == name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_reserved_or_malformed_names_then_they_are_rejected() {
        let names =
            ["", ".", "..", "a/b", " a", "a ", "a\\b", "x*", "c:", "?"];
        for name in names {
            assert!(!is_filename_valid(Some(name)), "{name:?} should fail");
        }
        assert!(!is_filename_valid(None));
    }

    #[test]
    fn given_ordinary_names_then_they_are_accepted() {
        let names =
            ["a", "a b", "file.txt", ".hidden", "...", "report (1).pdf"];
        for name in names {
            assert!(is_filename_valid(Some(name)), "{name:?} should pass");
        }
    }

    #[test]
    fn given_tab_or_newline_at_edges_then_name_is_rejected() {
        assert!(!is_filename_valid(Some("\tname")));
        assert!(!is_filename_valid(Some("name\n")));
    }
}
