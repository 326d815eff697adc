/// Default backend origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Join `base` with `path`, prefixing `/` when the path lacks one.
///
/// No escaping is applied; query values must already be encoded.
pub fn build_url(base: &str, path: &str) -> String {
    let mut url = String::with_capacity(base.len() + path.len() + 1);
    url.push_str(base);
    if !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(path);
    url
}

/// Builder bound to one backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl UrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn build(&self, path: &str) -> String {
        build_url(&self.base, path)
    }
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Encode a single query value.
pub(crate) fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn given_path_with_and_without_slash_when_built_then_results_match() {
        let builder = UrlBuilder::new("http://host:9000");

        assert_eq!(builder.build("/x"), builder.build("x"));
        assert_eq!(builder.build("x"), "http://host:9000/x");
    }

    #[test]
    fn given_empty_base_when_built_then_path_is_rooted() {
        assert_eq!(
            build_url("", "api/directory?path="),
            "/api/directory?path="
        );
        assert_eq!(build_url("", "/api/file/type"), "/api/file/type");
    }

    #[test]
    fn given_base_with_trailing_slash_when_created_then_slash_is_trimmed() {
        let builder = UrlBuilder::new("http://host/");

        assert_eq!(builder.base(), "http://host");
        assert_eq!(builder.build("/api"), "http://host/api");
    }

    #[test]
    fn given_default_builder_then_local_origin_is_used() {
        assert_eq!(UrlBuilder::default().base(), DEFAULT_BASE_URL);
    }

    #[test]
    fn given_reserved_characters_when_encoded_then_query_is_safe() {
        assert_eq!(encode_query_value("docs/a b&c"), "docs%2Fa+b%26c");
        assert_eq!(encode_query_value(""), "");
    }
}
