use std::fmt;

use serde::{Deserialize, Serialize};

/// Response of `GET /api/directory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub files: Vec<RawEntry>,
}

/// One entry as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub name: String,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub size: u64,
}

/// Item of the `POST /api/file/exists` response.
///
/// The backend reports `isDirectory: null` for names that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingEntry {
    pub name: String,
    #[serde(default)]
    pub is_directory: Option<bool>,
}

impl ExistingEntry {
    pub fn exists(&self) -> bool {
        self.is_directory.is_some()
    }
}

/// Response of `GET /api/file/type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeInfo {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub viewable: bool,
}

impl FileTypeInfo {
    pub fn preview_kind(&self) -> PreviewKind {
        PreviewKind::from_tag(&self.kind)
    }
}

/// Viewer a file is dispatched to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    Text,
    Image,
    Zip,
    Pdf,
    Error,
    Unknown(String),
}

impl PreviewKind {
    /// Kinds a user may force for a non-viewable file.
    pub const FORCEABLE: [PreviewKind; 4] = [
        PreviewKind::Text,
        PreviewKind::Image,
        PreviewKind::Zip,
        PreviewKind::Pdf,
    ];

    /// Parse a backend type tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "text" => Self::Text,
            "image" => Self::Image,
            "zip" => Self::Zip,
            "pdf" => Self::Pdf,
            "error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Image => f.write_str("image"),
            Self::Zip => f.write_str("zip"),
            Self::Pdf => f.write_str("pdf"),
            Self::Error => f.write_str("error"),
            Self::Unknown(tag) => f.write_str(tag),
        }
    }
}

/// Response of `GET /api/file/text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPreview {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub truncate: bool,
    #[serde(default)]
    pub size: u64,
}

/// Response of `GET /api/file/zip`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipListing {
    #[serde(default)]
    pub nodes: Vec<ZipNode>,
}

/// Archive member; directories carry `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ZipNode>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn given_root_listing_json_when_parsed_then_entries_keep_flags() {
        let listing: DirectoryListing = serde_json::from_str(
            concat!(
                r#"{"path":"","files":[{"name":"docs","isDirectory":true,"#,
                r#""isHidden":false,"size":0}]}"#,
            ),
        )
        .expect("listing");

        assert_eq!(listing.path, "");
        assert_eq!(
            listing.files,
            vec![RawEntry {
                name: String::from("docs"),
                is_directory: true,
                is_hidden: false,
                size: 0,
            }]
        );
    }

    #[test]
    fn given_null_directory_flag_when_parsed_then_entry_does_not_exist() {
        let entries: Vec<ExistingEntry> = serde_json::from_str(
            concat!(
                r#"[{"name":"a.txt","isDirectory":false},"#,
                r#"{"name":"b.txt","isDirectory":null},{"name":"c"}]"#,
            ),
        )
        .expect("exists response");

        let existing: Vec<&str> = entries
            .iter()
            .filter(|entry| entry.exists())
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(existing, vec!["a.txt"]);
    }

    #[test]
    fn given_mixed_case_type_tag_when_parsed_then_kind_is_normalized() {
        let info: FileTypeInfo =
            serde_json::from_str(r#"{"type":"IMAGE","viewable":true}"#)
                .expect("type info");

        assert_eq!(info.preview_kind(), PreviewKind::Image);
        assert_eq!(
            PreviewKind::from_tag("Binary"),
            PreviewKind::Unknown(String::from("binary"))
        );
        assert_eq!(PreviewKind::from_tag("error"), PreviewKind::Error);
    }

    #[test]
    fn given_nested_zip_listing_when_parsed_then_children_are_optional() {
        let listing: ZipListing = serde_json::from_str(
            concat!(
                r#"{"nodes":[{"name":"src","children":[{"name":"main.rs"}]},"#,
                r#"{"name":"README"}]}"#,
            ),
        )
        .expect("zip listing");

        assert_eq!(listing.nodes.len(), 2);
        assert_eq!(
            listing.nodes[0].children.as_ref().map(Vec::len),
            Some(1)
        );
        assert!(listing.nodes[1].children.is_none());
    }

    #[test]
    fn given_text_payload_without_flags_when_parsed_then_defaults_apply() {
        let text: TextPreview =
            serde_json::from_str(r#"{"content":""}"#).expect("text");

        assert_eq!(text, TextPreview::default());
    }
}
