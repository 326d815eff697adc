use std::path::PathBuf;

use filedeck_client::paths::join_path;
use filedeck_client::{PreviewKind, TextPreview, ZipNode};
use filedeck_ui_tree::TreeNode;
use iced::widget::image;

/// Result of asking the backend which viewer fits a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Detection {
    Detecting,
    Detected { kind: PreviewKind, viewable: bool },
    Failed,
}

/// Payload of the active viewer.
#[derive(Debug, Clone)]
pub(crate) enum PreviewContent {
    /// No viewer chosen yet.
    Idle,
    Loading,
    Text(TextPreview),
    Image(image::Handle),
    Zip(Vec<ZipTreeNode>),
    Pdf { file: PathBuf, size: u64 },
    Error,
}

impl PreviewContent {
    /// Temp file backing a PDF preview.
    pub(crate) fn into_preview_file(self) -> Option<PathBuf> {
        match self {
            Self::Pdf { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Archive member adapted to the tree renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ZipTreeNode {
    id: String,
    name: String,
    children: Option<Vec<ZipTreeNode>>,
}

impl TreeNode for ZipTreeNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    fn expanded(&self) -> bool {
        true
    }

    fn is_folder(&self) -> bool {
        self.children.is_some()
    }
}

/// Convert archive members into tree nodes with unique path ids.
pub(crate) fn zip_tree(nodes: &[ZipNode], parent: &str) -> Vec<ZipTreeNode> {
    nodes
        .iter()
        .map(|node| {
            let id = join_path(parent, &node.name);
            let children = node
                .children
                .as_ref()
                .map(|children| zip_tree(children, &id));
            ZipTreeNode {
                id,
                name: node.name.clone(),
                children,
            }
        })
        .collect()
}

/// Viewer a detected kind dispatches to; unknown tags fall back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewerKind {
    Text,
    Image,
    Zip,
    Pdf,
    DataError,
}

impl From<&PreviewKind> for ViewerKind {
    fn from(kind: &PreviewKind) -> Self {
        match kind {
            PreviewKind::Text | PreviewKind::Unknown(_) => Self::Text,
            PreviewKind::Image => Self::Image,
            PreviewKind::Zip => Self::Zip,
            PreviewKind::Pdf => Self::Pdf,
            PreviewKind::Error => Self::DataError,
        }
    }
}

/// Read-only view model for the viewer modal.
#[derive(Debug, Clone)]
pub(crate) struct ViewerViewModel<'a> {
    pub(crate) path: &'a str,
    pub(crate) detection: &'a Detection,
    pub(crate) forced: Option<&'a PreviewKind>,
    pub(crate) force_choice: &'a PreviewKind,
    pub(crate) content: &'a PreviewContent,
}

impl ViewerViewModel<'_> {
    /// Whether the force-preview controls are shown.
    pub(crate) fn needs_force(&self) -> bool {
        self.forced.is_none()
            && matches!(
                self.detection,
                Detection::Detected {
                    viewable: false,
                    ..
                }
            )
    }
}

#[cfg(test)]
mod tests {
    use filedeck_ui_tree::flatten_tree;

    use super::*;

    fn node(name: &str, children: Option<Vec<ZipNode>>) -> ZipNode {
        ZipNode {
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn given_nested_archive_when_converted_then_every_member_is_visible() {
        let nodes = vec![
            node("docs", Some(vec![node("a.txt", None), node("b.txt", None)])),
            node("readme.md", None),
        ];

        let tree = zip_tree(&nodes, "");
        let ids: Vec<&str> = flatten_tree(&tree)
            .into_iter()
            .map(|row| row.node.id())
            .collect();

        assert_eq!(ids, vec!["docs", "docs/a.txt", "docs/b.txt", "readme.md"]);
        assert!(tree[0].is_folder());
        assert!(!tree[1].is_folder());
    }

    #[test]
    fn given_unknown_tag_when_dispatching_then_text_viewer_is_used() {
        assert_eq!(
            ViewerKind::from(&PreviewKind::Unknown(String::from("markdown"))),
            ViewerKind::Text
        );
        assert_eq!(
            ViewerKind::from(&PreviewKind::Error),
            ViewerKind::DataError
        );
    }
}
