use filedeck_client::DirectoryListing;
use filedeck_client::paths::join_path;
use filedeck_ui_tree::TreeNode;

use crate::filter::ViewFilter;

/// Id of the sentinel shown until the root listing arrives.
pub(crate) const ROOT_ID: &str = "<root>";
/// Last id segment of a loading placeholder.
pub(crate) const LOADING_SEGMENT: &str = "<loading>";
/// Last id segment of a failed-load placeholder.
pub(crate) const ERROR_SEGMENT: &str = "<error>";

/// Height of a rendered tree row.
pub(crate) const ROW_HEIGHT: f32 = 24.0;
/// Horizontal offset per depth level.
pub(crate) const INDENT_WIDTH: f32 = 14.0;
/// Width of the expand/collapse chevron slot.
pub(crate) const TOGGLE_WIDTH: f32 = 16.0;
/// Row padding plus icon width left of a row label.
pub(crate) const CHROME_ALLOWANCE: f32 = 46.0 + 22.0;

/// What a tree node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeRole {
    Entry,
    Loading,
    LoadFailed,
}

/// Children state of a tree node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeChildren {
    /// A file.
    Leaf,
    /// A directory that was never fetched.
    Unexpanded,
    /// A materialised directory, possibly holding a placeholder.
    Expanded(Vec<ExplorerNode>),
}

/// Node of the lazily loaded directory tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExplorerNode {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) is_hidden: bool,
    pub(crate) role: NodeRole,
    pub(crate) children: NodeChildren,
    pub(crate) expanded: bool,
}

impl ExplorerNode {
    pub(crate) fn entry(
        parent: &str,
        name: &str,
        is_directory: bool,
        is_hidden: bool,
    ) -> Self {
        Self {
            id: join_path(parent, name),
            name: name.to_string(),
            is_hidden,
            role: NodeRole::Entry,
            children: if is_directory {
                NodeChildren::Unexpanded
            } else {
                NodeChildren::Leaf
            },
            expanded: false,
        }
    }

    pub(crate) fn root_placeholder() -> Self {
        Self::placeholder(String::from(ROOT_ID), NodeRole::Loading)
    }

    pub(crate) fn loading(parent_id: &str) -> Self {
        Self::placeholder(
            format!("{parent_id}/{LOADING_SEGMENT}"),
            NodeRole::Loading,
        )
    }

    pub(crate) fn failed(parent_id: &str) -> Self {
        Self::placeholder(
            format!("{parent_id}/{ERROR_SEGMENT}"),
            NodeRole::LoadFailed,
        )
    }

    fn placeholder(id: String, role: NodeRole) -> Self {
        Self {
            name: String::new(),
            id,
            is_hidden: false,
            role,
            children: NodeChildren::Leaf,
            expanded: false,
        }
    }

    pub(crate) fn is_placeholder(&self) -> bool {
        self.role != NodeRole::Entry
    }

    /// Whether this node is a real directory entry.
    pub(crate) fn is_directory(&self) -> bool {
        self.role == NodeRole::Entry
            && !matches!(self.children, NodeChildren::Leaf)
    }

    pub(crate) fn child_nodes(&self) -> &[ExplorerNode] {
        match &self.children {
            NodeChildren::Expanded(children) => children,
            NodeChildren::Leaf | NodeChildren::Unexpanded => &[],
        }
    }

    /// Label shown for the node, including placeholder captions.
    pub(crate) fn label(&self) -> &str {
        match self.role {
            NodeRole::Entry => &self.name,
            NodeRole::Loading => "Loading...",
            NodeRole::LoadFailed => "Error on loading data",
        }
    }
}

impl TreeNode for ExplorerNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        self.label()
    }

    fn children(&self) -> Option<&[Self]> {
        match &self.children {
            NodeChildren::Expanded(children) => Some(children),
            NodeChildren::Leaf | NodeChildren::Unexpanded => None,
        }
    }

    fn expanded(&self) -> bool {
        self.expanded
    }

    fn is_folder(&self) -> bool {
        self.is_directory()
    }
}

/// Map a listing response into tree nodes under `parent`.
pub(crate) fn nodes_from_listing(
    parent: &str,
    listing: &DirectoryListing,
) -> Vec<ExplorerNode> {
    listing
        .files
        .iter()
        .map(|entry| {
            ExplorerNode::entry(
                parent,
                &entry.name,
                entry.is_directory,
                entry.is_hidden,
            )
        })
        .collect()
}

/// Merge a fresh listing into the children already shown for a node.
///
/// Existing entries still present keep their order and subtree, new ids are
/// appended, placeholders and vanished ids are dropped.
pub(crate) fn merge_children(
    existing: Vec<ExplorerNode>,
    fetched: Vec<ExplorerNode>,
) -> Vec<ExplorerNode> {
    let has_entries = existing.iter().any(|node| !node.is_placeholder());
    if !has_entries {
        return fetched;
    }

    let mut merged: Vec<ExplorerNode> = existing
        .into_iter()
        .filter(|node| {
            !node.is_placeholder()
                && fetched.iter().any(|fresh| fresh.id == node.id)
        })
        .collect();

    for node in fetched {
        if !merged.iter().any(|kept| kept.id == node.id) {
            merged.push(node);
        }
    }

    merged
}

/// Deep copy of `nodes` without entries rejected by `filter`.
///
/// Placeholders are always kept.
pub(crate) fn filtered_nodes(
    nodes: &[ExplorerNode],
    filter: ViewFilter,
) -> Vec<ExplorerNode> {
    nodes
        .iter()
        .filter(|node| {
            node.is_placeholder()
                || filter.admits(node.is_directory(), node.is_hidden)
        })
        .map(|node| {
            let mut copy = node.clone();
            if let NodeChildren::Expanded(children) = &node.children {
                copy.children =
                    NodeChildren::Expanded(filtered_nodes(children, filter));
            }
            copy
        })
        .collect()
}

/// Scroll viewport reported by the tree scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollViewport {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// Absolute scroll position requested for the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollOffset {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

/// Read-only view model for the explorer panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExplorerTreeViewModel<'a> {
    pub(crate) nodes: &'a [ExplorerNode],
    pub(crate) selected: Option<&'a str>,
    pub(crate) hovered: Option<&'a str>,
}
