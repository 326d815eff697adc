use filedeck_client::paths::parent_path;
use filedeck_ui_tree::{flatten_tree, row_index};

use super::model::{
    CHROME_ALLOWANCE, ERROR_SEGMENT, ExplorerNode, INDENT_WIDTH, NodeChildren,
    NodeRole, ROOT_ID, ROW_HEIGHT, ScrollOffset, ScrollViewport, TOGGLE_WIDTH,
    filtered_nodes, merge_children,
};
use crate::filter::ViewFilter;

/// Runtime state for the explorer tree panel.
#[derive(Debug)]
pub(crate) struct ExplorerState {
    nodes: Vec<ExplorerNode>,
    visible: Vec<ExplorerNode>,
    selected: Option<String>,
    hovered: Option<String>,
    revision: u64,
    viewport: Option<ScrollViewport>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        let nodes = vec![ExplorerNode::root_placeholder()];
        Self {
            visible: nodes.clone(),
            nodes,
            selected: None,
            hovered: None,
            revision: 0,
            viewport: None,
        }
    }
}

impl ExplorerState {
    // --- Read access ---

    /// Stored tree, unfiltered.
    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[ExplorerNode] {
        &self.nodes
    }

    /// Filtered tree as last rebuilt by [`Self::refresh_visible`].
    pub(crate) fn visible_nodes(&self) -> &[ExplorerNode] {
        &self.visible
    }

    pub(crate) fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Counter bumped by every tree mutation.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn find(&self, id: &str) -> Option<&ExplorerNode> {
        find_node(&self.nodes, id)
    }

    // --- Write access ---

    pub(super) fn set_hovered(&mut self, id: Option<String>) {
        self.hovered = id;
    }

    pub(super) fn set_viewport(&mut self, viewport: ScrollViewport) {
        self.viewport = Some(viewport);
    }

    /// Rebuild the filtered copy used by the view.
    pub(super) fn refresh_visible(&mut self, filter: ViewFilter) {
        self.visible = filtered_nodes(&self.nodes, filter);
    }

    /// Put the root sentinel back into the loading role.
    pub(super) fn begin_root_load(&mut self) {
        let root = self.nodes.iter_mut().find(|node| node.id == ROOT_ID);
        if let Some(root) = root {
            root.role = NodeRole::Loading;
            self.bump();
        }
    }

    /// Apply the top-level listing.
    pub(super) fn apply_root(&mut self, fetched: Vec<ExplorerNode>) {
        let existing = std::mem::take(&mut self.nodes);
        self.nodes = merge_children(existing, fetched);
        self.bump();
    }

    /// Mark the root sentinel failed; loaded entries are kept.
    ///
    /// Returns `false` when no sentinel is shown.
    pub(super) fn fail_root(&mut self) -> bool {
        let Some(root) =
            self.nodes.iter_mut().find(|node| node.id == ROOT_ID)
        else {
            return false;
        };
        root.role = NodeRole::LoadFailed;
        self.bump();
        true
    }

    /// Expand a directory, inserting a loading placeholder when it has no
    /// entries yet.
    ///
    /// Returns `false` for unknown ids and non-directories.
    pub(super) fn expand(&mut self, id: &str) -> bool {
        let Some(node) = find_node_mut(&mut self.nodes, id) else {
            return false;
        };
        if !node.is_directory() {
            return false;
        }

        let mut children = match std::mem::replace(
            &mut node.children,
            NodeChildren::Unexpanded,
        ) {
            NodeChildren::Expanded(children) => children,
            NodeChildren::Leaf | NodeChildren::Unexpanded => Vec::new(),
        };
        children.retain(|child| !child.is_placeholder());
        if children.is_empty() {
            children.push(ExplorerNode::loading(id));
        }

        node.children = NodeChildren::Expanded(children);
        node.expanded = true;
        self.bump();
        true
    }

    /// Collapse a directory, keeping its loaded children.
    pub(super) fn collapse(&mut self, id: &str) -> bool {
        let Some(node) = find_node_mut(&mut self.nodes, id) else {
            return false;
        };
        if !node.expanded {
            return false;
        }
        node.expanded = false;
        self.bump();
        true
    }

    /// Merge a folder listing into the node with `id`.
    pub(super) fn apply_children(
        &mut self,
        id: &str,
        fetched: Vec<ExplorerNode>,
    ) -> bool {
        let Some(node) = find_node_mut(&mut self.nodes, id) else {
            return false;
        };
        if !node.is_directory() {
            return false;
        }

        let existing = match std::mem::replace(
            &mut node.children,
            NodeChildren::Unexpanded,
        ) {
            NodeChildren::Expanded(children) => children,
            NodeChildren::Leaf | NodeChildren::Unexpanded => Vec::new(),
        };
        node.children =
            NodeChildren::Expanded(merge_children(existing, fetched));
        self.bump();
        true
    }

    /// Replace any placeholder under `id` with a single error child.
    pub(super) fn fail_children(&mut self, id: &str) -> bool {
        let Some(node) = find_node_mut(&mut self.nodes, id) else {
            return false;
        };
        if !node.is_directory() {
            return false;
        }

        let mut children = match std::mem::replace(
            &mut node.children,
            NodeChildren::Unexpanded,
        ) {
            NodeChildren::Expanded(children) => children,
            NodeChildren::Leaf | NodeChildren::Unexpanded => Vec::new(),
        };
        children.retain(|child| !child.is_placeholder());
        children.push(ExplorerNode::failed(id));
        node.children = NodeChildren::Expanded(children);
        self.bump();
        true
    }

    /// Record `id` as the sole selection and return the path to navigate to.
    pub(super) fn select(&mut self, id: &str) -> Option<String> {
        let node = find_node(&self.nodes, id)?;
        if node.is_placeholder() {
            return None;
        }

        let target = if node.is_directory() {
            node.id.clone()
        } else {
            parent_path(&node.id).unwrap_or("").to_string()
        };

        self.selected = Some(id.to_string());
        Some(target)
    }

    /// Scroll offset that brings `id` and its children into view.
    pub(crate) fn scroll_target(&self, id: &str) -> Option<ScrollOffset> {
        let viewport = self.viewport?;
        let rows = flatten_tree(&self.visible);
        let index = row_index(&rows, id)?;
        let node = rows[index].node;

        let children: &[ExplorerNode] = if node.expanded {
            node.child_nodes()
        } else {
            &[]
        };

        let anchor = children.first().map_or(id, |child| child.id.as_str());
        let anchor_index = row_index(&rows, anchor)?;
        let y = anchor_index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0
            - viewport.height / 2.0;

        let widest = children
            .iter()
            .max_by_key(|child| child.id.len())
            .map_or(id, |child| child.id.as_str());
        let depth = row_index(&rows, widest).map(|i| rows[i].depth)?;
        let x = depth as f32 * INDENT_WIDTH + TOGGLE_WIDTH - CHROME_ALLOWANCE;

        Some(ScrollOffset {
            x: x.max(0.0),
            y: y.max(0.0),
        })
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

/// Id of the directory owning an error placeholder.
pub(crate) fn error_owner(id: &str) -> Option<&str> {
    id.strip_suffix(ERROR_SEGMENT)
        .and_then(|prefix| prefix.strip_suffix('/'))
}

fn find_node<'a>(
    nodes: &'a [ExplorerNode],
    id: &str,
) -> Option<&'a ExplorerNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if is_descendant(id, &node.id) {
            return find_node(node.child_nodes(), id);
        }
    }
    None
}

fn find_node_mut<'a>(
    nodes: &'a mut [ExplorerNode],
    id: &str,
) -> Option<&'a mut ExplorerNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if is_descendant(id, &node.id) {
            return match &mut node.children {
                NodeChildren::Expanded(children) => find_node_mut(children, id),
                NodeChildren::Leaf | NodeChildren::Unexpanded => None,
            };
        }
    }
    None
}

fn is_descendant(id: &str, ancestor: &str) -> bool {
    id.len() > ancestor.len()
        && id.starts_with(ancestor)
        && id.as_bytes()[ancestor.len()] == b'/'
}
