/// Trait implemented by tree node types consumable by this crate.
pub trait TreeNode {
    /// Identifier unique across the whole tree.
    fn id(&self) -> &str;
    /// Label rendered for the node.
    fn title(&self) -> &str;
    /// Children for the node (folders only).
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;
    /// Whether the node is expanded (folders only).
    fn expanded(&self) -> bool;
    /// Whether this node is a folder.
    fn is_folder(&self) -> bool;
}

/// Flattened representation of a visible tree node.
pub struct FlattenedNode<'a, T: TreeNode> {
    /// Zero-based tree depth (`0` for root-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a T,
}

/// Flatten a tree into a depth-first list of visible rows.
///
/// Sibling order is preserved as stored. Children are included only when
/// `node.is_folder() && node.expanded()`.
pub fn flatten_tree<'a, T: TreeNode>(
    nodes: &'a [T],
) -> Vec<FlattenedNode<'a, T>> {
    let mut entries = Vec::new();
    for node in nodes {
        push_node(node, 0, &mut entries);
    }
    entries
}

fn push_node<'a, T: TreeNode>(
    node: &'a T,
    depth: usize,
    entries: &mut Vec<FlattenedNode<'a, T>>,
) {
    entries.push(FlattenedNode { depth, node });

    if node.is_folder() && node.expanded() {
        if let Some(children) = node.children() {
            for child in children {
                push_node(child, depth + 1, entries);
            }
        }
    }
}

/// Position of the row with `id` among the visible rows.
pub fn row_index<T: TreeNode>(
    rows: &[FlattenedNode<'_, T>],
    id: &str,
) -> Option<usize> {
    rows.iter().position(|row| row.node.id() == id)
}
