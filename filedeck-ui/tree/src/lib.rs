//! Tree data helpers and a lightweight [`iced`] tree widget.
//!
//! This crate is split into two layers:
//! - model helpers ([`TreeNode`], [`flatten_tree`], [`row_index`]) that are
//!   UI-agnostic;
//! - view helpers ([`TreeView`], [`TreeRowContext`]) that render rows in
//!   `iced`.
//!
//! Rows are keyed by [`TreeNode::id`], which must be unique across the tree
//! (FileDeck uses full `/`-joined paths). Store the selected and hovered ids
//! in your state, feed them into [`TreeView::selected`] and
//! [`TreeView::hovered`], and update them from [`TreeView::on_press`] and
//! [`TreeView::on_hover`].
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::{container, text};
//! use iced::{Element, Length};
//! use filedeck_ui_tree::{TreeNode, TreeView};
//!
//! struct Node {
//!     path: String,
//!     children: Option<Vec<Node>>,
//! }
//!
//! impl TreeNode for Node {
//!     fn id(&self) -> &str {
//!         &self.path
//!     }
//!
//!     fn title(&self) -> &str {
//!         self.path.rsplit('/').next().unwrap_or(&self.path)
//!     }
//!
//!     fn children(&self) -> Option<&[Self]> {
//!         self.children.as_deref()
//!     }
//!
//!     fn expanded(&self) -> bool {
//!         true
//!     }
//!
//!     fn is_folder(&self) -> bool {
//!         self.children.is_some()
//!     }
//! }
//!
//! #[derive(Clone)]
//! enum Message {
//!     Pressed(String),
//! }
//!
//! fn view<'a>(
//!     nodes: &'a [Node],
//!     selected: Option<&'a str>,
//! ) -> Element<'a, Message> {
//!     TreeView::new(nodes, |ctx| {
//!         container(text(ctx.entry.node.title()))
//!             .width(Length::Fill)
//!             .into()
//!     })
//!     .selected(selected)
//!     .on_press(Message::Pressed)
//!     .view()
//! }
//! ```

mod model;
mod view;

pub use model::{FlattenedNode, TreeNode, flatten_tree, row_index};
pub use view::{TreeRow, TreeRowContext, TreeView};
