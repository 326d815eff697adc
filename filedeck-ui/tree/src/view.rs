use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::model::{FlattenedNode, TreeNode, flatten_tree};

/// Flattened tree row used by [`TreeView`] render callbacks.
pub type TreeRow<'a, T> = FlattenedNode<'a, T>;

/// Rendering context passed to row callbacks.
pub struct TreeRowContext<'a, T: TreeNode> {
    pub entry: TreeRow<'a, T>,
    pub is_selected: bool,
    pub is_hovered: bool,
}

type RowRenderer<'a, T, Message> =
    dyn Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowStyle<'a, T> = dyn Fn(&TreeRowContext<'a, T>) -> container::Style + 'a;
type ToggleContent<'a, T, Message> =
    dyn Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowAction<'a, Message> = dyn Fn(String) -> Message + 'a;
type HoverAction<'a, Message> = dyn Fn(Option<String>) -> Message + 'a;
type RowPredicate<'a, T> = dyn Fn(&TreeRowContext<'a, T>) -> bool + 'a;

/// Lightweight tree view helper that wires selection to row rendering.
///
/// Rows are identified by [`TreeNode::id`]; callbacks receive owned ids.
pub struct TreeView<'a, T: TreeNode, Message: Clone + 'a> {
    nodes: &'a [T],
    selected: Option<&'a str>,
    hovered: Option<&'a str>,
    on_press: Option<Box<RowAction<'a, Message>>>,
    on_double_click: Option<Box<RowAction<'a, Message>>>,
    on_hover: Option<Box<HoverAction<'a, Message>>>,
    on_toggle_folder: Option<Box<RowAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, T, Message>>,
    row_style: Option<Box<RowStyle<'a, T>>>,
    toggle_content: Option<Box<ToggleContent<'a, T, Message>>>,
    row_interactive: Option<Box<RowPredicate<'a, T>>>,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a, T, Message> TreeView<'a, T, Message>
where
    T: TreeNode + 'a,
    Message: Clone + 'a,
{
    /// Create a tree view that renders each row using `render_row`.
    pub fn new(
        nodes: &'a [T],
        render_row: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        Self {
            nodes,
            selected: None,
            hovered: None,
            on_press: None,
            on_double_click: None,
            on_hover: None,
            on_toggle_folder: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            row_interactive: None,
            spacing: 0.0,
            indent_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Provide the currently selected id to inform row rendering.
    pub fn selected(mut self, id: Option<&'a str>) -> Self {
        self.selected = id;
        self
    }

    /// Provide the currently hovered id to inform row rendering.
    pub fn hovered(mut self, id: Option<&'a str>) -> Self {
        self.hovered = id;
        self
    }

    /// Emit a message when a row receives a left press.
    pub fn on_press(
        mut self,
        on_press: impl Fn(String) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Emit a message when a row is double clicked.
    pub fn on_double_click(
        mut self,
        on_double_click: impl Fn(String) -> Message + 'a,
    ) -> Self {
        self.on_double_click = Some(Box::new(on_double_click));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<String>) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Emit a message when a folder toggle is clicked.
    pub fn on_toggle_folder(
        mut self,
        on_toggle: impl Fn(String) -> Message + 'a,
    ) -> Self {
        self.on_toggle_folder = Some(Box::new(on_toggle));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&TreeRowContext<'a, T>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content to render inside the toggle area.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Control whether a row receives mouse interaction handlers.
    pub fn row_interactive(
        mut self,
        row_interactive: impl Fn(&TreeRowContext<'a, T>) -> bool + 'a,
    ) -> Self {
        self.row_interactive = Some(Box::new(row_interactive));
        self
    }

    /// Set indentation width per tree depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle area.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the tree view.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for entry in flatten_tree(self.nodes) {
            let id = entry.node.id().to_string();
            let is_selected = self.selected == Some(id.as_str());
            let is_hovered = self.hovered == Some(id.as_str());
            let context = TreeRowContext {
                entry,
                is_selected,
                is_hovered,
            };

            let is_interactive = self
                .row_interactive
                .as_ref()
                .map(|predicate| predicate(&context))
                .unwrap_or(true);

            let content = (self.render_row)(&context);
            let content = if is_interactive {
                RowHandlers {
                    on_press: self.on_press.as_deref(),
                    on_double_click: self.on_double_click.as_deref(),
                    on_hover: self.on_hover.as_deref(),
                }
                .wrap(content, &id)
            } else {
                content
            };

            let mut row = Row::new()
                .spacing(0.0)
                .align_y(alignment::Vertical::Center);

            let indent = context.entry.depth as f32 * self.indent_width;
            if indent > 0.0 {
                row = row.push(Space::new().width(Length::Fixed(indent)));
            }

            if self.toggle_width > 0.0 || self.toggle_content.is_some() {
                row = row.push(self.toggle_slot(&context, &id, is_interactive));
            }

            row = row.push(content);

            let mut row_element: Element<'a, Message> = row.into();

            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                row_element =
                    container(row_element).style(move |_| style).into();
            }

            column = column.push(row_element);
        }

        column.into()
    }

    fn toggle_slot(
        &self,
        context: &TreeRowContext<'a, T>,
        id: &str,
        is_interactive: bool,
    ) -> Element<'a, Message> {
        let content = self
            .toggle_content
            .as_ref()
            .map(|toggle| toggle(context))
            .unwrap_or_else(|| Space::new().into());

        let content: Element<'a, Message> = container(content)
            .width(Length::Fixed(self.toggle_width))
            .align_x(alignment::Horizontal::Center)
            .into();

        if !is_interactive || !context.entry.node.is_folder() {
            return content;
        }

        match self.on_toggle_folder.as_deref() {
            Some(on_toggle) => RowHandlers {
                on_press: Some(on_toggle),
                on_double_click: None,
                on_hover: self.on_hover.as_deref(),
            }
            .wrap(content, id),
            None => content,
        }
    }
}

struct RowHandlers<'h, 'a, Message> {
    on_press: Option<&'h RowAction<'a, Message>>,
    on_double_click: Option<&'h RowAction<'a, Message>>,
    on_hover: Option<&'h HoverAction<'a, Message>>,
}

impl<'a, Message: Clone + 'a> RowHandlers<'_, 'a, Message> {
    fn wrap(
        &self,
        element: Element<'a, Message>,
        id: &str,
    ) -> Element<'a, Message> {
        if self.on_press.is_none()
            && self.on_double_click.is_none()
            && self.on_hover.is_none()
        {
            return element;
        }

        let mut area = mouse_area(element);

        if let Some(on_press) = self.on_press {
            area = area.on_press(on_press(id.to_string()));
        }

        if let Some(on_double_click) = self.on_double_click {
            area = area.on_double_click(on_double_click(id.to_string()));
        }

        if let Some(on_hover) = self.on_hover {
            area = area
                .on_enter(on_hover(Some(id.to_string())))
                .on_exit(on_hover(None));
        }

        area.interaction(mouse::Interaction::Pointer).into()
    }
}
