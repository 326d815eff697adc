use filedeck_ui_tree::{TreeNode, TreeRowContext, TreeView};
use iced::widget::scrollable::Viewport;
use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Length, alignment};

use crate::style::{row_style, thin_scroll_style};
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::explorer::event::ExplorerEvent;
use crate::widgets::explorer::model::{
    ExplorerNode, ExplorerTreeViewModel, INDENT_WIDTH, NodeRole, ROW_HEIGHT,
    ScrollViewport, TOGGLE_WIDTH,
};

/// Scrollable id used to scroll the tree programmatically.
pub(crate) const TREE_SCROLL_ID: &str = "explorer_tree_scroll";

const HEADER_HEIGHT: f32 = 22.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_FONT_SIZE: f32 = 12.0;

const TREE_FONT_SIZE: f32 = 12.0;
const TREE_ICON_WIDTH: f32 = 16.0;
const TREE_ROW_PADDING_X: f32 = 6.0;
const TREE_ROW_SPACING: f32 = 6.0;
pub(crate) const PANEL_WIDTH: f32 = 260.0;

/// Props for the explorer sidebar tree view.
#[derive(Debug, Clone)]
pub(crate) struct SidebarTreeProps<'a> {
    pub(crate) vm: ExplorerTreeViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the explorer panel (header + tree).
pub(crate) fn view(props: SidebarTreeProps<'_>) -> Element<'_, ExplorerEvent> {
    let palette = props.theme.theme.iced_palette();

    let header = container(
        text("FOLDERS")
            .size(HEADER_FONT_SIZE)
            .wrapping(Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, HEADER_PADDING_X])
    .align_y(alignment::Vertical::Center);

    let tree = TreeView::new(props.vm.nodes, move |ctx| {
        render_row(ctx, palette)
    })
    .selected(props.vm.selected)
    .hovered(props.vm.hovered)
    .on_press(|id| ExplorerEvent::NodePressed { id })
    .on_hover(|id| ExplorerEvent::NodeHovered { id })
    .on_toggle_folder(|id| ExplorerEvent::ToggleFolder { id })
    .row_style(move |ctx| row_style(palette, ctx.is_selected, ctx.is_hovered))
    .toggle_content(move |ctx| chevron(ctx, palette))
    .row_interactive(|ctx| ctx.entry.node.role != NodeRole::Loading)
    .indent_width(INDENT_WIDTH)
    .toggle_width(TOGGLE_WIDTH)
    .view();

    let scroll = scrollable(tree)
        .id(TREE_SCROLL_ID)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
            horizontal: scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        })
        .on_scroll(viewport_changed)
        .style(thin_scroll_style(palette.clone()));

    container(column![header, scroll])
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .into()
}

fn viewport_changed(viewport: Viewport) -> ExplorerEvent {
    let bounds = viewport.bounds();
    ExplorerEvent::ViewportChanged {
        viewport: ScrollViewport {
            width: bounds.width,
            height: bounds.height,
        },
    }
}

fn render_row<'a>(
    ctx: &TreeRowContext<'a, ExplorerNode>,
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent> {
    let node = ctx.entry.node;
    let (icon, color) = match node.role {
        NodeRole::Loading => ("…", palette.dim_foreground),
        NodeRole::LoadFailed => ("!", palette.red),
        NodeRole::Entry if node.is_folder() => ("■", palette.yellow),
        NodeRole::Entry => ("□", palette.dim_foreground),
    };

    let icon = container(text(icon).size(TREE_FONT_SIZE).color(color))
        .width(Length::Fixed(TREE_ICON_WIDTH))
        .align_x(alignment::Horizontal::Center);

    let label_color = if node.is_placeholder() {
        color
    } else {
        palette.foreground
    };
    let label = text(node.title())
        .size(TREE_FONT_SIZE)
        .color(label_color)
        .wrapping(Wrapping::None);

    container(
        row![icon, label]
            .spacing(TREE_ROW_SPACING)
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(ROW_HEIGHT))
    .padding([0.0, TREE_ROW_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .into()
}

fn chevron<'a>(
    ctx: &TreeRowContext<'a, ExplorerNode>,
    palette: &'a IcedColorPalette,
) -> Element<'a, ExplorerEvent> {
    let glyph = match (ctx.entry.node.is_folder(), ctx.entry.node.expanded) {
        (true, true) => "▾",
        (true, false) => "▸",
        (false, _) => "",
    };

    text(glyph)
        .size(TREE_FONT_SIZE)
        .color(palette.dim_foreground)
        .into()
}
