use filedeck_ui_tree::{TreeNode, TreeRowContext, TreeView};
use iced::widget::{container, row, text};
use iced::{Element, Length, alignment};

use crate::style::badge_style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::viewer::event::ViewerEvent;
use crate::widgets::viewer::model::ZipTreeNode;

const FONT_SIZE: f32 = 13.0;
const ROW_HEIGHT: f32 = 22.0;
const INDENT_WIDTH: f32 = 16.0;
const ICON_WIDTH: f32 = 16.0;

/// Props for the archive viewer.
#[derive(Debug, Clone)]
pub(crate) struct ZipPreviewProps<'a> {
    pub(crate) nodes: &'a [ZipTreeNode],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the archive members as a fully expanded, inert tree.
pub(crate) fn view<'a>(props: ZipPreviewProps<'a>) -> Element<'a, ViewerEvent> {
    let palette = props.theme.theme.iced_palette();

    if props.nodes.is_empty() {
        return container(text("Empty").size(FONT_SIZE))
            .padding([1.0, 6.0])
            .style(badge_style(palette, palette.dim_foreground))
            .into();
    }

    TreeView::new(props.nodes, move |ctx| member_row(ctx, palette))
        .row_interactive(|_| false)
        .indent_width(INDENT_WIDTH)
        .view()
}

fn member_row<'a>(
    ctx: &TreeRowContext<'a, ZipTreeNode>,
    palette: &'a IcedColorPalette,
) -> Element<'a, ViewerEvent> {
    let node = ctx.entry.node;
    let (icon, color) = if node.is_folder() {
        ("■", palette.yellow)
    } else {
        ("□", palette.dim_foreground)
    };

    row![
        container(text(icon).size(FONT_SIZE).color(color))
            .width(Length::Fixed(ICON_WIDTH)),
        text(node.title()).size(FONT_SIZE),
    ]
    .spacing(6.0)
    .height(Length::Fixed(ROW_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .into()
}
