use iced::widget::text::Wrapping;
use iced::widget::{
    Column, column, container, mouse_area, row, scrollable, text,
};
use iced::{Element, Length, alignment, mouse};

use crate::style::{bar_style, row_style, thin_scroll_style};
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::listing::event::ListingEvent;
use crate::widgets::listing::model::{DirectoryEntry, ListingViewModel};

const ROW_HEIGHT: f32 = 26.0;
const HEADER_HEIGHT: f32 = 24.0;
const ROW_PADDING_X: f32 = 10.0;
const ROW_SPACING: f32 = 8.0;
const ICON_WIDTH: f32 = 16.0;
const SIZE_COLUMN_WIDTH: f32 = 110.0;
const FONT_SIZE: f32 = 13.0;
const HEADER_FONT_SIZE: f32 = 12.0;

/// Props for the directory listing table.
#[derive(Debug, Clone)]
pub(crate) struct TableProps<'a> {
    pub(crate) vm: ListingViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the column header and the entry rows.
pub(crate) fn view<'a>(props: TableProps<'a>) -> Element<'a, ListingEvent> {
    let palette = props.theme.theme.iced_palette();

    let header = container(
        row![
            container(text("")).width(Length::Fixed(ICON_WIDTH)),
            text("Name").size(HEADER_FONT_SIZE).width(Length::Fill),
            text("Size")
                .size(HEADER_FONT_SIZE)
                .width(Length::Fixed(SIZE_COLUMN_WIDTH))
                .align_x(alignment::Horizontal::Right),
        ]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding([0.0, ROW_PADDING_X])
    .align_y(alignment::Vertical::Center)
    .style(bar_style(palette));

    let body: Element<'a, ListingEvent> = if props.vm.loading {
        status_line("Loading...", palette.dim_foreground)
    } else if props.vm.error {
        status_line("Error on loading data", palette.red)
    } else if props.vm.entries.is_empty() {
        status_line("Empty directory", palette.dim_foreground)
    } else {
        let hovered = props.vm.hovered;
        let rows = props
            .vm
            .entries
            .iter()
            .map(|entry| entry_row(*entry, hovered, palette));
        scrollable(Column::with_children(rows).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(thin_scroll_style(palette.clone()))
            .into()
    };

    let surface = mouse_area(
        container(body).width(Length::Fill).height(Length::Fill),
    )
    .on_right_press(ListingEvent::SurfaceRightClicked);

    column![header, surface]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_line<'a>(
    label: &'a str,
    color: iced::Color,
) -> Element<'a, ListingEvent> {
    container(text(label).size(FONT_SIZE).color(color))
        .width(Length::Fill)
        .padding([8.0, ROW_PADDING_X])
        .into()
}

fn entry_row<'a>(
    entry: &'a DirectoryEntry,
    hovered: Option<&'a str>,
    palette: &'a IcedColorPalette,
) -> Element<'a, ListingEvent> {
    let is_selected = entry.is_selected;
    let is_hovered = hovered == Some(entry.path.as_str());

    let (icon, icon_color) = if entry.is_parent_link {
        ("↰", palette.dim_foreground)
    } else if entry.is_directory {
        ("■", palette.yellow)
    } else {
        ("□", palette.dim_foreground)
    };

    let name_color = if entry.is_hidden {
        palette.dim_foreground
    } else {
        palette.foreground
    };

    let content = row![
        container(text(icon).size(FONT_SIZE).color(icon_color))
            .width(Length::Fixed(ICON_WIDTH))
            .align_x(alignment::Horizontal::Center),
        text(entry.name.as_str())
            .size(FONT_SIZE)
            .color(name_color)
            .wrapping(Wrapping::None)
            .width(Length::Fill),
        text(entry.size_label())
            .size(FONT_SIZE)
            .color(palette.dim_foreground)
            .width(Length::Fixed(SIZE_COLUMN_WIDTH))
            .align_x(alignment::Horizontal::Right),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    let body = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| row_style(palette, is_selected, is_hovered));

    let path = entry.path.as_str();
    mouse_area(body)
        .on_press(ListingEvent::RowPressed {
            path: path.to_string(),
        })
        .on_double_click(ListingEvent::RowDoubleClicked {
            path: path.to_string(),
        })
        .on_right_press(ListingEvent::RowRightClicked {
            path: path.to_string(),
        })
        .on_enter(ListingEvent::RowHovered {
            path: Some(path.to_string()),
        })
        .on_exit(ListingEvent::RowHovered { path: None })
        .interaction(mouse::Interaction::Pointer)
        .into()
}
