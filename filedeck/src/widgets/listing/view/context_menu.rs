use iced::widget::{Space, Stack, column, container, mouse_area};
use iced::{Element, Length, Padding, Size};

use crate::components::primitive::menu_item::{self, MENU_ITEM_HEIGHT};
use crate::geometry::{anchor_position, menu_height_for_items};
use crate::style::menu_panel_style;
use crate::theme::ThemeProps;
use crate::widgets::listing::event::ListingEvent;
use crate::widgets::listing::model::{
    ContextMenuState, ListingAction, available_actions,
};

const MENU_WIDTH: f32 = 220.0;
const MENU_MARGIN: f32 = 6.0;
const MENU_CONTAINER_PADDING: f32 = 6.0;

/// Props for the listing context menu overlay.
#[derive(Debug, Clone)]
pub(crate) struct ContextMenuProps<'a> {
    pub(crate) menu: &'a ContextMenuState,
    pub(crate) selected_count: usize,
    pub(crate) theme: ThemeProps<'a>,
    /// Size of the region the cursor position is relative to.
    pub(crate) area_size: Size,
}

/// Render the menu over a full-size layer that dismisses it on any click.
pub(crate) fn view<'a>(
    props: ContextMenuProps<'a>,
) -> Element<'a, ListingEvent> {
    let actions = available_actions(props.selected_count);
    let menu_height = menu_height_for_items(
        actions.len(),
        MENU_ITEM_HEIGHT,
        MENU_CONTAINER_PADDING * 2.0,
    );
    let anchor = anchor_position(
        props.menu.cursor,
        props.area_size,
        MENU_WIDTH,
        menu_height,
        MENU_MARGIN,
    );

    let items = actions
        .into_iter()
        .map(|action| item(action, props.selected_count, props.theme));

    let panel = container(column(items).spacing(0))
        .width(Length::Fixed(MENU_WIDTH))
        .padding(MENU_CONTAINER_PADDING)
        .style(menu_panel_style(props.theme));

    let positioned = container(panel).padding(Padding {
        top: anchor.y,
        right: 0.0,
        bottom: 0.0,
        left: anchor.x,
    });

    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ListingEvent::ContextMenuDismiss)
    .on_right_press(ListingEvent::ContextMenuDismiss);

    Stack::with_children(vec![dismiss_layer.into(), positioned.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn item<'a>(
    action: ListingAction,
    selected: usize,
    theme: ThemeProps<'a>,
) -> Element<'a, ListingEvent> {
    menu_item::view(menu_item::MenuItemProps {
        label: action.label(selected),
        theme,
    })
    .map(move |_| ListingEvent::Action(action))
}
