use iced::widget::{Stack, column, container, mouse_area, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::style::bar_style;
use crate::theme::ThemeProps;
use crate::widgets::chrome::view::header::{self, HeaderProps};
use crate::widgets::explorer::view::sidebar_tree::{self, SidebarTreeProps};
use crate::widgets::listing::ListingEvent;
use crate::widgets::listing::view::{
    context_menu, delete_confirm, name_prompt, table, toolbar,
};
use crate::widgets::upload::view::{collision_dialog, upload_modal};
use crate::widgets::viewer::view::preview_modal;

const SEPARATOR_WIDTH: f32 = 1.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let chrome_vm = app.widgets.chrome.vm();

    let header = header::view(HeaderProps {
        vm: chrome_vm,
        base_url: app.client.base_url(),
        theme: theme_props,
    })
    .map(AppEvent::ChromeUi);

    let listing = view_listing(app, theme_props, chrome_vm.drawer_open);
    let body: Element<'_, AppEvent> = if chrome_vm.drawer_open {
        let tree = sidebar_tree::view(SidebarTreeProps {
            vm: app.widgets.explorer.tree_vm(),
            theme: theme_props,
        })
        .map(AppEvent::ExplorerUi);
        let separator = container(iced::widget::Space::new())
            .width(Length::Fixed(SEPARATOR_WIDTH))
            .height(Length::Fill)
            .style(bar_style(theme.iced_palette()));
        row![tree, separator, listing].height(Length::Fill).into()
    } else {
        listing
    };

    let content = column![header, body]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, AppEvent>> = vec![content.into()];
    layers.extend(view_modals(app, theme_props));

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Toolbar and table, with the context menu stacked above them.
fn view_listing<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
    drawer_open: bool,
) -> Element<'a, AppEvent> {
    let widget = &app.widgets.listing;

    let region = column![
        toolbar::view(toolbar::ToolbarProps {
            vm: widget.vm(),
            theme,
        }),
        table::view(table::TableProps {
            vm: widget.vm(),
            theme,
        }),
    ]
    .width(Length::Fill)
    .height(Length::Fill);
    let region: Element<'a, ListingEvent> = mouse_area(region)
        .on_move(|position| ListingEvent::CursorMoved { position })
        .into();

    let mut layers = vec![region.map(AppEvent::ListingUi)];
    if let Some(menu) = widget.context_menu() {
        let overlay = context_menu::view(context_menu::ContextMenuProps {
            menu,
            selected_count: widget.selected_count(),
            theme,
            area_size: app.state.listing_area_size(drawer_open),
        });
        layers.push(overlay.map(AppEvent::ListingUi));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Modal dialogs, bottom to top.
fn view_modals<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Vec<Element<'a, AppEvent>> {
    let mut layers = Vec::new();
    let listing = &app.widgets.listing;

    if let Some(prompt) = listing.prompt() {
        layers.push(
            name_prompt::view(name_prompt::NamePromptProps { prompt, theme })
                .map(AppEvent::ListingUi),
        );
    }
    if let Some(confirm) = listing.delete_confirm() {
        layers.push(
            delete_confirm::view(delete_confirm::DeleteConfirmProps {
                confirm,
                theme,
            })
            .map(AppEvent::ListingUi),
        );
    }
    if let Some(vm) = app.widgets.viewer.vm() {
        layers.push(
            preview_modal::view(preview_modal::PreviewModalProps { vm, theme })
                .map(AppEvent::ViewerUi),
        );
    }
    if let Some(vm) = app.widgets.upload.vm() {
        layers.push(
            upload_modal::view(upload_modal::UploadModalProps { vm, theme })
                .map(AppEvent::UploadUi),
        );
    }
    if let Some(prompt) = app.widgets.upload.collision() {
        layers.push(
            collision_dialog::view(collision_dialog::CollisionDialogProps {
                prompt,
                theme,
            })
            .map(AppEvent::UploadUi),
        );
    }

    layers
}
