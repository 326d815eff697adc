use crate::app::AppEvent;

/// Determines how the event loop should treat an incoming event when the
/// listing context menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event without closing the menu.
    Ignore,
    /// Close the context menu before dispatching.
    Dismiss,
}

/// Classify an incoming event while the context menu is open.
pub(crate) fn context_menu_guard(event: &AppEvent) -> MenuGuard {
    use MenuGuard::*;

    match event {
        AppEvent::ListingUi(event) => {
            use crate::widgets::listing::ListingEvent as E;
            match event {
                E::ContextMenuDismiss
                | E::Action(_)
                | E::CursorMoved { .. }
                | E::RowHovered { .. } => Allow,
                E::Loaded { .. }
                | E::LoadFailed { .. }
                | E::MutationFinished { .. }
                | E::DownloadFinished { .. } => Allow,
                E::RowRightClicked { .. } | E::SurfaceRightClicked => Ignore,
                _ => Dismiss,
            }
        },
        AppEvent::ExplorerUi(event) => {
            use crate::widgets::explorer::ExplorerEvent as E;
            match event {
                E::NodePressed { .. } | E::ToggleFolder { .. } => Dismiss,
                _ => Allow,
            }
        },
        AppEvent::ChromeUi(_) => Dismiss,
        AppEvent::ListingEffect(_)
        | AppEvent::ExplorerEffect(_)
        | AppEvent::ChromeEffect(_)
        | AppEvent::ViewerUi(_)
        | AppEvent::ViewerEffect(_)
        | AppEvent::UploadUi(_)
        | AppEvent::UploadEffect(_) => Allow,
        AppEvent::IcedReady
        | AppEvent::SettingsPersisted(_)
        | AppEvent::Keyboard(_)
        | AppEvent::Window(_) => Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuGuard, context_menu_guard};
    use crate::app::AppEvent;
    use crate::widgets::chrome::ChromeEvent;
    use crate::widgets::explorer::ExplorerEvent;
    use crate::widgets::listing::ListingEvent;
    use crate::widgets::listing::model::ListingAction;

    #[test]
    fn given_menu_action_when_guarded_then_it_is_allowed() {
        let event =
            AppEvent::ListingUi(ListingEvent::Action(ListingAction::Delete));

        assert_eq!(context_menu_guard(&event), MenuGuard::Allow);
    }

    #[test]
    fn given_repeated_right_click_when_guarded_then_it_is_ignored() {
        let event = AppEvent::ListingUi(ListingEvent::SurfaceRightClicked);

        assert_eq!(context_menu_guard(&event), MenuGuard::Ignore);
    }

    #[test]
    fn given_tree_click_when_guarded_then_menu_is_dismissed() {
        let event = AppEvent::ExplorerUi(ExplorerEvent::NodePressed {
            id: String::from("docs"),
        });

        assert_eq!(context_menu_guard(&event), MenuGuard::Dismiss);
    }

    #[test]
    fn given_drawer_toggle_when_guarded_then_menu_is_dismissed() {
        let event = AppEvent::ChromeUi(ChromeEvent::ToggleDrawer);

        assert_eq!(context_menu_guard(&event), MenuGuard::Dismiss);
    }

    #[test]
    fn given_listing_completion_when_guarded_then_it_is_allowed() {
        let event = AppEvent::ListingUi(ListingEvent::MutationFinished {
            errors: Vec::new(),
        });

        assert_eq!(context_menu_guard(&event), MenuGuard::Allow);
    }
}
