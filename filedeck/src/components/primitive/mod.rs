pub(crate) mod action_button;
pub(crate) mod menu_item;
pub(crate) mod modal;
