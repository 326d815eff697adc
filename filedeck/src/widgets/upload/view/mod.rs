pub(crate) mod collision_dialog;
pub(crate) mod upload_modal;
