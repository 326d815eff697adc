pub(crate) mod chrome;
pub(crate) mod explorer;
pub(crate) mod listing;
pub(crate) mod settings;
pub(crate) mod upload;
pub(crate) mod viewer;
pub(crate) mod window;
