pub(crate) mod chrome;
pub(crate) mod explorer;
pub(crate) mod listing;
pub(crate) mod upload;
pub(crate) mod viewer;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) chrome: chrome::ChromeWidget,
    pub(crate) explorer: explorer::ExplorerWidget,
    pub(crate) listing: listing::ListingWidget,
    pub(crate) viewer: viewer::ViewerWidget,
    pub(crate) upload: upload::UploadWidget,
}
