pub(crate) mod force_preview;
pub(crate) mod image_preview;
pub(crate) mod pdf_preview;
pub(crate) mod preview_modal;
pub(crate) mod text_preview;
pub(crate) mod zip_preview;
