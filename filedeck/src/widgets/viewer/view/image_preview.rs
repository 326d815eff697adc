use iced::widget::{container, image};
use iced::{Element, Length, alignment};

use crate::widgets::viewer::event::ViewerEvent;

/// Props for the image viewer.
#[derive(Debug, Clone)]
pub(crate) struct ImagePreviewProps<'a> {
    pub(crate) handle: &'a image::Handle,
}

/// Render the fetched image centered at its natural size.
pub(crate) fn view<'a>(
    props: ImagePreviewProps<'a>,
) -> Element<'a, ViewerEvent> {
    container(image(props.handle.clone()))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
