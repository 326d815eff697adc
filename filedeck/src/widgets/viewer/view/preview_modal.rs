use iced::widget::{container, row, text};
use iced::{Element, Length};

use super::{
    force_preview, image_preview, pdf_preview, text_preview, zip_preview,
};
use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::components::primitive::modal::{self, ModalProps};
use crate::theme::ThemeProps;
use crate::widgets::viewer::event::ViewerEvent;
use crate::widgets::viewer::model::{Detection, PreviewContent, ViewerViewModel};

const MODAL_WIDTH: f32 = 760.0;
const MODAL_HEIGHT: f32 = 520.0;
const STATUS_FONT_SIZE: f32 = 13.0;
const FOOTER_SPACING: f32 = 8.0;

/// Props for the file viewer modal.
#[derive(Debug, Clone)]
pub(crate) struct PreviewModalProps<'a> {
    pub(crate) vm: ViewerViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the viewer modal titled with the file path.
pub(crate) fn view<'a>(
    props: PreviewModalProps<'a>,
) -> Element<'a, ViewerEvent> {
    let palette = props.theme.theme.iced_palette();
    let theme = props.theme;
    let vm = props.vm;

    let status =
        |label: &'a str, color: iced::Color| -> Element<'a, ViewerEvent> {
            container(text(label).size(STATUS_FONT_SIZE).color(color))
                .width(Length::Fill)
                .into()
        };

    let body = match vm.detection {
        Detection::Detecting => {
            status("Detecting file type...", palette.dim_foreground)
        },
        Detection::Failed => status("Error on loading data", palette.red),
        Detection::Detected { .. } if vm.needs_force() => {
            force_preview::view(force_preview::ForcePreviewProps {
                choice: vm.force_choice,
                theme,
            })
        },
        Detection::Detected { .. } => match vm.content {
            PreviewContent::Idle | PreviewContent::Loading => {
                status("Loading...", palette.dim_foreground)
            },
            PreviewContent::Text(preview) => {
                text_preview::view(text_preview::TextPreviewProps {
                    preview,
                    theme,
                })
            },
            PreviewContent::Image(handle) => {
                image_preview::view(image_preview::ImagePreviewProps { handle })
            },
            PreviewContent::Zip(nodes) => {
                zip_preview::view(zip_preview::ZipPreviewProps { nodes, theme })
            },
            PreviewContent::Pdf { file, size } => {
                pdf_preview::view(pdf_preview::PdfPreviewProps {
                    file: file.as_path(),
                    size: *size,
                    theme,
                })
            },
            PreviewContent::Error => {
                status("Error on loading data", palette.red)
            },
        },
    };

    let footer = row![
        action_button::view(
            ActionButtonProps::new("Download", theme)
                .variant(ActionButtonVariant::Primary),
        )
        .map(|_| ViewerEvent::Download),
        action_button::view(ActionButtonProps::new("Close", theme))
            .map(|_| ViewerEvent::Close),
    ]
    .spacing(FOOTER_SPACING);

    modal::view(
        ModalProps::new(vm.path, theme).size(
            Length::Fixed(MODAL_WIDTH),
            Length::Fixed(MODAL_HEIGHT),
        ),
        body,
        footer.into(),
    )
}
