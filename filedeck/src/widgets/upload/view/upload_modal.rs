use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, row, text, text_input};
use iced::{Element, Length, alignment};

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::components::primitive::modal::{self, ModalProps};
use crate::style::flat_button_style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::upload::event::UploadEvent;
use crate::widgets::upload::model::{
    StagedFile, SummaryMarker, UploadTask, UploadTaskState, UploadViewModel,
    source_label,
};

const MODAL_WIDTH: f32 = 560.0;
const FONT_SIZE: f32 = 13.0;
const HINT_FONT_SIZE: f32 = 12.0;
const SECTION_SPACING: f32 = 12.0;
const ROW_SPACING: f32 = 8.0;
const INPUT_PADDING_X: f32 = 8.0;
const INPUT_PADDING_Y: f32 = 6.0;

/// Props for the upload modal.
#[derive(Debug, Clone)]
pub(crate) struct UploadModalProps<'a> {
    pub(crate) vm: UploadViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the staging list, the task list and the upload controls.
pub(crate) fn view<'a>(
    props: UploadModalProps<'a>,
) -> Element<'a, UploadEvent> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let target = text(format!("Target: /{}", vm.dir))
        .size(FONT_SIZE)
        .color(palette.dim_foreground);

    let input = text_input("Add file (local path)", vm.path_input)
        .on_input(UploadEvent::PathInputChanged)
        .on_submit(UploadEvent::PathInputSubmitted)
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .size(FONT_SIZE)
        .width(Length::Fill);
    let add_line = row![
        input,
        action_button::view(ActionButtonProps::new("Add", props.theme))
            .map(|_| UploadEvent::PathInputSubmitted),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    let mut content = column![target, add_line].spacing(SECTION_SPACING);

    if let Some(error) = vm.input_error {
        content = content
            .push(text(error).size(HINT_FONT_SIZE).color(palette.red));
    }

    if vm.staged.is_empty() {
        content = content.push(
            text("Drop files on the window or add a path to stage them.")
                .size(HINT_FONT_SIZE)
                .color(palette.dim_foreground),
        );
    } else {
        content = content.push(Column::with_children(
            vm.staged.iter().map(|file| staged_row(file, palette)),
        ));
    }

    if let Some(summary) = &vm.summary {
        let (marker, color) = match summary.marker {
            SummaryMarker::InProgress => ("…", palette.blue),
            SummaryMarker::Error => ("✗", palette.red),
            SummaryMarker::Success => ("✓", palette.green),
        };
        content = content.push(
            row![
                text(marker).size(FONT_SIZE).color(color),
                text(summary.label()).size(FONT_SIZE),
            ]
            .spacing(ROW_SPACING),
        );
        content = content.push(Column::with_children(
            vm.tasks.iter().map(|task| task_row(task, palette)),
        ));
    }

    let upload_label = if vm.checking { "Checking..." } else { "Upload" };
    let footer = row![
        action_button::view(ActionButtonProps::new("Close", props.theme))
            .map(|_| UploadEvent::Close),
        action_button::view(
            ActionButtonProps::new(upload_label, props.theme)
                .variant(ActionButtonVariant::Primary)
                .enabled(!vm.staged.is_empty() && !vm.checking),
        )
        .map(|_| UploadEvent::Submit),
    ]
    .spacing(ROW_SPACING);

    modal::view(
        ModalProps::new("Upload", props.theme)
            .size(Length::Fixed(MODAL_WIDTH), Length::Shrink),
        content.into(),
        footer.into(),
    )
}

fn staged_row<'a>(
    file: &'a StagedFile,
    palette: &'a IcedColorPalette,
) -> Element<'a, UploadEvent> {
    row![
        text(file.name.as_str()).size(FONT_SIZE),
        text(source_label(&file.source))
            .size(HINT_FONT_SIZE)
            .color(palette.dim_foreground)
            .wrapping(Wrapping::None)
            .width(Length::Fill),
        small_button(
            "×",
            palette,
            UploadEvent::Unstage {
                source: file.source.clone(),
            },
        ),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn task_row<'a>(
    task: &'a UploadTask,
    palette: &'a IcedColorPalette,
) -> Element<'a, UploadEvent> {
    let status_color = match task.state {
        UploadTaskState::Queued | UploadTaskState::Progress(_) => {
            palette.dim_foreground
        },
        UploadTaskState::Success => palette.green,
        UploadTaskState::Error(_) => palette.red,
    };

    let mut line = row![
        text(task.name.as_str()).size(FONT_SIZE).width(Length::Fill),
        text(task.status_label()).size(HINT_FONT_SIZE).color(status_color),
    ]
    .spacing(ROW_SPACING)
    .align_y(alignment::Vertical::Center);

    if task.is_finished() {
        line = line.push(small_button(
            "×",
            palette,
            UploadEvent::Dismiss { id: task.id },
        ));
    }

    container(line).width(Length::Fill).into()
}

fn small_button<'a>(
    label: &'a str,
    palette: &'a IcedColorPalette,
    event: UploadEvent,
) -> Element<'a, UploadEvent> {
    let accent = palette.dim_foreground;
    button(text(label).size(FONT_SIZE))
        .padding([0.0, 6.0])
        .style(move |_, status| flat_button_style(palette, accent, status))
        .on_press(event)
        .into()
}
