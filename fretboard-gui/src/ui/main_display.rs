//! # Main Display Module
//!
//! This module contains the main layout for the Flexfrets window: the
//! header controls, the open dropdown (if any) and the fretboard canvas.

use fretboard_core::tables::SCALE_CATALOG;
use fretboard_core::{AppState, Dropdown, Note};
use iced::widget::text::Shaping;
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Alignment, Color, Element, Length};

use crate::widgets::fretboard::FretboardView;
use crate::Message;

/// Scale buttons per dropdown row.
const SCALES_PER_ROW: usize = 4;

const SELECTED_COLOR: Color = Color::from_rgb(0.85, 0.25, 0.25);

/// Creates the complete main application view
pub fn create_main_view(state: &AppState) -> Element<'static, Message> {
    log::trace!("Rendering view");

    let title = text("Flexfrets").size(28);

    let fretboard = FretboardView::new(
        state.fretboard.clone(),
        state.settings.tuning,
        state.settings.notation,
        state.is_open(Dropdown::Tuner).then_some(state.selected_string).flatten(),
    );

    let mut content = column![title, create_header(state)].spacing(15);
    if let Some(dropdown) = create_dropdown(state) {
        content = content.push(dropdown);
    }
    content = content.push(
        container(fretboard.view())
            .width(Length::Fill)
            .padding(10),
    );
    content = content.push(
        text("Click a string's open note to retune it.")
            .size(13)
            .color(Color::from_rgb(0.6, 0.6, 0.6)),
    );

    container(content.padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Root note and scale pickers, notation switch and tuning shift.
fn create_header(state: &AppState) -> Element<'static, Message> {
    let settings = &state.settings;
    let scale_name = settings.scale().map_or("?", |scale| scale.name);
    let notation_label = if settings.notation.is_flat() {
        "Notation: \u{266d}"
    } else {
        "Notation: \u{266f}"
    };

    row![
        make_button(
            format!("Root: {}", settings.root_note.name(settings.notation)),
            Message::RootNoteMenu,
            state.is_open(Dropdown::RootNote),
        ),
        make_button(
            format!("Scale: {scale_name}"),
            Message::ScaleMenu,
            state.is_open(Dropdown::Scale),
        ),
        horizontal_space(),
        make_button(notation_label.to_string(), Message::NotationToggled, false),
        Space::with_width(20),
        text("Shift tuning").size(14),
        make_button("\u{2212}1".to_string(), Message::ShiftTuning(-1), false),
        make_button("+1".to_string(), Message::ShiftTuning(1), false),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Builds the open dropdown, if any.
fn create_dropdown(state: &AppState) -> Option<Element<'static, Message>> {
    let settings = &state.settings;
    let (title, options): (String, Element<'static, Message>) = match state.open_dropdown? {
        Dropdown::RootNote => (
            "Root note".to_string(),
            note_options(Some(settings.root_note), Message::RootNoteSelected),
        ),
        Dropdown::Tuner => {
            let string = state.selected_string?;
            (
                format!("Tuning for string {}", string + 1),
                note_options(settings.tuning.get(string).copied(), Message::TuningSelected),
            )
        }
        Dropdown::Scale => ("Scale".to_string(), scale_options(settings.scale_index)),
    };

    let panel = column![
        row![
            text(title).size(18),
            horizontal_space(),
            make_button("Close".to_string(), Message::CloseMenus, false),
        ]
        .align_y(Alignment::Center),
        options,
    ]
    .spacing(10)
    .padding(15);

    Some(container(panel).width(Length::Fill).into())
}

/// One button per pitch class, labelled with both spellings.
fn note_options(current: Option<Note>, on_select: fn(Note) -> Message) -> Element<'static, Message> {
    Note::all()
        .fold(Row::new().spacing(6), |row, note| {
            row.push(make_button(
                note.combined_name().to_string(),
                on_select(note),
                current == Some(note),
            ))
        })
        .into()
}

fn scale_options(current: usize) -> Element<'static, Message> {
    SCALE_CATALOG
        .chunks(SCALES_PER_ROW)
        .enumerate()
        .fold(Column::new().spacing(6), |col, (chunk_index, chunk)| {
            let buttons = chunk.iter().enumerate().fold(Row::new().spacing(6), |row, (i, scale)| {
                let index = chunk_index * SCALES_PER_ROW + i;
                row.push(
                    container(make_button(
                        scale.name.to_string(),
                        Message::ScaleSelected(index),
                        index == current,
                    ))
                    .width(Length::FillPortion(1)),
                )
            });
            col.push(buttons)
        })
        .into()
}

/// Creates a button, highlighted when it shows the current selection.
fn make_button(label: String, message: Message, selected: bool) -> Element<'static, Message> {
    let mut button = button(text(label).size(14).shaping(Shaping::Advanced))
        .padding([6, 10])
        .on_press(message);

    if selected {
        button = button.style(|_theme, _status| {
            use iced::widget::button;
            button::Style {
                background: Some(iced::Background::Color(SELECTED_COLOR)),
                text_color: Color::WHITE,
                ..button::Style::default()
            }
        });
    }

    button.into()
}
