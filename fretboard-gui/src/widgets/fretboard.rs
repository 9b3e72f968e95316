//! # Fretboard Widget
//!
//! Draws the neck as a grid of 6 strings by 12 frets, plus an open-note
//! column on the left. Frets in the scale get a filled marker with the
//! note name, the root in a stronger colour.
//!
//! ## Interaction
//! - Clicking a string's open-note cell selects that string for retuning

use fretboard_core::tables::{NUM_FRETS, NUM_STRINGS};
use fretboard_core::{Fretboard, Note, Notation};
use iced::widget::canvas::{self, event, Event, Fill, Geometry, Path, Stroke};
use iced::widget::container;
use iced::widget::text::Shaping;
use iced::{alignment, mouse, Color, Element, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::Message;

/// Height of the widget in pixels.
const HEIGHT: f32 = 300.0;
/// Width of the open-note column in pixels.
const OPEN_COLUMN_WIDTH: f32 = 70.0;
/// Frets that carry an inlay dot; the 12th gets two.
const INLAY_FRETS: [usize; 5] = [3, 5, 7, 9, 12];

const ROOT_COLOR: Color = Color::from_rgb(0.85, 0.25, 0.25);
const SCALE_COLOR: Color = Color::from_rgb(0.2, 0.55, 0.85);
const WOOD_COLOR: Color = Color::from_rgb(0.24, 0.17, 0.12);
const WIRE_COLOR: Color = Color::from_rgb(0.75, 0.75, 0.75);

/// Canvas program for one rendered fretboard.
#[derive(Debug, Clone)]
pub struct FretboardView {
    fretboard: Fretboard,
    tuning: [Note; NUM_STRINGS],
    notation: Notation,
    /// String whose tuner dropdown is open, if any
    selected_string: Option<usize>,
}

impl FretboardView {
    pub fn new(
        fretboard: Fretboard,
        tuning: [Note; NUM_STRINGS],
        notation: Notation,
        selected_string: Option<usize>,
    ) -> Self {
        Self {
            fretboard,
            tuning,
            notation,
            selected_string,
        }
    }

    pub fn view(self) -> Element<'static, Message> {
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(HEIGHT)),
        )
        .into()
    }

    /// Maps a click to the string whose open-note cell was hit.
    fn string_from_pos(bounds: Size, pos: Point) -> Option<usize> {
        if pos.x > OPEN_COLUMN_WIDTH {
            return None;
        }
        let row_height = bounds.height / NUM_STRINGS as f32;
        let string = (pos.y / row_height).floor() as usize;
        (string < NUM_STRINGS).then_some(string)
    }
}

impl canvas::Program<Message> for FretboardView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let Some(position) = cursor.position_in(bounds) {
            if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
                if let Some(string) = Self::string_from_pos(bounds.size(), position) {
                    return (event::Status::Captured, Some(Message::StringClicked(string)));
                }
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let row_height = bounds.height / NUM_STRINGS as f32;
        let fret_width = (bounds.width - OPEN_COLUMN_WIDTH) / NUM_FRETS as f32;
        let marker_radius = (row_height.min(fret_width) * 0.38).max(4.0);
        let row_center = |string: usize| (string as f32 + 0.5) * row_height;
        let fret_center = |fret: usize| OPEN_COLUMN_WIDTH + (fret as f32 - 0.5) * fret_width;

        // Neck
        frame.fill_rectangle(
            Point::new(OPEN_COLUMN_WIDTH, 0.0),
            Size::new(bounds.width - OPEN_COLUMN_WIDTH, bounds.height),
            Fill::from(WOOD_COLOR),
        );

        // Inlays sit between the middle strings
        let inlay_color = Color::from_rgba(1.0, 1.0, 1.0, 0.15);
        for fret in INLAY_FRETS {
            let x = fret_center(fret);
            if fret == 12 {
                for y in [row_center(1) + row_height * 0.5, row_center(3) + row_height * 0.5] {
                    frame.fill(&Path::circle(Point::new(x, y), marker_radius * 0.4), inlay_color);
                }
            } else {
                frame.fill(
                    &Path::circle(Point::new(x, bounds.height / 2.0), marker_radius * 0.4),
                    inlay_color,
                );
            }
        }

        // Nut and fret wires
        frame.stroke(
            &Path::line(
                Point::new(OPEN_COLUMN_WIDTH, 0.0),
                Point::new(OPEN_COLUMN_WIDTH, bounds.height),
            ),
            Stroke::default().with_color(Color::WHITE).with_width(4.0),
        );
        for fret in 1..=NUM_FRETS {
            let x = OPEN_COLUMN_WIDTH + fret as f32 * fret_width;
            frame.stroke(
                &Path::line(Point::new(x, 0.0), Point::new(x, bounds.height)),
                Stroke::default().with_color(WIRE_COLOR).with_width(2.0),
            );
        }

        for (i, string) in self.fretboard.strings.iter().enumerate() {
            let y = row_center(i);

            // Lower strings are drawn thicker
            frame.stroke(
                &Path::line(Point::new(OPEN_COLUMN_WIDTH, y), Point::new(bounds.width, y)),
                Stroke::default()
                    .with_color(Color::from_rgb(0.85, 0.8, 0.65))
                    .with_width(1.0 + i as f32 * 0.4),
            );

            // Open-note cell
            if self.selected_string == Some(i) {
                frame.fill_rectangle(
                    Point::new(0.0, i as f32 * row_height),
                    Size::new(OPEN_COLUMN_WIDTH, row_height),
                    Fill::from(Color::from_rgba(1.0, 1.0, 1.0, 0.1)),
                );
            }
            let open_center = Point::new(OPEN_COLUMN_WIDTH / 2.0, y);
            if let Some(color) = marker_color(string.open_note_is_in_scale, string.open_note_is_root) {
                frame.stroke(
                    &Path::circle(open_center, marker_radius),
                    Stroke::default().with_color(color).with_width(2.0),
                );
            }
            draw_label(&mut frame, self.tuning[i].name(self.notation), open_center, Color::WHITE);

            for (j, fret) in string.frets.iter().enumerate() {
                let Some(color) = marker_color(fret.is_in_scale, fret.is_root) else {
                    continue;
                };
                let center = Point::new(fret_center(j + 1), y);
                frame.fill(&Path::circle(center, marker_radius), color);
                draw_label(&mut frame, fret.note, center, Color::WHITE);
            }
        }

        vec![frame.into_geometry()]
    }
}

fn marker_color(is_in_scale: bool, is_root: bool) -> Option<Color> {
    match (is_in_scale, is_root) {
        (_, true) => Some(ROOT_COLOR),
        (true, false) => Some(SCALE_COLOR),
        _ => None,
    }
}

fn draw_label(frame: &mut canvas::Frame, label: &str, center: Point, color: Color) {
    frame.fill_text(canvas::Text {
        content: label.to_string(),
        position: center,
        color,
        size: Pixels(14.0),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        shaping: Shaping::Advanced,
        ..canvas::Text::default()
    });
}
