// SPDX-License-Identifier: MPL-2.0
//! Clip view rendering.
//!
//! Lays out the media surface (supplied by the host) inside the scrub
//! mouse area, with the play/pause control and caption below, the
//! prev/next arrows under those, and the clip description at the
//! bottom: the layout of the portfolio clip pages this component was
//! built for.

use super::Message;
use crate::controller::ClipPlaybackState;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

const SPACING: f32 = 8.0;
const CONTROL_TEXT_SIZE: f32 = 22.0;
const ARROW_TEXT_SIZE: f32 = 26.0;
const OVERLAY_TEXT_SIZE: f32 = 16.0;

/// Everything the view needs to render one clip.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    /// Playback state of the active clip.
    pub state: &'a ClipPlaybackState,
    /// Whether the active clip is the first of the album.
    pub at_first: bool,
    /// Whether the active clip is the last of the album.
    pub at_last: bool,
    /// Caption rendered next to the play control.
    pub caption: Option<&'a str>,
    /// Longer description rendered below the controls.
    pub description: Option<&'a str>,
    /// Touch hosts get no scrub mouse area.
    pub touch_mode: bool,
}

/// Renders the clip view around a host-supplied media surface.
pub fn view<'a>(
    model: ViewModel<'a>,
    media_surface: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut stack = Stack::new().push(
        Container::new(media_surface)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if model.state.is_loading() {
        stack = stack.push(overlay_text("Loading clip..."));
    }
    if let Some(reason) = model.state.failure_reason() {
        stack = stack.push(overlay_text(reason));
    }

    let surface = Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill);

    // Touch hosts get tap-to-toggle instead of pointer scrubbing;
    // navigation happens through the explicit arrow controls.
    let surface: Element<'_, Message> = if model.touch_mode {
        mouse_area(surface).on_press(Message::TogglePressed).into()
    } else {
        mouse_area(surface)
            .on_enter(Message::PointerEntered)
            .on_move(Message::PointerMoved)
            .on_exit(Message::PointerExited)
            .on_press(Message::SurfacePressed)
            .into()
    };

    let mut bottom_row = Row::new()
        .spacing(SPACING)
        .align_y(Vertical::Center)
        .push(play_pause_button(model.state));

    if let Some(caption) = model.caption {
        bottom_row = bottom_row.push(
            Container::new(Text::new(caption))
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );
    }

    let arrows = Row::new()
        .spacing(SPACING)
        .push(nav_arrow("<", model.at_first, Message::PrevPressed))
        .push(nav_arrow(">", model.at_last, Message::NextPressed));

    let mut column = Column::new()
        .spacing(SPACING)
        .push(surface)
        .push(bottom_row)
        .push(
            Container::new(arrows)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    if let Some(description) = model.description {
        column = column.push(Text::new(description));
    }

    column.width(Length::Fill).height(Length::Fill).into()
}

fn overlay_text(label: &str) -> Element<'_, Message> {
    Container::new(Text::new(label).size(OVERLAY_TEXT_SIZE))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn play_pause_button(state: &ClipPlaybackState) -> Element<'_, Message> {
    let glyph = if state.is_playing() { "⏸" } else { "▶" };
    let control = button(Text::new(glyph).size(CONTROL_TEXT_SIZE)).padding(SPACING);

    // The control is inert until the clip is ready
    let control = if state.is_ready() {
        control.on_press(Message::TogglePressed)
    } else {
        control
    };
    control.into()
}

fn nav_arrow(glyph: &str, at_boundary: bool, message: Message) -> Element<'_, Message> {
    let arrow = button(Text::new(glyph).size(ARROW_TEXT_SIZE)).padding(SPACING);
    let arrow = if at_boundary { arrow } else { arrow.on_press(message) };
    arrow.into()
}
