// SPDX-License-Identifier: MPL-2.0
//! Clip view component encapsulating state and update logic.
//!
//! The component is the Iced-facing binding around [`ClipController`]:
//! it translates widget messages and raw events into controller calls
//! and reports navigation requests back to the application as an
//! [`Effect`]. The application owns the clip list; on a navigation
//! effect it moves its cursor and calls [`State::activate_clip`] with
//! the new index.

pub mod view;

pub use view::{view, ViewModel};

use crate::controller::{ClipController, ClipPlaybackState, KeyPress, ScrubTravel};
use crate::diagnostics::DiagnosticsHandle;
use crate::media::{MediaCommandSender, MediaEvent};
use iced::{event, keyboard, Point};

/// Messages emitted by clip view widgets and routed raw events.
#[derive(Debug, Clone)]
pub enum Message {
    /// The media surface itself was clicked/tapped.
    SurfacePressed,
    /// The play/pause control was pressed.
    TogglePressed,
    /// The previous-clip arrow was pressed.
    PrevPressed,
    /// The next-clip arrow was pressed.
    NextPressed,
    /// Pointer entered the media surface.
    PointerEntered,
    /// Pointer moved over the media surface.
    PointerMoved(Point),
    /// Pointer left the media surface.
    PointerExited,
    /// Raw event routed in by the application subscription (keyboard).
    RawEvent(event::Event),
    /// Lifecycle event from the media backend of one clip.
    Media { index: usize, event: MediaEvent },
}

/// Side effects the application should perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Advance the clip cursor and activate the new index.
    RequestNext,
    /// Retreat the clip cursor and activate the new index.
    RequestPrevious,
}

/// Clip view component state.
#[derive(Debug)]
pub struct State {
    controller: ClipController,
    /// Iced's `mouse_area` reports entry without coordinates; the first
    /// move after entry carries them, so entry seeding is deferred to it.
    pending_enter: bool,
    touch_mode: bool,
}

impl State {
    /// Creates the component for `clip_count` clips.
    #[must_use]
    pub fn new(
        clip_count: usize,
        travel: ScrubTravel,
        touch_mode: bool,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        let mut controller =
            ClipController::new(clip_count, travel).with_diagnostics(diagnostics);
        controller.set_touch_mode(touch_mode);
        Self {
            controller,
            pending_enter: false,
            touch_mode,
        }
    }

    /// Connects the media backend for one clip index.
    pub fn attach_media(&mut self, index: usize, sender: MediaCommandSender) {
        self.controller.attach_media(index, sender);
    }

    /// Returns the playback state of the active clip.
    #[must_use]
    pub fn playback_state(&self) -> &ClipPlaybackState {
        self.controller.state()
    }

    /// Returns the active clip index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Returns the active clip's duration, once known.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.controller.duration_secs()
    }

    /// Returns true while a pointer scrub is engaged.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.controller.is_scrubbing()
    }

    /// Returns true when the component runs in touch mode.
    #[must_use]
    pub fn touch_mode(&self) -> bool {
        self.touch_mode
    }

    /// Makes `index` the active clip after the application moved its
    /// cursor.
    pub fn activate_clip(&mut self, index: usize) {
        self.pending_enter = false;
        self.controller.activate(index);
    }

    /// Handles a component message.
    ///
    /// `active_playhead_secs` is the current playhead of the active
    /// clip's media backend; it is only read when a pointer scrub
    /// engages, to seed the accumulator from the current position.
    pub fn update(&mut self, message: Message, active_playhead_secs: f64) -> Effect {
        match message {
            Message::SurfacePressed => effect_for(self.controller.surface_activated()),
            Message::TogglePressed => {
                self.controller.toggle_play();
                Effect::None
            }
            Message::PrevPressed => effect_for(self.controller.request_previous()),
            Message::NextPressed => effect_for(self.controller.request_next()),
            Message::PointerEntered => {
                self.pending_enter = true;
                Effect::None
            }
            Message::PointerMoved(position) => {
                if self.pending_enter {
                    self.pending_enter = false;
                    self.controller
                        .pointer_entered((position.x, position.y), active_playhead_secs);
                } else {
                    self.controller.pointer_moved((position.x, position.y));
                }
                Effect::None
            }
            Message::PointerExited => {
                self.pending_enter = false;
                self.controller.pointer_left();
                Effect::None
            }
            Message::RawEvent(raw) => self.handle_raw_event(&raw),
            Message::Media { index, event } => {
                self.controller.media_event(index, event);
                Effect::None
            }
        }
    }

    fn handle_raw_event(&mut self, raw: &event::Event) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = raw else {
            return Effect::None;
        };

        let key_press = match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => KeyPress::ArrowRight,
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => KeyPress::ArrowLeft,
            keyboard::Key::Named(keyboard::key::Named::Space) => KeyPress::Space,
            _ => return Effect::None,
        };

        effect_for(self.controller.key_pressed(key_press).event)
    }
}

fn effect_for(event: Option<crate::controller::Event>) -> Effect {
    match event {
        Some(crate::controller::Event::RequestNext) => Effect::RequestNext,
        Some(crate::controller::Event::RequestPrevious) => Effect::RequestPrevious,
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::media_channel;
    use crate::test_utils::drain_commands;

    fn ready_state(clips: usize) -> State {
        let mut state = State::new(
            clips,
            ScrubTravel::default(),
            false,
            DiagnosticsHandle::disabled(),
        );
        for index in 0..clips {
            let (sender, mut rx) = media_channel();
            state.attach_media(index, sender);
            state.update(
                Message::Media {
                    index,
                    event: MediaEvent::MetadataLoaded { duration_secs: 10.0 },
                },
                0.0,
            );
            state.update(
                Message::Media {
                    index,
                    event: MediaEvent::FirstFrameReady,
                },
                0.0,
            );
            drain_commands(&mut rx);
        }
        state
    }

    #[test]
    fn first_move_after_entry_seeds_instead_of_scrubbing() {
        let mut state = ready_state(1);

        state.update(Message::PointerEntered, 4.0);
        assert!(!state.is_scrubbing());

        // The first move carries the entry coordinates
        state.update(Message::PointerMoved(Point::new(10.0, 10.0)), 4.0);
        assert!(state.is_scrubbing());
    }

    #[test]
    fn surface_press_requests_next_clip() {
        let mut state = ready_state(2);
        let effect = state.update(Message::SurfacePressed, 0.0);
        assert_eq!(effect, Effect::RequestNext);
    }

    #[test]
    fn surface_press_on_last_clip_is_ignored() {
        let mut state = ready_state(2);
        state.activate_clip(1);
        let effect = state.update(Message::SurfacePressed, 0.0);
        assert_eq!(effect, Effect::None);
    }

    fn key_event(named: keyboard::key::Named, code: keyboard::key::Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn arrow_keys_map_to_navigation_effects() {
        let mut state = ready_state(3);
        state.activate_clip(1);

        let right = key_event(
            keyboard::key::Named::ArrowRight,
            keyboard::key::Code::ArrowRight,
        );
        assert_eq!(state.update(Message::RawEvent(right), 0.0), Effect::RequestNext);

        let left = key_event(
            keyboard::key::Named::ArrowLeft,
            keyboard::key::Code::ArrowLeft,
        );
        assert_eq!(state.update(Message::RawEvent(left), 0.0), Effect::RequestPrevious);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut state = ready_state(2);
        let escape = key_event(keyboard::key::Named::Escape, keyboard::key::Code::Escape);
        assert_eq!(state.update(Message::RawEvent(escape), 0.0), Effect::None);
    }

    #[test]
    fn touch_mode_never_engages_scrubbing() {
        let mut state = State::new(
            1,
            ScrubTravel::default(),
            true,
            DiagnosticsHandle::disabled(),
        );
        state.update(
            Message::Media {
                index: 0,
                event: MediaEvent::MetadataLoaded { duration_secs: 10.0 },
            },
            0.0,
        );
        state.update(
            Message::Media {
                index: 0,
                event: MediaEvent::FirstFrameReady,
            },
            0.0,
        );

        state.update(Message::PointerEntered, 0.0);
        state.update(Message::PointerMoved(Point::new(50.0, 50.0)), 0.0);
        state.update(Message::PointerMoved(Point::new(500.0, 50.0)), 0.0);
        assert!(!state.is_scrubbing());
    }
}
