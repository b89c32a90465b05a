// SPDX-License-Identifier: MPL-2.0
//! Demo application shell.
//!
//! Opens an album JSON file, builds one wall-clock media backend per
//! clip, and hosts the [`clip_view`] component: keyboard events arrive
//! through an event subscription, a periodic tick drains each clip's
//! command channel into its clock and feeds the resulting media events
//! back into the component. The media surface is a headless readout
//! (playhead, duration, resolved source URL); rendering backends plug
//! in behind the same command/event seam without touching this shell.

use crate::album::{Album, ClipNavigator};
use crate::config;
use crate::controller::ScrubTravel;
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::error::Error;
use crate::media::{media_channel, ClockMedia, MediaCommand, MediaSource};
use crate::ui::clip_view;
use iced::widget::{progress_bar, Column, Container, Text};
use iced::{event, keyboard, time, Element, Length, Subscription, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How often the media clocks are polled.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Clips without an authored `duration_secs` still need a length for the
/// wall-clock backend.
const FALLBACK_CLIP_DURATION_SECS: f64 = 10.0;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Path of the album JSON file to open.
    pub album_path: Option<PathBuf>,
    /// Optional media base URL override (otherwise from `settings.toml`).
    pub media_url: Option<String>,
    /// Force touch mode (no pointer scrubbing).
    pub touch: bool,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ClipView(clip_view::Message),
    Tick(Instant),
}

/// One clip's media backend: a wall-clock playhead plus the command
/// channel the controller writes into.
struct MediaChannel {
    clock: ClockMedia,
    commands: tokio::sync::mpsc::UnboundedReceiver<MediaCommand>,
}

/// Root Iced application state.
pub struct App {
    navigator: Option<ClipNavigator>,
    clip_view: clip_view::State,
    media: Vec<MediaChannel>,
    source: MediaSource,
    diagnostics: DiagnosticsCollector,
    load_error: Option<Error>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let travel = ScrubTravel::new(
            config.scrub_travel.unwrap_or(config::DEFAULT_SCRUB_TRAVEL),
        );
        let touch_mode = flags.touch || config.touch_mode.unwrap_or(false);
        let source = MediaSource::from_base_url(
            flags
                .media_url
                .as_deref()
                .or(config.media_base_url.as_deref()),
        );

        let diagnostics = DiagnosticsCollector::default();

        let (navigator, load_error) = match flags.album_path.as_deref() {
            Some(path) => match Album::load_from_path(path) {
                Ok(album) => (Some(ClipNavigator::new(album)), None),
                Err(err) => (None, Some(err)),
            },
            None => (None, None),
        };

        let clip_count = navigator.as_ref().map_or(0, ClipNavigator::len);
        let mut clip_view = clip_view::State::new(
            clip_count,
            travel,
            touch_mode,
            diagnostics.handle(),
        );

        let mut media = Vec::with_capacity(clip_count);
        if let Some(navigator) = &navigator {
            diagnostics.handle().log_action_with_details(
                UserAction::LoadAlbum { clip_count },
                Some(navigator.album().title.clone()),
            );
            for (index, clip) in navigator.album().clips.iter().enumerate() {
                let (sender, commands) = media_channel();
                clip_view.attach_media(index, sender);
                media.push(MediaChannel {
                    clock: ClockMedia::new(
                        clip.duration_secs.unwrap_or(FALLBACK_CLIP_DURATION_SECS),
                    ),
                    commands,
                });
            }
        }

        (
            Self {
                navigator,
                clip_view,
                media,
                source,
                diagnostics,
                load_error,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match &self.navigator {
            Some(navigator) => format!("ClipLens — {}", navigator.album().title),
            None => "ClipLens".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ClipView(msg) => {
                self.forward_to_clip_view(msg);
                Task::none()
            }
            Message::Tick(_) => {
                let mut pending = Vec::new();
                for (index, channel) in self.media.iter_mut().enumerate() {
                    while let Ok(command) = channel.commands.try_recv() {
                        for event in channel.clock.apply(command) {
                            pending.push((index, event));
                        }
                    }
                    for event in channel.clock.poll() {
                        pending.push((index, event));
                    }
                }
                for (index, event) in pending {
                    self.forward_to_clip_view(clip_view::Message::Media { index, event });
                }
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    fn forward_to_clip_view(&mut self, message: clip_view::Message) {
        let playhead = self.active_playhead_secs();
        let effect = self.clip_view.update(message, playhead);
        self.apply_effect(effect);
    }

    fn active_playhead_secs(&self) -> f64 {
        self.media
            .get(self.clip_view.active_index())
            .map_or(0.0, |channel| channel.clock.position_secs())
    }

    fn apply_effect(&mut self, effect: clip_view::Effect) {
        let Some(navigator) = &mut self.navigator else {
            return;
        };
        let moved = match effect {
            clip_view::Effect::RequestNext => navigator.advance(),
            clip_view::Effect::RequestPrevious => navigator.retreat(),
            clip_view::Effect::None => None,
        };
        if let Some(index) = moved {
            self.clip_view.activate_clip(index);
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(|event, status, _window| {
            // Keyboard input drives navigation and play/pause; anything a
            // widget already captured stays captured.
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) = &event {
                return match status {
                    event::Status::Ignored => Some(Message::ClipView(
                        clip_view::Message::RawEvent(event.clone()),
                    )),
                    event::Status::Captured => None,
                };
            }
            None
        });

        if self.media.is_empty() {
            keys
        } else {
            Subscription::batch([keys, time::every(TICK_INTERVAL).map(Message::Tick)])
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let Some(navigator) = &self.navigator else {
            let label = match &self.load_error {
                Some(err) => format!("{err}"),
                None => "Pass an album JSON file on the command line.".to_string(),
            };
            return Container::new(Text::new(label))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center)
                .into();
        };

        let info = navigator.navigation_info();
        let clip = navigator.current_clip();
        let model = clip_view::ViewModel {
            state: self.clip_view.playback_state(),
            at_first: info.at_first,
            at_last: info.at_last,
            caption: clip.and_then(|c| c.caption.as_deref()),
            description: clip.and_then(|c| c.description.as_deref()),
            touch_mode: self.clip_view.touch_mode(),
        };

        let content = clip_view::view(model, self.media_surface()).map(Message::ClipView);
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
            .into()
    }

    /// Headless media surface: playhead readout and progress.
    fn media_surface(&self) -> Element<'_, clip_view::Message> {
        let position = self.active_playhead_secs();
        let duration = self
            .media
            .get(self.clip_view.active_index())
            .map_or(0.0, |channel| channel.clock.duration_secs());

        #[allow(clippy::cast_possible_truncation)]
        let fraction = if duration > 0.0 {
            (position / duration) as f32
        } else {
            0.0
        };

        let resolved = self
            .navigator
            .as_ref()
            .and_then(ClipNavigator::current_clip)
            .and_then(|clip| self.source.resolve(&clip.src))
            .unwrap_or_default();

        Column::new()
            .spacing(8.0)
            .push(
                Container::new(Text::new(format!(
                    "{} / {}",
                    format_secs(position),
                    format_secs(duration)
                )))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center),
            )
            .push(progress_bar(0.0..=1.0, fraction))
            .push(Text::new(resolved).size(12.0))
            .into()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to >= 0 first
fn format_secs(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_secs_renders_minutes_and_seconds() {
        assert_eq!(format_secs(0.0), "0:00");
        assert_eq!(format_secs(65.0), "1:05");
        assert_eq!(format_secs(600.4), "10:00");
        assert_eq!(format_secs(-3.0), "0:00");
    }
}
