// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the scrub accumulator and controller event handling.
//!
//! Pointer-move events arrive at device rates (hundreds per second on
//! high-polling-rate mice), so the per-event cost of the scrub path is
//! the one hot loop in this crate.

use clip_lens::controller::{ClipController, ScrubTravel};
use clip_lens::media::{media_channel, MediaEvent};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A ready single-clip controller with its command channel kept alive.
fn ready_controller() -> (
    ClipController,
    tokio::sync::mpsc::UnboundedReceiver<clip_lens::media::MediaCommand>,
) {
    let mut controller = ClipController::new(1, ScrubTravel::default());
    let (sender, rx) = media_channel();
    controller.attach_media(0, sender);
    controller.media_event(
        0,
        MediaEvent::MetadataLoaded {
            duration_secs: 600.0,
        },
    );
    controller.media_event(0, MediaEvent::FirstFrameReady);
    (controller, rx)
}

/// Benchmark the pointer-move path: movement accumulation plus the
/// absolute seek computation.
fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub");

    group.bench_function("pointer_moves_1k", |b| {
        b.iter(|| {
            let (mut controller, mut rx) = ready_controller();
            controller.pointer_entered((0.0, 0.0), 0.0);
            for i in 0..1000u32 {
                let x = (i as f32) * 0.37;
                let y = (i as f32) * 0.11;
                controller.pointer_moved(black_box((x, y)));
            }
            while rx.try_recv().is_ok() {}
            black_box(controller.scrub_accumulated());
        });
    });

    group.finish();
}

/// Benchmark play/pause toggling through the state machine.
fn bench_toggle_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrub");

    group.bench_function("toggle_cycle", |b| {
        b.iter(|| {
            let (mut controller, mut rx) = ready_controller();
            for _ in 0..100 {
                controller.toggle_play();
                controller.media_event(0, MediaEvent::PlayAccepted);
                controller.toggle_play();
            }
            while rx.try_recv().is_ok() {}
            black_box(controller.state().is_paused());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_moves, bench_toggle_cycle);
criterion_main!(benches);
