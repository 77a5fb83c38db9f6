//! `UniverseApp`: the top-level egui application state.
//!
//! This module declares the `UniverseApp` struct and its per-frame driver.
//! Drawing is split across the sibling sub-modules:
//!
//! - `viewport`: pointer routing and the projected 3-D scene
//! - `overlays`: loading, welcome, modal, reveal, hint and music controls

pub mod overlays;
pub mod viewport;

use std::time::Instant;

use eframe::egui;
use rand::rngs::ThreadRng;

use memory_universe::content;
use memory_universe::overlay::OverlayStack;
use memory_universe::render::camera::Camera;
use memory_universe::render::clock::FrameClock;
use memory_universe::scene::{Universe, UniverseAction};
use memory_universe::shell::{AppShell, ShellTimings};
use memory_universe::UniverseConfig;

// ─── Application state ───────────────────────────────────────────────────────

pub struct UniverseApp {
    pub camera: Camera,
    pub clock: FrameClock,
    pub universe: Universe,
    pub shell: AppShell,
    pub overlays: OverlayStack,
    pub rng: ThreadRng,
    /// Where the primary button went down, for telling clicks from drags.
    pub press_origin: Option<egui::Pos2>,
}

impl UniverseApp {
    pub fn new(cfg: UniverseConfig) -> Self {
        let start = Instant::now();
        let universe = Universe::new(&cfg, content::MEMORIES);
        log::info!(
            "universe ready: {} memory stars",
            universe.memory_stars().len()
        );
        Self {
            camera: Camera::new(cfg.camera.clone()),
            clock: FrameClock::new(start),
            universe,
            shell: AppShell::new(start, ShellTimings::default()),
            overlays: OverlayStack::new(),
            rng: rand::thread_rng(),
            press_origin: None,
        }
    }

    /// Run shell and overlay timers, then bring the overlays in line.
    fn poll_timers(&mut self, now: Instant) {
        self.shell.poll(now);
        self.overlays.sync(&self.shell, now, &mut self.rng);
        let signals = self.overlays.poll(now);
        if !signals.is_empty() {
            self.overlays
                .apply(&mut self.shell, &signals, now, &mut self.rng);
        }
    }

    pub fn handle_action(&mut self, action: UniverseAction, now: Instant) {
        if self.shell.handle(action) {
            self.overlays.sync(&self.shell, now, &mut self.rng);
        }
    }
}

impl eframe::App for UniverseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_timers(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(viewport::BACKGROUND))
            .show(ctx, |ui| {
                self.draw_viewport(ui, ctx, now);
            });

        self.draw_overlays(ctx, now);

        // Continuous animation: every body reads the clock each frame.
        ctx.request_repaint();
    }
}
