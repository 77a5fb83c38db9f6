//! egui drawing for the 2-D overlays.
//!
//! All state lives in `memory_universe::overlay`; this module only paints it
//! and forwards button presses back as `close` / `begin_exit` calls.

use std::time::Instant;

use eframe::egui;

use memory_universe::overlay::{hint, modal, music, reveal, welcome};
use memory_universe::shell::Mode;

use super::UniverseApp;

const GOLD: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);
const PINK: egui::Color32 = egui::Color32::from_rgb(255, 105, 180);
const SKY: egui::Color32 = egui::Color32::from_rgb(135, 206, 235);
const CARD: egui::Color32 = egui::Color32::from_rgb(20, 12, 40);

fn faded(c: egui::Color32, alpha: f32) -> egui::Color32 {
    c.gamma_multiply(alpha.clamp(0.0, 1.0))
}

/// Full-screen dim behind a modal layer.
fn dim(ctx: &egui::Context, id: &str, alpha: f32) {
    ctx.layer_painter(egui::LayerId::new(egui::Order::Middle, egui::Id::new(id)))
        .rect_filled(
            ctx.screen_rect(),
            0.0,
            egui::Color32::from_black_alpha((alpha.clamp(0.0, 1.0) * 220.0) as u8),
        );
}

fn centered(id: &str) -> egui::Area {
    egui::Area::new(egui::Id::new(id))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .order(egui::Order::Foreground)
}

impl UniverseApp {
    pub fn draw_overlays(&mut self, ctx: &egui::Context, now: Instant) {
        match self.shell.mode() {
            Mode::Loading => self.draw_loading(ctx),
            Mode::Welcome => self.draw_welcome(ctx, now),
            Mode::Entered => {
                self.draw_day_counter(ctx, now);
                self.draw_hint(ctx, now);
                self.draw_music_button(ctx);
            }
        }
        self.draw_memory_modal(ctx, now);
        self.draw_secret_reveal(ctx, now);
    }

    fn draw_loading(&self, ctx: &egui::Context) {
        dim(ctx, "loading_dim", 1.0);
        centered("loading").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(48.0).color(PINK));
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("Preparing your universe…")
                        .size(20.0)
                        .color(SKY),
                );
            });
        });
    }

    fn draw_welcome(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(screen) = self.overlays.welcome.as_mut() else {
            return;
        };
        let alpha = screen.opacity(now);
        let zoom = screen.scale(now);
        dim(ctx, "welcome_dim", alpha);

        let mut enter = false;
        centered("welcome").show(ctx, |ui| {
            ui.set_opacity(alpha);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("🌌").size(64.0 * zoom));
                ui.label(
                    egui::RichText::new(welcome::TITLE)
                        .size(36.0 * zoom)
                        .color(GOLD)
                        .strong(),
                );
                ui.label(egui::RichText::new(welcome::SUBTITLE).size(16.0).color(SKY).italics());
                ui.add_space(12.0);
                ui.label(egui::RichText::new(welcome::BODY).size(18.0).color(egui::Color32::WHITE));
                ui.add_space(24.0);
                let button = egui::Button::new(
                    egui::RichText::new(welcome::BUTTON)
                        .size(22.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(PINK)
                .rounding(24.0);
                if ui.add_enabled(!screen.is_exiting(), button).clicked() {
                    enter = true;
                }
                ui.add_space(8.0);
                ui.label(egui::RichText::new(welcome::FOOTNOTE).size(11.0).color(egui::Color32::GRAY));
            });
        });
        if enter {
            screen.begin_exit(now);
        }
    }

    fn draw_day_counter(&self, ctx: &egui::Context, now: Instant) {
        let Some(counter) = self.overlays.day_counter.as_ref() else {
            return;
        };
        if !counter.is_visible() {
            return;
        }
        let alpha = counter.opacity(now);
        egui::Area::new(egui::Id::new("day_counter"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 24.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(counter.quote())
                        .size(18.0)
                        .color(faded(GOLD, alpha)),
                );
            });
    }

    fn draw_hint(&self, ctx: &egui::Context, now: Instant) {
        let Some(overlay) = self.overlays.hint.as_ref() else {
            return;
        };
        if overlay.state() == hint::HintState::Hidden {
            return;
        }
        let alpha = overlay.opacity(now);
        egui::Area::new(egui::Id::new("hint"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(hint::PRIMARY).size(16.0).color(faded(egui::Color32::WHITE, alpha)));
                    ui.label(egui::RichText::new(hint::SECONDARY).size(12.0).color(faded(SKY, alpha)));
                });
            });
    }

    fn draw_music_button(&mut self, ctx: &egui::Context) {
        let player = &mut self.overlays.music;
        if !player.is_started() {
            return;
        }
        egui::Area::new(egui::Id::new("music"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new(player.icon()).size(22.0))
                    .fill(CARD)
                    .rounding(22.0);
                if ui
                    .add(button)
                    .on_hover_text(music::SOURCE_URL)
                    .clicked()
                {
                    player.toggle_mute();
                }
            });
    }

    fn draw_memory_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(card) = self.overlays.modal.as_mut() else {
            return;
        };
        let alpha = card.opacity(now);
        dim(ctx, "modal_dim", alpha * 0.8);

        let memory = *card.memory();
        let date = card.formatted_date();
        let mut close = false;
        centered("memory_modal").show(ctx, |ui| {
            ui.set_opacity(alpha);
            egui::Frame::none()
                .fill(CARD)
                .rounding(24.0)
                .stroke(egui::Stroke::new(1.5, PINK))
                .inner_margin(egui::Margin::same(28.0))
                .show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(memory.emoji).size(56.0));
                        ui.label(egui::RichText::new(memory.title).size(26.0).color(GOLD).strong());
                        ui.label(egui::RichText::new(date).size(14.0).color(SKY));
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new(memory.message).size(17.0).color(egui::Color32::WHITE));
                        ui.add_space(12.0);
                        ui.label(egui::RichText::new(modal::SPARKLES).size(18.0));
                        ui.add_space(12.0);
                        let button = egui::Button::new(
                            egui::RichText::new(modal::BUTTON).size(16.0).color(egui::Color32::WHITE),
                        )
                        .fill(PINK)
                        .rounding(18.0);
                        if ui.add_enabled(!card.is_closing(), button).clicked() {
                            close = true;
                        }
                    });
                });
        });
        if close {
            card.close(now);
        }
    }

    fn draw_secret_reveal(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(secret) = self.overlays.reveal.as_mut() else {
            return;
        };
        let alpha = secret.opacity(now);
        dim(ctx, "reveal_dim", alpha);

        let phase = secret.phase();
        let mut close = false;
        centered("secret_reveal").show(ctx, |ui| {
            ui.set_opacity(alpha);
            ui.set_max_width(560.0);
            ui.vertical_centered(|ui| {
                if phase >= 1 {
                    ui.label(egui::RichText::new(reveal::QUESTION).size(24.0).color(SKY));
                    ui.add_space(20.0);
                }
                if phase >= 2 {
                    for line in reveal::HEADLINE {
                        ui.label(egui::RichText::new(line).size(28.0).color(GOLD).strong());
                    }
                    ui.add_space(20.0);
                }
                if phase >= reveal::LAST_PHASE {
                    for line in reveal::CLOSING {
                        ui.label(egui::RichText::new(line).size(22.0).color(PINK));
                    }
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(reveal::SIGNATURE).size(16.0).color(egui::Color32::WHITE).italics());
                    ui.add_space(24.0);
                    if secret.close_button_visible() {
                        let button = egui::Button::new(
                            egui::RichText::new(reveal::BUTTON).size(18.0).color(egui::Color32::WHITE),
                        )
                        .fill(PINK)
                        .rounding(20.0);
                        if ui.add(button).clicked() {
                            close = true;
                        }
                    }
                }
            });
        });
        if close {
            secret.close(now);
        }
    }
}
