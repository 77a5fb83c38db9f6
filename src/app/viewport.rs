//! Scene viewport for `UniverseApp`.
//!
//! Each frame, in order: route pointer input (camera drag and zoom, star and
//! portal picking), advance the clock and every animated body, then project
//! the scene onto the egui painter. Points are drawn layer by layer as the
//! backdrop; bodies are depth-sorted on top, labels last.

use std::time::Instant;

use eframe::egui;

use memory_universe::body::memory_star::{MemoryStar, CORE_RADIUS};
use memory_universe::body::{portal, Hoop, Label};
use memory_universe::field::{Layer, PointField};
use memory_universe::input::picking::Cursor;
use memory_universe::math::{self, Transform, Vec3};
use memory_universe::render::animator::Animated;
use memory_universe::render::camera::{Camera, Viewport};
use memory_universe::render::material::{hex_color, U_COLOR, U_INTENSITY};

use super::UniverseApp;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0, 0, 8);

/// Pointer travel (points) beyond which a press is a drag, not a click.
const CLICK_SLOP: f32 = 6.0;
const HOOP_SEGMENTS: usize = 64;

/// Converts a linear colour plus opacity to egui.
pub fn color32(c: Vec3, alpha: f32) -> egui::Color32 {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(alpha))
}

/// World → screen for one frame: camera, viewport size and panel offset.
struct Projector<'a> {
    camera: &'a Camera,
    viewport: Viewport,
    origin: egui::Pos2,
}

impl Projector<'_> {
    /// Screen position and pixels per world unit, or `None` when clipped.
    fn project(&self, world: Vec3) -> Option<(egui::Pos2, f32, f32)> {
        let p = self.camera.project(world, self.viewport)?;
        Some((
            egui::pos2(self.origin.x + p.x, self.origin.y + p.y),
            p.pixels_per_unit,
            p.depth,
        ))
    }
}

#[derive(Clone, Copy)]
enum Body {
    HerPlanet,
    MyPlanet,
    Star(usize),
    Portal,
}

impl UniverseApp {
    pub fn draw_viewport(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let viewport = Viewport {
            width: rect.width(),
            height: rect.height(),
        };

        // ── Input ──
        if self.shell.scene_interactive() && !self.overlays.captures_pointer() {
            self.route_pointer(ui, &response, viewport, now);
            if self.universe.cursor() == Cursor::Pointer {
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        } else {
            self.universe.release_pointer();
            self.press_origin = None;
        }

        // ── Animate ──
        let frame = self.clock.tick(now);
        self.camera.update(frame.delta);
        let view = self.camera.orientation();
        self.universe.update(&frame, &view);

        // ── Paint ──
        let painter = ui.painter_at(rect);
        let proj = Projector {
            camera: &self.camera,
            viewport,
            origin: rect.min,
        };
        self.paint_scene(&painter, &proj);
    }

    fn route_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: Viewport,
        now: Instant,
    ) {
        let rect = response.rect;
        let hover = response.hover_pos();
        let ray = hover.map(|p| self.camera.ray(p.x - rect.left(), p.y - rect.top(), viewport));

        let (pressed, released, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.smooth_scroll_delta.y,
            )
        });

        let mut actions = Vec::new();
        actions.extend(self.universe.pointer_move(ray.as_ref()));

        if pressed && hover.is_some() {
            self.press_origin = hover;
            actions.extend(self.universe.pointer_down(ray.as_ref()));
        }

        if response.dragged() {
            let delta = response.drag_delta();
            self.camera.drag(delta.x, delta.y, viewport);
        }

        if released {
            let travelled = match (self.press_origin.take(), hover) {
                (Some(a), Some(b)) => a.distance(b),
                _ => 0.0,
            };
            if travelled > CLICK_SLOP {
                // A drag that ends on a star is not a click on it.
                self.universe.release_pointer();
            } else {
                actions.extend(self.universe.pointer_up(ray.as_ref()));
            }
        }

        if response.hovered() && scroll.abs() > 0.1 {
            self.camera.zoom(scroll);
        }

        for action in actions {
            self.handle_action(action, now);
        }
    }

    fn paint_scene(&self, painter: &egui::Painter, proj: &Projector<'_>) {
        for field in self.universe.point_fields() {
            for layer in field.layers() {
                paint_layer(painter, proj, None, layer);
            }
        }

        let mut bodies: Vec<(f32, Body)> = Vec::new();
        let mut push = |center: Vec3, body: Body| {
            if let Some((_, _, depth)) = proj.project(center) {
                bodies.push((depth, body));
            }
        };
        push(self.universe.her_planet().center(), Body::HerPlanet);
        push(self.universe.my_planet().group().position, Body::MyPlanet);
        for (i, star) in self.universe.memory_stars().iter().enumerate() {
            push(star.group().position, Body::Star(i));
        }
        push(self.universe.portal().group().position, Body::Portal);
        bodies.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut labels: Vec<(&Label, Transform)> = Vec::new();
        for (_, body) in bodies {
            match body {
                Body::HerPlanet => {
                    let planet = self.universe.her_planet();
                    let cfg = planet.config();
                    let group = planet.group();
                    paint_layer(painter, proj, Some(group), planet.ring());
                    for hoop in planet.hoops() {
                        paint_hoop(painter, proj, group, hoop, 1.0);
                    }
                    paint_planet(
                        painter,
                        proj,
                        group.position,
                        cfg.radius,
                        cfg.atmosphere_radius,
                        hex_color("#c71585"),
                        planet.atmosphere().color(U_COLOR),
                        planet.atmosphere().float(U_INTENSITY),
                    );
                    if let Some((pos, ppu, _)) = proj.project(group.position) {
                        painter.circle_filled(
                            pos,
                            cfg.cloud_radius * ppu,
                            color32([1.0, 0.85, 0.95], 0.08),
                        );
                    }
                    labels.push((planet.label(), *group));
                }
                Body::MyPlanet => {
                    let planet = self.universe.my_planet();
                    let cfg = planet.config();
                    let glow = planet.atmosphere().color(U_COLOR);
                    for sample in planet.trail() {
                        if let Some((pos, ppu, _)) = proj.project(sample.position) {
                            painter.circle_filled(
                                pos,
                                cfg.radius * sample.width * ppu * 0.5,
                                color32(glow, 0.4 * sample.width),
                            );
                        }
                    }
                    paint_planet(
                        painter,
                        proj,
                        planet.group().position,
                        cfg.radius,
                        cfg.radius * 1.15,
                        hex_color("#1e3a8a"),
                        glow,
                        planet.atmosphere().float(U_INTENSITY),
                    );
                    labels.push((planet.label(), *planet.group()));
                }
                Body::Star(i) => {
                    if let Some(star) = self.universe.memory_stars().get(i) {
                        paint_star(painter, proj, star);
                        labels.push((star.label(), *star.group()));
                    }
                }
                Body::Portal => {
                    let gate = self.universe.portal();
                    let group = gate.group();
                    paint_layer(painter, proj, Some(group), gate.vortex());
                    let glow = (gate.emissive() / 3.0).clamp(0.3, 1.0);
                    for hoop in gate.hoops() {
                        paint_hoop(painter, proj, group, hoop, glow);
                    }
                    if let Some((pos, ppu, _)) = proj.project(group.position) {
                        painter.circle_filled(
                            pos,
                            portal::CORE_RADIUS * gate.core_scale() * ppu,
                            color32([1.0, 0.95, 0.8], gate.core_opacity()),
                        );
                    }
                    labels.push((gate.label(), *group));
                }
            }
        }

        for (label, group) in labels {
            paint_label(painter, proj, label, &group);
        }
    }
}

fn paint_layer(painter: &egui::Painter, proj: &Projector<'_>, parent: Option<&Transform>, layer: &Layer) {
    let cloud = &layer.cloud;
    let style = layer.style;
    if style.opacity <= 0.0 {
        return;
    }
    for ((point, live), opacity) in cloud
        .points()
        .iter()
        .zip(cloud.live_positions())
        .zip(cloud.opacities())
    {
        let alpha = style.opacity * opacity;
        if alpha < 0.01 {
            continue;
        }
        let local = cloud.transform.apply(*live);
        let world = match parent {
            Some(t) => t.apply(local),
            None => local,
        };
        if let Some((pos, ppu, _)) = proj.project(world) {
            let radius = (point.size * style.size * ppu * 0.5).clamp(0.4, 3.5);
            let color = style.tint.unwrap_or(point.color);
            painter.circle_filled(pos, radius, color32(color, alpha));
        }
    }
}

fn paint_hoop(painter: &egui::Painter, proj: &Projector<'_>, group: &Transform, hoop: &Hoop, glow: f32) {
    let mut points = Vec::with_capacity(HOOP_SEGMENTS + 1);
    let mut width = 1.0_f32;
    for k in 0..=HOOP_SEGMENTS {
        let a = k as f32 / HOOP_SEGMENTS as f32 * math::TAU;
        let local = math::rotate_euler([a.cos() * hoop.radius, a.sin() * hoop.radius, 0.0], hoop.rotation);
        match proj.project(group.apply(local)) {
            Some((pos, ppu, _)) => {
                width = width.max(hoop.tube * 2.0 * ppu);
                points.push(pos);
            }
            None => {
                // Break the line where it crosses the clip range.
                if points.len() > 1 {
                    painter.add(egui::Shape::line(
                        std::mem::take(&mut points),
                        egui::Stroke::new(width, color32(hoop.color, hoop.opacity * glow)),
                    ));
                }
                points.clear();
            }
        }
    }
    if points.len() > 1 {
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(width, color32(hoop.color, hoop.opacity * glow)),
        ));
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_planet(
    painter: &egui::Painter,
    proj: &Projector<'_>,
    center: Vec3,
    radius: f32,
    atmosphere_radius: f32,
    surface: Vec3,
    rim: Vec3,
    intensity: f32,
) {
    let Some((pos, ppu, _)) = proj.project(center) else {
        return;
    };
    let rim_alpha = (0.15 * intensity).clamp(0.0, 0.5);
    painter.circle_filled(pos, atmosphere_radius * ppu * 1.1, color32(rim, rim_alpha * 0.5));
    painter.circle_filled(pos, atmosphere_radius * ppu, color32(rim, rim_alpha));
    painter.circle_filled(pos, radius * ppu, color32(surface, 1.0));
    // Lit side.
    let light = egui::vec2(-0.3, -0.3) * radius * ppu;
    painter.circle_filled(pos + light, radius * ppu * 0.6, color32(rim, 0.25));
}

fn paint_star(painter: &egui::Painter, proj: &Projector<'_>, star: &MemoryStar) {
    let Some((pos, ppu, _)) = proj.project(star.group().position) else {
        return;
    };
    let color = star.color();
    let glow = star.glow();
    let core = CORE_RADIUS * star.core().scale * ppu;

    painter.circle_filled(pos, CORE_RADIUS * glow.outer_scale * ppu, color32(color, glow.outer_opacity));
    painter.circle_filled(pos, CORE_RADIUS * glow.inner_scale * ppu, color32(color, glow.inner_opacity));

    let ray_color = color32(color, 0.35);
    for ray in star.rays() {
        let angle = ray.angle + star.rays_rotation();
        let half = ray.length * star.ray_scale() * ppu;
        let d = egui::vec2(angle.cos(), angle.sin()) * half;
        painter.line_segment([pos - d, pos + d], egui::Stroke::new(1.0, ray_color));
    }

    painter.circle_filled(pos, core, color32(color, 1.0));
    painter.circle_filled(pos, core * 0.5, color32([1.0, 1.0, 1.0], 0.9));
}

fn paint_label(painter: &egui::Painter, proj: &Projector<'_>, label: &Label, group: &Transform) {
    if label.opacity < 0.01 {
        return;
    }
    if let Some((pos, ppu, _)) = proj.project(label.world_position(group)) {
        let size = (label.size * ppu).clamp(10.0, 28.0);
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            &label.text,
            egui::FontId::proportional(size),
            color32(label.color, label.opacity),
        );
    }
}
