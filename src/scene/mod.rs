//! Scene composition.
//!
//! `Universe` owns every field and body, created exactly once, and drives
//! them from the frame clock. It also owns pointer routing for the 3D scene:
//! rays are picked against the pick spheres registered this frame and the
//! resulting clicks come back out as `UniverseAction`s, untouched.

pub mod layout;

use crate::body::her_planet::{HerPlanet, HerPlanetConfig};
use crate::body::memory_star::MemoryStar;
use crate::body::my_planet::{MyPlanet, MyPlanetConfig};
use crate::body::portal::{GatewayPortal, PortalConfig};
use crate::body::Interactive;
use crate::content::Memory;
use crate::field::hearts::{FloatingHearts, HeartsConfig};
use crate::field::nebula::{Nebula, NebulaConfig};
use crate::field::ring::{OrbitPath, OrbitPathConfig};
use crate::field::starfield::{StarField, StarFieldConfig};
use crate::field::PointField;
use crate::input::picking::{self, Cursor, HitTarget, PickRouter, PointerEvent, Ray};
use crate::render::animator::Animated;
use crate::render::camera::{CameraConfig, Orientation};
use crate::render::clock::FrameContext;

pub use layout::LayoutConfig;

/// Every scene tunable in one place.
#[derive(Debug, Clone, Default)]
pub struct UniverseConfig {
    pub camera: CameraConfig,
    pub layout: LayoutConfig,
    pub stars: StarFieldConfig,
    pub nebula: NebulaConfig,
    pub hearts: HeartsConfig,
    pub orbit_path: OrbitPathConfig,
    pub her_planet: HerPlanetConfig,
    pub my_planet: MyPlanetConfig,
    pub portal: PortalConfig,
}

/// What the pointer can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Index into the memory star list.
    MemoryStar(usize),
    Portal,
}

/// Upward notification from the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum UniverseAction {
    SelectMemory(Memory),
    ActivateGateway,
}

pub struct Universe {
    stars: StarField,
    nebula: Nebula,
    hearts: FloatingHearts,
    orbit_path: OrbitPath,
    her_planet: HerPlanet,
    my_planet: MyPlanet,
    memory_stars: Vec<MemoryStar>,
    portal: GatewayPortal,
    targets: Vec<HitTarget<Target>>,
    router: PickRouter<Target>,
}

impl Universe {
    pub fn new(cfg: &UniverseConfig, memories: &[Memory]) -> Self {
        let count = memories.len();
        let memory_stars = memories
            .iter()
            .enumerate()
            .map(|(i, m)| MemoryStar::new(*m, layout::orbit_position(i, count, &cfg.layout)))
            .collect();
        let mut universe = Self {
            stars: StarField::new(&cfg.stars),
            nebula: Nebula::new(&cfg.nebula),
            hearts: FloatingHearts::new(&cfg.hearts),
            orbit_path: OrbitPath::new(&cfg.orbit_path),
            her_planet: HerPlanet::new(cfg.her_planet.clone()),
            my_planet: MyPlanet::new(cfg.my_planet.clone()),
            memory_stars,
            portal: GatewayPortal::new(cfg.portal.clone()),
            targets: Vec::with_capacity(count + 1),
            router: PickRouter::new(),
        };
        universe.register_targets();
        log::info!("universe ready: {} memory stars", count);
        universe
    }

    // ── Accessors ──

    pub fn star_field(&self) -> &StarField {
        &self.stars
    }

    pub fn nebula(&self) -> &Nebula {
        &self.nebula
    }

    pub fn hearts(&self) -> &FloatingHearts {
        &self.hearts
    }

    pub fn orbit_path(&self) -> &OrbitPath {
        &self.orbit_path
    }

    pub fn her_planet(&self) -> &HerPlanet {
        &self.her_planet
    }

    pub fn my_planet(&self) -> &MyPlanet {
        &self.my_planet
    }

    pub fn memory_stars(&self) -> &[MemoryStar] {
        &self.memory_stars
    }

    pub fn portal(&self) -> &GatewayPortal {
        &self.portal
    }

    /// Background point fields, back to front.
    pub fn point_fields(&self) -> [&dyn PointField; 4] {
        [&self.stars, &self.nebula, &self.hearts, &self.orbit_path]
    }

    pub fn hit_targets(&self) -> &[HitTarget<Target>] {
        &self.targets
    }

    pub fn cursor(&self) -> Cursor {
        self.router.cursor()
    }

    // ── Picking ──

    fn register_targets(&mut self) {
        self.targets.clear();
        for (i, star) in self.memory_stars.iter().enumerate() {
            let (center, radius) = star.hit_sphere();
            self.targets.push(HitTarget {
                id: Target::MemoryStar(i),
                center,
                radius,
            });
        }
        let (center, radius) = self.portal.hit_sphere();
        self.targets.push(HitTarget {
            id: Target::Portal,
            center,
            radius,
        });
    }

    /// Closest target along `ray`.
    pub fn pick(&self, ray: Option<&Ray>) -> Option<Target> {
        ray.and_then(|r| picking::pick(r, &self.targets)).map(|h| h.id)
    }

    pub fn pointer_move(&mut self, ray: Option<&Ray>) -> Option<UniverseAction> {
        let hit = self.pick(ray);
        let events = self.router.pointer_move(hit);
        self.dispatch(events)
    }

    pub fn pointer_down(&mut self, ray: Option<&Ray>) -> Option<UniverseAction> {
        let hit = self.pick(ray);
        let events = self.router.pointer_down(hit);
        self.dispatch(events)
    }

    pub fn pointer_up(&mut self, ray: Option<&Ray>) -> Option<UniverseAction> {
        let hit = self.pick(ray);
        let events = self.router.pointer_up(hit);
        self.dispatch(events)
    }

    /// An overlay took the pointer: reset hover and press, emit nothing.
    pub fn release_pointer(&mut self) {
        for event in self.router.release() {
            if let Some(body) = self.body_mut(event.target()) {
                body.pointer(event.kind());
            }
        }
    }

    fn body_mut(&mut self, target: Target) -> Option<&mut dyn Interactive> {
        match target {
            Target::MemoryStar(i) => self
                .memory_stars
                .get_mut(i)
                .map(|s| s as &mut dyn Interactive),
            Target::Portal => Some(&mut self.portal as &mut dyn Interactive),
        }
    }

    fn dispatch(&mut self, events: Vec<PointerEvent<Target>>) -> Option<UniverseAction> {
        let mut action = None;
        for event in events {
            let target = event.target();
            let clicked = match self.body_mut(target) {
                Some(body) => body.pointer(event.kind()),
                None => false,
            };
            if clicked {
                action = match target {
                    Target::MemoryStar(i) => self
                        .memory_stars
                        .get(i)
                        .map(|s| UniverseAction::SelectMemory(*s.memory())),
                    Target::Portal => Some(UniverseAction::ActivateGateway),
                };
            }
        }
        if let Some(a) = &action {
            log::debug!("universe action: {:?}", a);
        }
        action
    }
}

impl Animated for Universe {
    fn update(&mut self, frame: &FrameContext, view: &Orientation) {
        self.stars.update(frame, view);
        self.nebula.update(frame, view);
        self.hearts.update(frame, view);
        self.orbit_path.update(frame, view);
        self.her_planet.update(frame, view);
        self.my_planet.update(frame, view);
        for star in &mut self.memory_stars {
            star.update(frame, view);
        }
        self.portal.update(frame, view);
        self.register_targets();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::HoverState;
    use crate::content::MEMORIES;
    use crate::math;

    fn small_config() -> UniverseConfig {
        let mut cfg = UniverseConfig::default();
        for layer in &mut cfg.stars.layers {
            layer.count = layer.count.min(200);
        }
        cfg
    }

    fn universe() -> Universe {
        let mut u = Universe::new(&small_config(), MEMORIES);
        u.update(&FrameContext::at(1.0), &Orientation::default());
        u
    }

    /// A ray from just in front of a target, straight through its center.
    fn ray_at(u: &Universe, target: Target) -> Ray {
        let hit = u
            .hit_targets()
            .iter()
            .find(|t| t.id == target)
            .expect("registered");
        Ray::new(math::add(hit.center, [0.0, 0.0, 5.0]), [0.0, 0.0, -1.0])
    }

    #[test]
    fn every_body_registers_a_target() {
        let u = universe();
        assert_eq!(u.memory_stars().len(), MEMORIES.len());
        assert_eq!(u.hit_targets().len(), MEMORIES.len() + 1);
    }

    #[test]
    fn click_on_star_seven_selects_memory_seven_once() {
        let mut u = universe();
        let index = MEMORIES.iter().position(|m| m.id == 7).expect("id 7");
        let ray = ray_at(&u, Target::MemoryStar(index));

        let mut actions = Vec::new();
        actions.extend(u.pointer_move(Some(&ray)));
        actions.extend(u.pointer_down(Some(&ray)));
        actions.extend(u.pointer_up(Some(&ray)));

        assert_eq!(actions.len(), 1);
        match &actions[0] {
            UniverseAction::SelectMemory(m) => assert_eq!(m.id, 7),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(u.cursor(), Cursor::Pointer);
    }

    #[test]
    fn portal_click_activates_gateway() {
        let mut u = universe();
        let ray = ray_at(&u, Target::Portal);
        assert_eq!(u.pointer_down(Some(&ray)), None);
        assert_eq!(u.pointer_up(Some(&ray)), Some(UniverseAction::ActivateGateway));
    }

    #[test]
    fn drag_off_target_does_not_click() {
        let mut u = universe();
        let ray = ray_at(&u, Target::MemoryStar(0));
        u.pointer_down(Some(&ray));
        assert_eq!(u.pointer_up(None), None);
        assert_eq!(u.memory_stars()[0].hover_state(), HoverState::Idle);
    }

    #[test]
    fn overlay_capture_resets_hover() {
        let mut u = universe();
        let ray = ray_at(&u, Target::MemoryStar(2));
        u.pointer_down(Some(&ray));
        assert_eq!(u.memory_stars()[2].hover_state(), HoverState::Pressed);
        u.release_pointer();
        assert_eq!(u.memory_stars()[2].hover_state(), HoverState::Idle);
        assert_eq!(u.cursor(), Cursor::Default);
    }

    #[test]
    fn same_time_same_scene() {
        let mut u = universe();
        let before: Vec<_> = u.hit_targets().to_vec();
        let planet = *u.my_planet().group();
        u.update(&FrameContext::at(1.0), &Orientation::default());
        assert_eq!(before, u.hit_targets());
        assert_eq!(planet, *u.my_planet().group());
    }
}
