//! Pointer picking and event routing.
//!
//! Turns raw pointer input into per-object events:
//! - Enter / Leave: hover changes (Leave always precedes the next Enter)
//! - Down / Up: press tracking on the hovered object
//! - Click: down and up on the same object, exactly once
//!
//! Hit testing casts a camera ray against invisible spheres; the closest
//! intersection along the ray wins, so a body in front always occludes the
//! ones behind it. Ties go to the target registered first.

use crate::math::{self, Vec3};

// ── Ray ──

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: math::normalize(direction),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        math::add(self.origin, math::scale(self.direction, t))
    }

    /// Distance to the first intersection with a sphere, if any lies ahead.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = math::sub(self.origin, center);
        let b = math::dot(oc, self.direction);
        let c = math::length_squared(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let near = -b - sq;
        if near >= 0.0 {
            return Some(near);
        }
        // Origin inside the sphere: report the exit point.
        let far = -b + sq;
        (far >= 0.0).then_some(far)
    }
}

// ── Hit targets ──

/// Invisible pick sphere registered by an interactive body for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTarget<T> {
    pub id: T,
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<T> {
    pub id: T,
    pub distance: f32,
}

/// Closest target along the ray.
pub fn pick<T: Copy>(ray: &Ray, targets: &[HitTarget<T>]) -> Option<Hit<T>> {
    let mut best: Option<Hit<T>> = None;
    for target in targets {
        if let Some(d) = ray.intersect_sphere(target.center, target.radius) {
            if best.map_or(true, |b| d < b.distance) {
                best = Some(Hit {
                    id: target.id,
                    distance: d,
                });
            }
        }
    }
    best
}

// ── Events ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent<T> {
    Enter(T),
    Leave(T),
    Down(T),
    Up(T),
    Click(T),
}

/// A pointer event with the target stripped, as seen by the target itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
    Down,
    Up,
    Click,
}

impl<T: Copy> PointerEvent<T> {
    pub fn target(&self) -> T {
        match *self {
            PointerEvent::Enter(t)
            | PointerEvent::Leave(t)
            | PointerEvent::Down(t)
            | PointerEvent::Up(t)
            | PointerEvent::Click(t) => t,
        }
    }

    pub fn kind(&self) -> PointerKind {
        match self {
            PointerEvent::Enter(_) => PointerKind::Enter,
            PointerEvent::Leave(_) => PointerKind::Leave,
            PointerEvent::Down(_) => PointerKind::Down,
            PointerEvent::Up(_) => PointerKind::Up,
            PointerEvent::Click(_) => PointerKind::Click,
        }
    }
}

/// Shared cursor affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Routes picked hits to hover/press/click events for a single object.
#[derive(Debug, Clone)]
pub struct PickRouter<T> {
    hovered: Option<T>,
    pressed: Option<T>,
    cursor: Cursor,
}

impl<T> Default for PickRouter<T> {
    fn default() -> Self {
        Self {
            hovered: None,
            pressed: None,
            cursor: Cursor::Default,
        }
    }
}

impl<T: Copy + PartialEq + std::fmt::Debug> PickRouter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<T> {
        self.hovered
    }

    pub fn pressed(&self) -> Option<T> {
        self.pressed
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Pointer moved; `hit` is the closest target under it.
    pub fn pointer_move(&mut self, hit: Option<T>) -> Vec<PointerEvent<T>> {
        let mut events = Vec::new();
        self.retarget(hit, &mut events);
        events
    }

    /// Pointer pressed over `hit`.
    pub fn pointer_down(&mut self, hit: Option<T>) -> Vec<PointerEvent<T>> {
        let mut events = Vec::new();
        self.retarget(hit, &mut events);
        if let Some(target) = self.hovered {
            self.pressed = Some(target);
            events.push(PointerEvent::Down(target));
        }
        events
    }

    /// Pointer released over `hit`.
    ///
    /// The hovered object always receives `Up`, even without a matching
    /// `Down`. `Click` fires only when the press started on the same object.
    pub fn pointer_up(&mut self, hit: Option<T>) -> Vec<PointerEvent<T>> {
        let mut events = Vec::new();
        let pressed = self.pressed.take();
        self.retarget(hit, &mut events);
        if let Some(target) = self.hovered {
            events.push(PointerEvent::Up(target));
            if pressed == Some(target) {
                log::debug!("click on {:?}", target);
                events.push(PointerEvent::Click(target));
            }
        }
        events
    }

    /// The pointer left the scene or an overlay captured it.
    pub fn release(&mut self) -> Vec<PointerEvent<T>> {
        let mut events = Vec::new();
        self.pressed = None;
        self.retarget(None, &mut events);
        events
    }

    fn retarget(&mut self, hit: Option<T>, events: &mut Vec<PointerEvent<T>>) {
        if self.hovered == hit {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            if self.pressed == Some(prev) {
                self.pressed = None;
            }
            events.push(PointerEvent::Leave(prev));
        }
        if let Some(next) = hit {
            events.push(PointerEvent::Enter(next));
        }
        self.hovered = hit;
        self.cursor = if hit.is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Vec<HitTarget<u32>> {
        vec![
            HitTarget { id: 1, center: [0.0, 0.0, -10.0], radius: 1.5 },
            HitTarget { id: 2, center: [0.0, 0.0, -20.0], radius: 4.0 },
        ]
    }

    #[test]
    fn closest_hit_wins() {
        let ray = Ray::new([0.0, 0.0, 0.0], [0.0, 0.0, -1.0]);
        let hit = pick(&ray, &targets()).expect("hit");
        assert_eq!(hit.id, 1);
        assert!((hit.distance - 8.5).abs() < 1e-4);
    }

    #[test]
    fn occluded_target_reachable_off_axis() {
        // Passes beside the small sphere but inside the large one.
        let ray = Ray::new([0.0, 0.0, 0.0], [0.18, 0.0, -1.0]);
        assert_eq!(pick(&ray, &targets()).map(|h| h.id), Some(2));
    }

    #[test]
    fn miss_returns_none() {
        let ray = Ray::new([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(pick(&ray, &targets()).is_none());
    }

    #[test]
    fn leave_precedes_enter() {
        let mut router = PickRouter::new();
        router.pointer_move(Some(1));
        let events = router.pointer_move(Some(2));
        assert_eq!(events, vec![PointerEvent::Leave(1), PointerEvent::Enter(2)]);
        assert_eq!(router.cursor(), Cursor::Pointer);
        router.pointer_move(None);
        assert_eq!(router.cursor(), Cursor::Default);
    }

    #[test]
    fn click_requires_down_and_up_on_same_target() {
        let mut router = PickRouter::new();
        router.pointer_down(Some(1));
        let events = router.pointer_up(Some(1));
        assert_eq!(events, vec![PointerEvent::Up(1), PointerEvent::Click(1)]);

        router.pointer_down(Some(1));
        let events = router.pointer_up(Some(2));
        assert!(!events.contains(&PointerEvent::Click(2)));
        assert!(!events.contains(&PointerEvent::Click(1)));
    }

    #[test]
    fn up_without_down_still_releases() {
        let mut router = PickRouter::new();
        router.pointer_move(Some(1));
        let events = router.pointer_up(Some(1));
        assert_eq!(events, vec![PointerEvent::Up(1)]);
        assert_eq!(router.pressed(), None);
    }

    #[test]
    fn release_resets_hover_and_press() {
        let mut router = PickRouter::new();
        router.pointer_down(Some(1));
        let events = router.release();
        assert_eq!(events, vec![PointerEvent::Leave(1)]);
        assert_eq!(router.hovered(), None);
        assert_eq!(router.pressed(), None);
        assert_eq!(router.cursor(), Cursor::Default);
    }
}
