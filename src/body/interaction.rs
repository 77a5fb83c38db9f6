//! Hover / press state for clickable bodies.
//!
//! ```text
//! Idle ──over──▶ Hovered ──down──▶ Pressed
//!  ▲               │  ▲               │
//!  └─────out───────┘  └──────up───────┘
//!  ▲                                  │
//!  └──────────────out─────────────────┘
//! ```
//!
//! Pointer-out always resets to `Idle`, whatever the press state.

use crate::input::picking::PointerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl HoverState {
    pub fn pointer_over(self) -> Self {
        match self {
            HoverState::Idle => HoverState::Hovered,
            other => other,
        }
    }

    /// Only a hovered body can be pressed.
    pub fn pointer_down(self) -> Self {
        match self {
            HoverState::Hovered => HoverState::Pressed,
            other => other,
        }
    }

    pub fn pointer_up(self) -> Self {
        match self {
            HoverState::Pressed => HoverState::Hovered,
            other => other,
        }
    }

    pub fn pointer_out(self) -> Self {
        HoverState::Idle
    }

    /// Transition for a routed pointer event. Clicks do not change state.
    pub fn apply(self, kind: PointerKind) -> Self {
        match kind {
            PointerKind::Enter => self.pointer_over(),
            PointerKind::Leave => self.pointer_out(),
            PointerKind::Down => self.pointer_down(),
            PointerKind::Up => self.pointer_up(),
            PointerKind::Click => self,
        }
    }

    pub fn is_hovered(self) -> bool {
        matches!(self, HoverState::Hovered | HoverState::Pressed)
    }

    pub fn is_pressed(self) -> bool {
        self == HoverState::Pressed
    }

    /// 1.0 while hovered or pressed, else 0.0.
    pub fn hover_target(self) -> f32 {
        if self.is_hovered() {
            1.0
        } else {
            0.0
        }
    }
}
