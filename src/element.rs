// src/element.rs

use glam::{DVec2, DVec3};
use serde::Serialize;

pub type ElementId = usize;

/// Who placed an element. Generated elements are anchors placed by the system
/// and cannot be hidden through the grid's public API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Origin {
    #[default]
    Generated,
    UserAdded,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Generated => f.write_str("Generated"),
            Origin::UserAdded => f.write_str("UserAdded"),
        }
    }
}

/// One placed column. Only visibility can change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    id: ElementId,
    position: DVec2, // x is the layout axis, y is carried along
    visible: bool,
    origin: Origin,
}

impl Element {
    pub fn new(id: ElementId, x: f64, y: f64, origin: Origin) -> Self {
        Self {
            id,
            position: DVec2::new(x, y),
            visible: true,
            origin,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Coordinate along the layout axis.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Ground-plane placement for a renderer: the grid's y becomes world z.
    pub fn world_translation(&self) -> DVec3 {
        DVec3::new(self.position.x, 0.0, self.position.y)
    }
}
