// src/status.rs

use std::fmt;

use serde::Serialize;

use crate::element::{Element, ElementId, Origin};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusEntry {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub origin: Origin,
}

impl From<&Element> for StatusEntry {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id(),
            x: element.x(),
            y: element.y(),
            visible: element.is_visible(),
            origin: element.origin(),
        }
    }
}

/// Snapshot of a grid: its spans and every element in insertion order,
/// hidden ones included.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridStatus {
    pub max_span: f64,
    pub min_span: f64,
    pub entries: Vec<StatusEntry>,
}

impl GridStatus {
    pub fn visible_ids(&self) -> Vec<ElementId> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn hidden_ids(&self) -> Vec<ElementId> {
        self.entries
            .iter()
            .filter(|entry| !entry.visible)
            .map(|entry| entry.id)
            .collect()
    }
}

impl fmt::Display for GridStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "--- Grid status (max: {}m, min: {}m) ---",
            self.max_span, self.min_span
        )?;
        for entry in &self.entries {
            writeln!(
                f,
                "ID: {}, X: {}m, Y: {}m, Visible: {}, Origin: {}",
                entry.id, entry.x, entry.y, entry.visible, entry.origin
            )?;
        }
        Ok(())
    }
}
