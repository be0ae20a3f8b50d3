// src/house.rs

use crate::config::GridConfig;
use crate::element::{Element, ElementId};
use crate::events::{LogObserver, SpacingObserver};
use crate::generator::AnchorGenerator;
use crate::grid::{HideOutcome, LayoutGrid};
use crate::status::GridStatus;

/// A house footprint owning the column grid along its width.
#[derive(Debug)]
pub struct House<O = LogObserver> {
    width: f64,
    depth: f64,
    grid: LayoutGrid<O>,
}

impl House<LogObserver> {
    pub fn new(width: f64, depth: f64, config: GridConfig) -> Self {
        Self::with_grid(width, depth, LayoutGrid::new(config))
    }
}

impl<O: SpacingObserver> House<O> {
    pub fn with_grid(width: f64, depth: f64, grid: LayoutGrid<O>) -> Self {
        log::info!("created house {}x{}m", width, depth);
        Self { width, depth, grid }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Only records the new width. Existing columns are left where they are.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        log::info!("house width changed to {}m", width);
    }

    /// Adds generated anchor columns along the full width at `y = 0`.
    pub fn place_anchors(&mut self) -> Vec<ElementId> {
        AnchorGenerator::evenly_spaced(0.0, self.width, self.grid.config().max_span())
            .into_iter()
            .map(|point| self.grid.add_generated_element(point.x, point.y))
            .collect()
    }

    pub fn add_column(&mut self, x: f64, y: f64) -> ElementId {
        log::debug!("house: add column at x = {}", x);
        self.grid.add_element(x, y)
    }

    pub fn hide_column(&mut self, id: ElementId) -> HideOutcome {
        self.grid.hide_element(id)
    }

    pub fn columns(&self) -> &[Element] {
        self.grid.elements()
    }

    pub fn status(&self) -> GridStatus {
        self.grid.status()
    }

    pub fn grid(&self) -> &LayoutGrid<O> {
        &self.grid
    }
}
