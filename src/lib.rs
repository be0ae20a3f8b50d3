// src/lib.rs

pub mod config;
pub mod element;
pub mod events;
pub mod generator;
pub mod grid;
pub mod house;
pub mod status;

pub use config::{ConfigError, GridConfig};
pub use element::{Element, ElementId, Origin};
pub use events::{LogObserver, SpacingObserver, SpacingViolation, ViolationKind};
pub use generator::AnchorGenerator;
pub use grid::{HideOutcome, LayoutGrid};
pub use house::House;
pub use status::{GridStatus, StatusEntry};
