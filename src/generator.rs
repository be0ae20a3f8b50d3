// src/generator.rs

use glam::DVec2;

pub struct AnchorGenerator;

impl AnchorGenerator {
    /// Positions along `x` from `start` to `start + length`, split into the
    /// fewest equal bays that keep each bay within `max_span`. Both ends always
    /// get a position.
    pub fn evenly_spaced(start: f64, length: f64, max_span: f64) -> Vec<DVec2> {
        if !(length > 0.0) {
            return vec![DVec2::new(start, 0.0)];
        }

        let bays = if max_span.is_finite() && max_span > 0.0 {
            ((length / max_span).ceil() as usize).max(1)
        } else {
            1
        };
        let bay = length / bays as f64;

        let mut points = Vec::with_capacity(bays + 1);
        for i in 0..bays {
            points.push(DVec2::new(start + bay * i as f64, 0.0));
        }
        // Last point placed exactly to avoid accumulated rounding.
        points.push(DVec2::new(start + length, 0.0));
        points
    }
}
