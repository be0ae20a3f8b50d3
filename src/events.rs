// src/events.rs

use serde::Serialize;

use crate::element::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    /// Gap above `max_span`. Reported only.
    OverSpan,
    /// Gap below `min_span`. The second element of the pair has been hidden.
    UnderSpan,
}

/// A spacing problem between two axis-adjacent visible elements.
/// `first` has the smaller axis coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpacingViolation {
    pub kind: ViolationKind,
    pub first: ElementId,
    pub second: ElementId,
    pub gap: f64,
    pub limit: f64,
}

/// Receives violations as the validation pass finds them.
pub trait SpacingObserver {
    fn on_violation(&mut self, violation: &SpacingViolation);
}

/// Silent observer.
impl SpacingObserver for () {
    fn on_violation(&mut self, _violation: &SpacingViolation) {}
}

/// Collects every violation in the order it was reported.
impl SpacingObserver for Vec<SpacingViolation> {
    fn on_violation(&mut self, violation: &SpacingViolation) {
        self.push(*violation);
    }
}

impl<T: SpacingObserver + ?Sized> SpacingObserver for Box<T> {
    fn on_violation(&mut self, violation: &SpacingViolation) {
        (**self).on_violation(violation);
    }
}

/// Default observer: routes violations to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl SpacingObserver for LogObserver {
    fn on_violation(&mut self, violation: &SpacingViolation) {
        match violation.kind {
            ViolationKind::OverSpan => log::warn!(
                "span between {} and {} ({}m) exceeds max span ({}m)",
                violation.first,
                violation.second,
                violation.gap,
                violation.limit
            ),
            ViolationKind::UnderSpan => log::info!(
                "span {}m is below min span ({}m), element {} hidden",
                violation.gap,
                violation.limit,
                violation.second
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: ViolationKind) -> SpacingViolation {
        SpacingViolation {
            kind,
            first: 1,
            second: 2,
            gap: 1.0,
            limit: 1.5,
        }
    }

    #[test]
    fn vec_observer_records_in_order() {
        let mut seen: Vec<SpacingViolation> = Vec::new();
        seen.on_violation(&sample(ViolationKind::OverSpan));
        seen.on_violation(&sample(ViolationKind::UnderSpan));
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].kind, ViolationKind::OverSpan);
        assert_eq!(seen[1].kind, ViolationKind::UnderSpan);
    }

    #[test]
    fn boxed_observer_forwards() {
        let mut boxed: Box<Vec<SpacingViolation>> = Box::default();
        boxed.on_violation(&sample(ViolationKind::UnderSpan));
        assert_eq!(boxed.len(), 1);
    }
}
