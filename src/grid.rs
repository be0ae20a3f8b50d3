// src/grid.rs

use crate::config::GridConfig;
use crate::element::{Element, ElementId, Origin};
use crate::events::{LogObserver, SpacingObserver, SpacingViolation, ViolationKind};
use crate::status::{GridStatus, StatusEntry};

/// What `hide_element` did with the requested id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideOutcome {
    Hidden,
    AlreadyHidden,
    /// The element is a generated anchor and was left untouched.
    Protected,
    NotFound,
}

/// Columns placed along one axis with spacing limits between visible
/// neighbours.
///
/// Every mutation runs a validation pass before returning. The pass walks the
/// visible elements in axis order, reports gaps wider than `max_span`, and
/// hides the right-hand element of any pair closer than `min_span`, restarting
/// until a full scan finds nothing to hide. Elements are never removed, so
/// hidden ones stay available through [`elements`](Self::elements) and
/// [`status`](Self::status).
#[derive(Debug)]
pub struct LayoutGrid<O = LogObserver> {
    elements: Vec<Element>,
    config: GridConfig,
    observer: O,
}

impl LayoutGrid<LogObserver> {
    pub fn new(config: GridConfig) -> Self {
        Self::with_observer(config, LogObserver)
    }
}

impl Default for LayoutGrid<LogObserver> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<O: SpacingObserver> LayoutGrid<O> {
    pub fn with_observer(config: GridConfig, observer: O) -> Self {
        Self {
            elements: Vec::new(),
            config,
            observer,
        }
    }

    /// Adds a user column and revalidates. The new column may end up hidden.
    pub fn add_element(&mut self, x: f64, y: f64) -> ElementId {
        self.push_element(x, y, Origin::UserAdded)
    }

    /// Adds a generated anchor. Anchors cannot be hidden through
    /// [`hide_element`](Self::hide_element), but validation still treats them
    /// like any other column.
    pub fn add_generated_element(&mut self, x: f64, y: f64) -> ElementId {
        self.push_element(x, y, Origin::Generated)
    }

    fn push_element(&mut self, x: f64, y: f64, origin: Origin) -> ElementId {
        // Ids count every element ever added, hidden ones included.
        let id: ElementId = self.elements.len() + 1;
        self.elements.push(Element::new(id, x, y, origin));
        log::info!("added element {} ({}) at ({}, {})", id, origin, x, y);
        self.validate();
        id
    }

    pub fn hide_element(&mut self, id: ElementId) -> HideOutcome {
        let Some(element) = self.elements.iter_mut().find(|e| e.id() == id) else {
            log::debug!("hide ignored: no element {}", id);
            return HideOutcome::NotFound;
        };
        if element.origin() == Origin::Generated {
            log::debug!("hide ignored: element {} is a generated anchor", id);
            return HideOutcome::Protected;
        }

        let was_visible = element.is_visible();
        element.set_visible(false);
        log::info!("element {} hidden", id);
        self.validate();

        if was_visible {
            HideOutcome::Hidden
        } else {
            HideOutcome::AlreadyHidden
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Visible elements sorted along the axis, ties broken by id. NaN
    /// coordinates sort after every number.
    pub fn visible_elements(&self) -> Vec<&Element> {
        self.visible_order()
            .into_iter()
            .map(|index| &self.elements[index])
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_visible()).count()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn status(&self) -> GridStatus {
        GridStatus {
            max_span: self.config.max_span(),
            min_span: self.config.min_span(),
            entries: self.elements.iter().map(StatusEntry::from).collect(),
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    fn visible_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_visible())
            .map(|(index, _)| index)
            .collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (&self.elements[a], &self.elements[b]);
            a.x()
                .is_nan()
                .cmp(&b.x().is_nan())
                .then_with(|| a.x().total_cmp(&b.x()))
                .then(a.id().cmp(&b.id()))
        });
        order
    }

    /// Runs scans until one completes without hiding anything. Each restart
    /// hides one element, so this loops at most `visible_count() + 1` times.
    fn validate(&mut self) {
        let max_span = self.config.max_span();
        let min_span = self.config.min_span();
        let mut restarts = 0usize;

        loop {
            let order = self.visible_order();
            log::debug!("validating {} visible elements", order.len());

            let mut to_hide = None;
            for pair in order.windows(2) {
                let first = &self.elements[pair[0]];
                let second = &self.elements[pair[1]];
                let gap = second.x() - first.x();

                if gap > max_span {
                    self.observer.on_violation(&SpacingViolation {
                        kind: ViolationKind::OverSpan,
                        first: first.id(),
                        second: second.id(),
                        gap,
                        limit: max_span,
                    });
                }

                // A NaN gap (NaN or equal infinite coordinates) counts as
                // under-spaced, so non-finite columns cannot sit side by side.
                if !(gap >= min_span) {
                    self.observer.on_violation(&SpacingViolation {
                        kind: ViolationKind::UnderSpan,
                        first: first.id(),
                        second: second.id(),
                        gap,
                        limit: min_span,
                    });
                    to_hide = Some(pair[1]);
                    break;
                }
            }

            match to_hide {
                Some(index) => {
                    self.elements[index].set_visible(false);
                    restarts += 1;
                }
                None => break,
            }
        }

        if restarts > 0 {
            log::debug!("validation settled after hiding {} element(s)", restarts);
        }
    }
}
