//! Dispatcher-driven reordering of a tour.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Stop, Tour};

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward the start of the tour (swap with predecessor).
    Up,
    /// Toward the end of the tour (swap with successor).
    Down,
}

/// Result of a [`SequenceEditor::move_stop`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stop at `from` now sits at `to`, and vice versa.
    Moved {
        /// Original index of the moved stop.
        from: usize,
        /// New index of the moved stop.
        to: usize,
    },
    /// Boundary or out-of-range request; the sequence is unchanged.
    NoOp,
}

impl MoveOutcome {
    /// Returns `true` if the sequence changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Holds the working tour for an editing session.
///
/// The only mutation is an adjacent swap, so the set of stops is the one the
/// tour was built with for the editor's whole lifetime.
///
/// # Examples
///
/// ```
/// use aqua_route::models::{Point, Stop};
/// use aqua_route::constructive::nearest_neighbor_tour;
/// use aqua_route::editing::{Direction, MoveOutcome, SequenceEditor};
///
/// let depot = Point::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::new("a", Point::new(0.0, 0.01).unwrap(), ()),
///     Stop::new("b", Point::new(0.0, 0.02).unwrap(), ()),
///     Stop::new("c", Point::new(0.0, 0.03).unwrap(), ()),
/// ];
/// let mut editor = SequenceEditor::new(nearest_neighbor_tour(&depot, &stops).unwrap());
///
/// assert_eq!(editor.move_stop(0, Direction::Up), MoveOutcome::NoOp);
/// assert!(editor.move_stop(1, Direction::Up).is_moved());
/// assert_eq!(editor.tour().ids(), vec!["b", "a", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceEditor<A> {
    tour: Tour<A>,
}

impl<A> SequenceEditor<A> {
    /// Starts an editing session over `tour`.
    pub fn new(tour: Tour<A>) -> Self {
        Self { tour }
    }

    /// Index the stop at `index` would move to, if the move is allowed.
    fn target(&self, index: usize, direction: Direction) -> Option<usize> {
        if index >= self.tour.len() {
            return None;
        }
        match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&t| t < self.tour.len()),
        }
    }

    /// Returns `true` if [`move_stop`](Self::move_stop) would change the
    /// sequence.
    pub fn can_move(&self, index: usize, direction: Direction) -> bool {
        self.target(index, direction).is_some()
    }

    /// Swaps the stop at `index` with its neighbour in `direction`.
    ///
    /// Moving the first stop up, the last stop down, or any index past the
    /// end is a no-op.
    pub fn move_stop(&mut self, index: usize, direction: Direction) -> MoveOutcome {
        match self.target(index, direction) {
            Some(to) => {
                self.tour.swap(index, to);
                debug!("moved stop {index} {direction:?} to {to}");
                MoveOutcome::Moved { from: index, to }
            }
            None => MoveOutcome::NoOp,
        }
    }

    /// Present visit order.
    pub fn current_order(&self) -> &[Stop<A>] {
        self.tour.stops()
    }

    /// The working tour.
    pub fn tour(&self) -> &Tour<A> {
        &self.tour
    }

    /// Number of stops being edited.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if there is nothing to edit.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// Ends the session, handing the final order onward.
    pub fn into_tour(self) -> Tour<A> {
        self.tour
    }
}
