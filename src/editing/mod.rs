//! Manual correction of a built tour.
//!
//! - [`SequenceEditor`] — adjacent swaps over the working order

mod sequence_editor;

pub use sequence_editor::{Direction, MoveOutcome, SequenceEditor};
