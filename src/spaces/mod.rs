//! Spaces: sets of possible observations and actions.
mod boolean;
mod history;
mod index;
mod interval;
#[cfg(test)]
pub mod testing;

pub use boolean::BooleanSpace;
pub use history::{HistoryObservation, HistoryObservationSpace, HistorySpace};
pub use index::IndexSpace;
pub use interval::IntervalSpace;

use rand::distributions::Distribution;

/// A space: a set of values with some added structure.
///
/// A space describes the shape and bounds of observations or actions
/// without storing any particular element.
pub trait Space {
    /// Type of elements in the space.
    type Element;

    /// Check whether a particular value is contained in the space.
    fn contains(&self, value: &Self::Element) -> bool;
}

/// A space from which samples can be drawn.
///
/// No particular distribution is specified. The samples must be contained in the space.
pub trait SampleSpace: Space + Distribution<<Self as Space>::Element> {}

impl<S: Space + Distribution<<S as Space>::Element>> SampleSpace for S {}

/// A space with a designated padding element.
///
/// The padding element fills history slots for which no real value exists yet,
/// for example the action preceding the first observation of an episode.
pub trait PadSpace: Space {
    /// The padding element. Must be contained in the space.
    fn pad_element(&self) -> Self::Element;
}

impl<S: Space + ?Sized> Space for Box<S> {
    type Element = S::Element;

    fn contains(&self, value: &Self::Element) -> bool {
        S::contains(self, value)
    }
}

impl<S: PadSpace + ?Sized> PadSpace for Box<S> {
    fn pad_element(&self) -> Self::Element {
        S::pad_element(self)
    }
}
