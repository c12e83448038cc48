//! History spaces: fixed-length windows of recent elements.
use super::{PadSpace, Space};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;

/// A window of exactly `len` elements of an inner space, ordered oldest first.
///
/// Like a Cartesian power of the inner space except that the length is chosen at runtime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistorySpace<S> {
    pub inner_space: S,
    pub len: usize,
}

impl<S> HistorySpace<S> {
    pub const fn new(inner_space: S, len: usize) -> Self {
        Self { inner_space, len }
    }
}

impl<S: fmt::Display> fmt::Display for HistorySpace<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HistorySpace({}, {})", self.inner_space, self.len)
    }
}

impl<S: Space> Space for HistorySpace<S> {
    type Element = Vec<S::Element>;

    fn contains(&self, value: &Self::Element) -> bool {
        value.len() == self.len && value.iter().all(|v| self.inner_space.contains(v))
    }
}

impl<S: PadSpace> PadSpace for HistorySpace<S> {
    fn pad_element(&self) -> Self::Element {
        iter::repeat_with(|| self.inner_space.pad_element())
            .take(self.len)
            .collect()
    }
}

impl<S> Distribution<<Self as Space>::Element> for HistorySpace<S>
where
    S: Space + Distribution<S::Element>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> <Self as Space>::Element {
        iter::repeat_with(|| self.inner_space.sample(rng))
            .take(self.len)
            .collect()
    }
}

/// An observation augmented with the recent observation and action history.
///
/// `observations` always ends with the current observation.
/// When present, `actions[i]` is the action that produced `observations[i]`;
/// actions preceding the start of an episode are padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryObservation<O, A> {
    /// Most recent observations, oldest first.
    pub observations: Vec<O>,
    /// Most recent actions, oldest first. `None` if actions are not tracked.
    pub actions: Option<Vec<A>>,
}

impl<O, A> HistoryObservation<O, A> {
    /// The current (most recent) observation.
    pub fn current(&self) -> Option<&O> {
        self.observations.last()
    }

    /// The most recent action, if actions are tracked.
    pub fn last_action(&self) -> Option<&A> {
        self.actions.as_ref().and_then(|actions| actions.last())
    }
}

/// Space of [`HistoryObservation`].
///
/// Combines a window of `len` copies of the observation space with,
/// optionally, a window of `len` copies of the action space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryObservationSpace<OS, AS> {
    pub observations: HistorySpace<OS>,
    pub actions: Option<HistorySpace<AS>>,
}

impl<OS, AS> HistoryObservationSpace<OS, AS> {
    pub fn new(
        observation_space: OS,
        action_space: AS,
        history_length: usize,
        include_actions: bool,
    ) -> Self {
        Self {
            observations: HistorySpace::new(observation_space, history_length),
            actions: if include_actions {
                Some(HistorySpace::new(action_space, history_length))
            } else {
                None
            },
        }
    }

    /// Number of entries in each history window.
    pub const fn history_length(&self) -> usize {
        self.observations.len
    }
}

impl<OS: fmt::Display, AS: fmt::Display> fmt::Display for HistoryObservationSpace<OS, AS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HistoryObservationSpace({}", self.observations)?;
        if let Some(actions) = &self.actions {
            write!(f, ", {}", actions)?;
        }
        write!(f, ")")
    }
}

impl<OS: Space, AS: Space> Space for HistoryObservationSpace<OS, AS> {
    type Element = HistoryObservation<OS::Element, AS::Element>;

    fn contains(&self, value: &Self::Element) -> bool {
        let actions_contained = match (&self.actions, &value.actions) {
            (Some(space), Some(actions)) => space.contains(actions),
            (None, None) => true,
            _ => false,
        };
        actions_contained && self.observations.contains(&value.observations)
    }
}

impl<OS, AS> Distribution<<Self as Space>::Element> for HistoryObservationSpace<OS, AS>
where
    OS: Space + Distribution<OS::Element>,
    AS: Space + Distribution<AS::Element>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> <Self as Space>::Element {
        HistoryObservation {
            observations: self.observations.sample(rng),
            actions: self.actions.as_ref().map(|space| space.sample(rng)),
        }
    }
}


#[cfg(test)]
mod history_observation_space {
    use super::super::{testing, BooleanSpace, IndexSpace};
    use super::*;

    #[test]
    fn without_actions_contains() {
        let space = HistoryObservationSpace::new(IndexSpace::new(2), BooleanSpace, 2, false);
        assert!(space.contains(&HistoryObservation {
            observations: vec![0, 1],
            actions: None,
        }));
    }

    #[test]
    fn without_actions_not_contains_actions() {
        let space = HistoryObservationSpace::new(IndexSpace::new(2), BooleanSpace, 2, false);
        assert!(!space.contains(&HistoryObservation {
            observations: vec![0, 1],
            actions: Some(vec![true, false]),
        }));
    }

    #[test]
    fn with_actions_requires_actions() {
        let space = HistoryObservationSpace::new(IndexSpace::new(2), BooleanSpace, 2, true);
        assert!(!space.contains(&HistoryObservation {
            observations: vec![0, 1],
            actions: None,
        }));
        assert!(space.contains(&HistoryObservation {
            observations: vec![0, 1],
            actions: Some(vec![true, false]),
        }));
    }

    #[test]
    fn with_actions_contains_samples() {
        let space = HistoryObservationSpace::new(IndexSpace::new(5), BooleanSpace, 3, true);
        testing::check_contains_samples(&space, 20);
    }

    #[test]
    fn history_length() {
        let space = HistoryObservationSpace::new(IndexSpace::new(5), BooleanSpace, 3, true);
        assert_eq!(space.history_length(), 3);
    }

    #[test]
    fn display() {
        let space = HistoryObservationSpace::new(IndexSpace::new(5), BooleanSpace, 3, true);
        assert_eq!(
            space.to_string(),
            "HistoryObservationSpace(HistorySpace(IndexSpace(5), 3), \
             HistorySpace(BooleanSpace, 3))"
        );
    }

    #[test]
    fn current_is_last_observation() {
        let obs: HistoryObservation<_, ()> = HistoryObservation {
            observations: vec![1, 2, 3],
            actions: None,
        };
        assert_eq!(obs.current(), Some(&3));
        assert_eq!(obs.last_action(), None);
    }
}
