//! `IndexSpace` definition
use super::{PadSpace, Space};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An index space; integers 0 .. size-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexSpace {
    pub size: usize,
}

impl IndexSpace {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexSpace({})", self.size)
    }
}

impl Space for IndexSpace {
    type Element = usize;

    fn contains(&self, value: &Self::Element) -> bool {
        value < &self.size
    }
}

/// Pads with index `0`.
///
/// An empty index space has no valid padding element.
impl PadSpace for IndexSpace {
    fn pad_element(&self) -> Self::Element {
        0
    }
}

impl Distribution<<Self as Space>::Element> for IndexSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> <Self as Space>::Element {
        rng.gen_range(0..self.size)
    }
}

#[cfg(test)]
mod space {
    use super::super::testing;
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn contains_zero(#[values(1, 5)] size: usize) {
        let space = IndexSpace::new(size);
        assert!(space.contains(&0));
    }

    #[rstest]
    fn not_contains_size(#[values(0, 1, 5)] size: usize) {
        let space = IndexSpace::new(size);
        assert!(!space.contains(&size));
    }

    #[rstest]
    fn contains_samples(#[values(1, 5)] size: usize) {
        testing::check_contains_samples(&IndexSpace::new(size), 100);
    }

    #[test]
    fn pad_element_contained() {
        testing::check_pad_element(&IndexSpace::new(3));
    }

    #[test]
    fn display() {
        assert_eq!(IndexSpace::new(4).to_string(), "IndexSpace(4)");
    }
}
