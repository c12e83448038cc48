//! `BooleanSpace` definition
use super::{PadSpace, Space};
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The space `{false, true}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BooleanSpace;

impl BooleanSpace {
    pub const fn new() -> Self {
        Self
    }
}

impl fmt::Display for BooleanSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BooleanSpace")
    }
}

impl Space for BooleanSpace {
    type Element = bool;

    fn contains(&self, _value: &Self::Element) -> bool {
        true
    }
}

impl PadSpace for BooleanSpace {
    fn pad_element(&self) -> Self::Element {
        false
    }
}

impl Distribution<<Self as Space>::Element> for BooleanSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> <Self as Space>::Element {
        rng.gen()
    }
}

#[cfg(test)]
mod space {
    use super::super::testing;
    use super::*;

    #[test]
    fn contains_false() {
        assert!(BooleanSpace.contains(&false));
    }

    #[test]
    fn contains_true() {
        assert!(BooleanSpace.contains(&true));
    }

    #[test]
    fn contains_samples() {
        testing::check_contains_samples(&BooleanSpace, 10);
    }
}
