//! Space test utilities
use super::{PadSpace, SampleSpace};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Check that space contains samples it generates
pub fn check_contains_samples<S: SampleSpace>(space: &S, num_samples: u32) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..num_samples {
        let element = space.sample(&mut rng);
        assert!(space.contains(&element));
    }
}

/// Check that the padding element is contained in the space.
pub fn check_pad_element<S: PadSpace>(space: &S) {
    assert!(space.contains(&space.pad_element()));
}
