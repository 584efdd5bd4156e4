//! Fixed question shuffle shared by the encoder and the decoder.
//!
//! The permutation is a pure value: build it once with
//! [`Permutation::generate`] and hand it to both sides.

use super::answer::QuestionAnswer;
use super::answer_set::{AnswerSet, QUESTION_COUNT};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Seed of the production question shuffle
pub const PERMUTATION_SEED: u64 = 42;

/// Bijection over question indices with its explicit inverse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// The production permutation over [`QUESTION_COUNT`] questions
    pub fn generate() -> Self {
        Self::from_seed(QUESTION_COUNT, PERMUTATION_SEED)
    }

    /// Shuffle `0..len` with a ChaCha stream seeded from `seed`
    pub(crate) fn from_seed(len: usize, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut forward: Vec<usize> = (0..len).collect();
        forward.shuffle(&mut rng);
        Self::from_forward(forward)
    }

    fn from_forward(forward: Vec<usize>) -> Self {
        let mut inverse = vec![0; forward.len()];
        for (i, &target) in forward.iter().enumerate() {
            inverse[target] = i;
        }
        Self { forward, inverse }
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True for the zero-length permutation
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// π(i): shuffled position of original index `i`
    pub fn forward(&self, i: usize) -> usize {
        self.forward[i]
    }

    /// π⁻¹(k): original index stored at shuffled position `k`
    pub fn inverse(&self, k: usize) -> usize {
        self.inverse[k]
    }

    /// Reorder into emission order: `out[π(i)] = items[i]`.
    ///
    /// Items past the permutation length, or whose target falls outside
    /// `items`, keep their input position.
    pub fn shuffle<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out: Vec<T> = items.to_vec();
        for (item, &target) in items.iter().zip(&self.forward) {
            if let Some(slot) = out.get_mut(target) {
                *slot = item.clone();
            }
        }
        out
    }

    /// Restore question order from a possibly truncated shuffled sequence.
    ///
    /// Shuffled position `k` lands at `π⁻¹(k)`. Positions that were never
    /// decoded stay empty, and anything past the permutation length or
    /// mapping beyond [`QUESTION_COUNT`] is ignored.
    pub fn unshuffle(&self, shuffled: &[QuestionAnswer]) -> AnswerSet {
        let mut ordered = AnswerSet::empty();
        let slots = ordered.as_mut_slice();
        for (answer, &original) in shuffled.iter().zip(&self.inverse) {
            if let Some(slot) = slots.get_mut(original) {
                *slot = *answer;
            }
        }
        ordered
    }
}
