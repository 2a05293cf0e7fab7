//! Random Space names.
//!
//! Names are short and drawn from `[A-Za-z0-9]` with at least one letter.
//! They are not checked against existing Spaces, so two runs can pick the
//! same name; the second create then fails with a conflict.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::constants::{ALPHANUMERIC, LETTERS};

/// Generate a name of `length` characters using the thread RNG.
///
/// Returns an empty string for `length == 0`.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

/// Generate a name of `length` characters from the given RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    if length < 1 {
        return String::new();
    }

    let mut chars: Vec<u8> = (0..length - 1)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())])
        .collect();
    chars.push(LETTERS[rng.gen_range(0..LETTERS.len())]);
    chars.shuffle(rng);

    chars.into_iter().map(char::from).collect()
}
