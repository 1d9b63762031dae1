//! The leaf operations of the evolutionary loop: the character
//! alphabet, random candidate generation, fitness scoring, and
//! per-character mutation.
//!
//! Candidates are plain `String`s and are never modified in place;
//! every operation that transforms one allocates a fresh string.

use rand::Rng;

/// The characters candidates are built from: the uppercase Latin
/// alphabet plus a single space. All random draws index uniformly
/// into this set.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// Draws one uniformly random alphabet character.
fn random_char<R: Rng>(rng: &mut R) -> char {
    let index = rng.gen_range(0..ALPHABET.len());
    ALPHABET.as_bytes()[index] as char
}

/// Returns a string of exactly `length` characters, each drawn
/// independently and uniformly at random from [`ALPHABET`].
/// A `length` of 0 yields the empty string.
///
/// # Examples
/// ```
/// use rand::thread_rng;
/// use weasel::{random_string, ALPHABET};
///
/// let mut rng = thread_rng();
/// let candidate = random_string(12, &mut rng);
///
/// assert_eq!(candidate.chars().count(), 12);
/// assert!(candidate.chars().all(|c| ALPHABET.contains(c)));
/// ```
pub fn random_string<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length).map(|_| random_char(rng)).collect()
}

/// Counts the positions at which `candidate` and `target` hold the
/// same character.
///
/// The comparison runs over the target's characters, so the result
/// never exceeds the target's length. Positions past the end of a
/// shorter candidate never match.
///
/// # Examples
/// ```
/// assert_eq!(weasel::fitness("METHINKS", "METHINKS"), 8);
/// assert_eq!(weasel::fitness("MXTHINKS", "METHINKS"), 7);
/// assert_eq!(weasel::fitness("CAT", "CATFISH"), 3);
/// ```
pub fn fitness(candidate: &str, target: &str) -> usize {
    candidate
        .chars()
        .zip(target.chars())
        .filter(|(c, t)| c == t)
        .count()
}

/// Returns a child of `parent` in which each character has been
/// replaced, independently and with `mutation_rate` percent
/// probability, by a fresh uniformly random alphabet character.
/// The child always has the parent's length.
///
/// A rate of 0 reproduces the parent exactly, and a rate of 100 or
/// more redraws every position (a redrawn character may still
/// coincide with the original). Rates outside `[0.0, 100.0]` are not
/// clamped; the per-position comparison is evaluated as given, so a
/// negative rate behaves like 0.
///
/// # Examples
/// ```
/// use rand::thread_rng;
///
/// let mut rng = thread_rng();
///
/// assert_eq!(weasel::mutate("WEASEL", 0.0, &mut rng), "WEASEL");
/// assert_eq!(weasel::mutate("WEASEL", 100.0, &mut rng).len(), 6);
/// ```
pub fn mutate<R: Rng>(parent: &str, mutation_rate: f32, rng: &mut R) -> String {
    parent
        .chars()
        .map(|c| {
            if rng.gen::<f32>() * 100.0 < mutation_rate {
                random_char(rng)
            } else {
                c
            }
        })
        .collect()
}
