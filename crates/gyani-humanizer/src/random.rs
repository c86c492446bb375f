//! The randomness seam of the transducer.

use rand::Rng;

/// A source of the two kinds of random decisions the transducer makes.
///
/// Every [`rand::Rng`] is a `RandomSource`, so production code passes
/// `rand::rng()` and tests pass a seeded `StdRng` or a hand-written source.
pub trait RandomSource {
    /// `true` with the given probability (`0.0..=1.0`).
    fn chance(&mut self, probability: f64) -> bool;

    /// A uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn chance(&mut self, probability: f64) -> bool {
        self.random_bool(probability.clamp(0.0, 1.0))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len.max(1))
    }
}

/// Pick one entry of a fixed table. Out-of-range picks from a
/// misbehaving source yield the empty string.
pub(crate) fn choose<'a, R>(rng: &mut R, items: &[&'a str]) -> &'a str
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return "";
    }
    items.get(rng.pick(items.len())).copied().unwrap_or_default()
}
