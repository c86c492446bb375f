//! Cosmetic post-processing of model output.
//!
//! A shallow, randomized string transducer: it splits finished text into
//! sentences, occasionally swaps formal openers, contractions and connective
//! words for casual ones, sprinkles transition phrases, inserts paragraph
//! breaks and may append a short closing line. It never drops or reorders a
//! sentence and never fails.
//!
//! - [`humanize`]: uses the thread-local generator
//! - [`humanize_with`]: takes any [`RandomSource`] (seeded `StdRng`, scripted sources)
//! - [`Humanizer`]: config-gated wrapper used by the server and the CLI

mod phrases;
pub mod random;
mod segment;
mod transducer;

pub use random::RandomSource;
pub use transducer::{humanize, humanize_with, Humanizer};
