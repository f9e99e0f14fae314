//! Session configuration for the guessing game.

use super::GuessRange;
use derive_getters::Getters;
use derive_new::new;

/// Options fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, new)]
pub struct GuessSettings {
    /// Preset range; when absent the player is offered a custom range.
    range: Option<GuessRange>,
    /// RNG seed for reproducible targets; drawn from the OS when absent.
    seed: Option<u64>,
}
