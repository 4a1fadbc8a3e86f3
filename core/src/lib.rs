//! # FTL Core
//!
//! Turns a pair of TNT counts and a firing direction into the 32-bit ROM
//! word of a vector pearl cannon.
//!
//! * [`encoder`]: greedy subset-sum encoding of one count against a weight set.
//! * [`formatter`]: the grouped `xxx xxx xxx xxx xxx dd xxx xxx xxx xxx xxx` layout.
//! * [`solver`]: one full request, both halves plus the direction.

pub mod encoder;
pub mod formatter;
pub mod solver;
