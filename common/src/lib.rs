//! Shared types for the pearl cannon encoder.
//!
//! * [`weights`]: the ordered weight sets each TNT inventory is encoded against.
//! * [`direction`]: the four firing directions and their 2-bit codes.
//! * [`error`]: the failures an encoding request can produce.
//! * [`config`]: runtime configuration assembled by the front end.

pub mod config;
pub mod direction;
pub mod error;
pub mod weights;
