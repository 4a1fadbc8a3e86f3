//! A complete encoding request.
//!
//! [`solve`] encodes the blue count, picks the direction code and encodes the
//! red count. Either both halves encode and a [`FiringSolution`] comes back,
//! or the first failure is returned and nothing is produced.

use ftl_common::config::Config;
use ftl_common::direction::Direction;
use ftl_common::error::EncodeError;
use ftl_common::weights::WeightSet;
use tracing::debug;

use crate::encoder::{self, Encoding};
use crate::formatter;

/// Result of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiringSolution {
    pub blue_tnt: i64,
    pub direction: Direction,
    pub red_tnt: i64,
    pub blue: Encoding,
    pub red: Encoding,
    blue_weights: WeightSet,
    red_weights: WeightSet,
}

impl FiringSolution {
    pub fn direction_code(&self) -> &'static str {
        self.direction.code()
    }

    /// The raw 32-bit word: blue, direction, red.
    pub fn full_binary(&self) -> String {
        format!("{}{}{}", self.blue, self.direction_code(), self.red)
    }

    /// The grouped display form of [`Self::full_binary`].
    pub fn formatted(&self) -> Result<String, EncodeError> {
        formatter::format_grouped(
            self.blue.as_str(),
            self.direction_code(),
            self.red.as_str(),
        )
    }

    /// Blue TNT recomputed from the selected bits.
    pub fn blue_total(&self) -> u64 {
        self.blue.selected_sum(self.blue_weights.as_slice())
    }

    /// Red TNT recomputed from the selected bits.
    pub fn red_total(&self) -> u64 {
        self.red.selected_sum(self.red_weights.as_slice())
    }
}

/// Encodes both inventories with the weights from `cfg`.
pub fn solve(
    blue_tnt: i64,
    direction: Direction,
    red_tnt: i64,
    cfg: &Config,
) -> Result<FiringSolution, EncodeError> {
    let blue = encoder::encode(blue_tnt, cfg.blue_weights.as_slice())?;
    let red = encoder::encode(red_tnt, cfg.red_weights.as_slice())?;

    debug!(
        blue_tnt,
        red_tnt,
        direction = %direction,
        blue = %blue,
        red = %red,
        "solved firing request"
    );

    Ok(FiringSolution {
        blue_tnt,
        direction,
        red_tnt,
        blue,
        red,
        blue_weights: cfg.blue_weights,
        red_weights: cfg.red_weights,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
