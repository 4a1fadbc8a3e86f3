//! # Weight Sets
//!
//! A weight set is the ordered list of TNT amounts wired to the 15 bit
//! positions of one half of the ROM word. Order matters: bit `i` of an
//! encoding always refers to `weights[i]`, whatever the magnitude.
//!
//! The weights are neither sorted nor a positional numeral system. The
//! default red set carries `1200` twice.

use std::fmt;
use std::str::FromStr;

use crate::error::WeightSetError;

/// Number of weights (and therefore bits) in each half of the ROM word.
pub const WIDTH: usize = 15;

const BLUE_WEIGHTS: [u32; WIDTH] = [
    1, 2, 3, 4, 10, 20, 40, 80, 160, 300, 600, 4800, 2400, 1200, 6000,
];

const RED_WEIGHTS: [u32; WIDTH] = [
    6000, 1200, 1200, 4800, 600, 300, 160, 80, 40, 20, 10, 4, 3, 2, 1,
];

/// Ordered set of 15 positive weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WeightSet {
    weights: [u32; WIDTH],
}

impl WeightSet {
    /// Weights of the blue TNT inventory.
    pub const BLUE: WeightSet = WeightSet {
        weights: BLUE_WEIGHTS,
    };

    /// Weights of the red TNT inventory.
    pub const RED: WeightSet = WeightSet {
        weights: RED_WEIGHTS,
    };

    /// Builds a weight set, checking the length and that no weight is zero.
    pub fn new(weights: &[u32]) -> Result<Self, WeightSetError> {
        let weights: [u32; WIDTH] = weights.try_into().map_err(|_| WeightSetError::WrongLength {
            expected: WIDTH,
            found: weights.len(),
        })?;

        if let Some(index) = weights.iter().position(|&w| w == 0) {
            return Err(WeightSetError::ZeroWeight { index });
        }

        Ok(Self { weights })
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.weights
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.weights.iter().copied()
    }

    /// Largest value the set could cover if every bit were set.
    pub fn total(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }
}

impl fmt::Display for WeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: String = self
            .weights
            .iter()
            .map(u32::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{joined}]")
    }
}

impl FromStr for WeightSet {
    type Err = WeightSetError;

    /// Parses a comma-separated list such as `"1,2,3,4,10,20,..."`.
    ///
    /// Surrounding brackets and whitespace are tolerated, so the output of
    /// `Display` parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');

        let weights: Vec<u32> = trimmed
            .split(',')
            .map(str::trim)
            .map(|token| {
                token.parse::<u32>().map_err(|e| WeightSetError::Parse {
                    token: token.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        WeightSet::new(&weights)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
