//! Greedy subset-sum encoding of a TNT count.
//!
//! The weights are walked from largest to smallest, and every weight that
//! still fits into the remaining count is taken. The resulting bits are
//! written back in the weights' original order, not the walk order.
//!
//! This is not a radix conversion. A weight set may hold duplicates and gaps,
//! so some counts have no greedy decomposition and are rejected with
//! [`EncodeError::NonRepresentable`].

use std::fmt;

use ftl_common::error::EncodeError;
use tracing::trace;

/// Bitstring produced by [`encode`], one `'0'`/`'1'` per weight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Encoding {
    bits: String,
}

impl Encoding {
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether the weight at `index` (original order) is selected.
    pub fn is_set(&self, index: usize) -> bool {
        self.bits.as_bytes().get(index) == Some(&b'1')
    }

    /// Sum of the weights whose bit is set.
    ///
    /// Used to double-check a result against the weights it was built from.
    pub fn selected_sum(&self, weights: &[u32]) -> u64 {
        weights
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.is_set(*idx))
            .map(|(_, &w)| u64::from(w))
            .sum()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl AsRef<str> for Encoding {
    fn as_ref(&self) -> &str {
        &self.bits
    }
}

/// Encodes `value` as a subset of `weights`.
///
/// Ties between equal weights go to the lower original index.
pub fn encode(value: i64, weights: &[u32]) -> Result<Encoding, EncodeError> {
    if value < 0 {
        return Err(EncodeError::InvalidInput { value });
    }

    let mut order: Vec<(u32, usize)> = weights.iter().copied().zip(0..).collect();
    order.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    let mut remaining: i64 = value;
    let mut bits: Vec<char> = vec!['0'; weights.len()];

    for (weight, idx) in order {
        let weight = i64::from(weight);
        if remaining >= weight {
            bits[idx] = '1';
            remaining -= weight;
        }
    }

    if remaining != 0 {
        trace!(value, remainder = remaining, "greedy walk left a remainder");
        return Err(EncodeError::NonRepresentable {
            value,
            remainder: remaining,
        });
    }

    let bits: String = bits.into_iter().collect();
    trace!(value, bits = %bits, "encoded");
    Ok(Encoding { bits })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
