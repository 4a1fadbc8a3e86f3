use crate::weights::WeightSet;

/// Highest TNT count either inventory accepts on the command line.
pub const MAX_TNT: u16 = 12000;

pub struct Config {
    /// Reduces output: 1 hides banner and headers, 2 prints only the
    /// formatted ROM word.
    pub quiet: u8,
    pub no_banner: bool,
    /// Weights the blue count is encoded against.
    pub blue_weights: WeightSet,
    /// Weights the red count is encoded against.
    pub red_weights: WeightSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            blue_weights: WeightSet::BLUE,
            red_weights: WeightSet::RED,
        }
    }
}
