pub mod calc;
pub mod weights;

use clap::{ArgAction, Parser, Subcommand};
use ftl_common::config::MAX_TNT;
use ftl_common::direction::Direction;
use ftl_common::weights::WeightSet;

#[derive(Parser)]
#[command(name = "ftl")]
#[command(about = "Vector pearl cannon ROM encoder.")]
#[command(after_help = "Example:\n  ftl calc 291 west 568    blue 291, facing west, red 568")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides banner and headers, -qq prints only the ROM word)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Blue weights in bit order, comma separated
    #[arg(long, global = true, value_name = "LIST", default_value_t = WeightSet::BLUE)]
    pub blue_weights: WeightSet,

    /// Red weights in bit order, comma separated
    #[arg(long, global = true, value_name = "LIST", default_value_t = WeightSet::RED)]
    pub red_weights: WeightSet,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a blue count, a direction and a red count into the 32-bit ROM word
    #[command(alias = "c")]
    Calc {
        /// Blue TNT count (0-12000)
        #[arg(value_parser = clap::value_parser!(u16).range(0..=i64::from(MAX_TNT)))]
        blue_tnt: u16,
        /// Firing direction: east, north, south or west
        direction: Direction,
        /// Red TNT count (0-12000)
        #[arg(value_parser = clap::value_parser!(u16).range(0..=i64::from(MAX_TNT)))]
        red_tnt: u16,
    },
    /// Show the blue and red weight sets in bit order
    #[command(alias = "w")]
    Weights,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
