mod commands;
mod terminal;

use commands::{CommandLine, Commands, calc, weights};
use ftl_common::config::Config;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        blue_weights: commands.blue_weights,
        red_weights: commands.red_weights,
    };

    debug!("blue weights (bit order): {}", cfg.blue_weights);
    debug!("red weights (bit order): {}", cfg.red_weights);

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Calc {
            blue_tnt,
            direction,
            red_tnt,
        } => {
            print::header("pearl cannon encoding", cfg.quiet);
            calc::calc(blue_tnt, direction, red_tnt, &cfg)
        }
        Commands::Weights => {
            print::header("weight sets", cfg.quiet);
            weights::weights(&cfg);
            Ok(())
        }
    }
}
