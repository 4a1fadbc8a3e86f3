use anyhow::Context;
use colored::*;

use crate::terminal::{
    colors,
    print::{self, GLOBAL_KEY_WIDTH},
};
use ftl_common::{config::Config, direction::Direction};
use ftl_core::solver::{self, FiringSolution};

pub fn calc(blue_tnt: u16, direction: Direction, red_tnt: u16, cfg: &Config) -> anyhow::Result<()> {
    let solution: FiringSolution =
        solver::solve(i64::from(blue_tnt), direction, i64::from(red_tnt), cfg).with_context(|| {
            format!(
                "cannot encode blue {blue_tnt} / red {red_tnt}, try a different combination of TNT counts"
            )
        })?;
    let formatted: String = solution.formatted()?;

    if cfg.quiet > 1 {
        print::print(&formatted);
        return Ok(());
    }

    print_solution(&solution, &formatted);
    print_verification(&solution, cfg);
    Ok(())
}

fn print_solution(solution: &FiringSolution, formatted: &str) {
    GLOBAL_KEY_WIDTH.set(13);

    let direction: ColoredString = format!(
        "{} → {}",
        solution.direction.to_string().color(colors::TEXT_DEFAULT),
        solution.direction_code().color(colors::BITS)
    )
    .normal();

    print::aligned_line("Blue TNT", solution.blue_tnt.to_string().color(colors::BLUE_TNT));
    print::aligned_line("Direction", direction);
    print::aligned_line("Red TNT", solution.red_tnt.to_string().color(colors::RED_TNT));
    print::aligned_line("32-bit binary", solution.full_binary().color(colors::BITS));
    print::aligned_line("Formatted", formatted.green().bold());
}

fn print_verification(solution: &FiringSolution, cfg: &Config) {
    let blue: u64 = solution.blue_total();
    let red: u64 = solution.red_total();
    let output: String = format!(
        "Verified: blue {} + red {} = total {}",
        blue.to_string().color(colors::BLUE_TNT),
        red.to_string().color(colors::RED_TNT),
        (blue + red).to_string().bold()
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program(cfg.quiet);
        }
        _ => print::print_status(output),
    }
}
