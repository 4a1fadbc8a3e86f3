use colored::*;

use crate::fprint;
use crate::terminal::{colors, print};
use ftl_common::{config::Config, weights::WeightSet};

pub fn weights(cfg: &Config) {
    let sets: [(&str, &WeightSet, Color); 2] = [
        ("Blue weights", &cfg.blue_weights, colors::BLUE_TNT),
        ("Red weights", &cfg.red_weights, colors::RED_TNT),
    ];

    if cfg.quiet > 1 {
        for (_, set, _) in sets {
            print::print(&set.to_string());
        }
        return;
    }

    for (idx, (name, set, color)) in sets.into_iter().enumerate() {
        print::tree_head(idx, name);
        print::as_tree_one_level(bit_details(set, color));
        if idx + 1 != sets.len() {
            fprint!();
        }
    }

    print::fat_separator();
    print::centerln(&format!(
        "Max blue {} / max red {}",
        cfg.blue_weights.total().to_string().color(colors::BLUE_TNT),
        cfg.red_weights.total().to_string().color(colors::RED_TNT)
    ));
    print::end_of_program(cfg.quiet);
}

fn bit_details(set: &WeightSet, color: Color) -> Vec<(String, ColoredString)> {
    set.iter()
        .enumerate()
        .map(|(bit, weight)| (format!("bit {bit}"), weight.to_string().color(color)))
        .collect()
}
