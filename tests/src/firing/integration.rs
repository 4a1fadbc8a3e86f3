use ftl_common::config::{Config, MAX_TNT};
use ftl_common::direction::Direction;
use ftl_common::error::EncodeError;
use ftl_common::weights::WeightSet;
use ftl_core::encoder::encode;
use ftl_core::formatter::format_grouped;
use ftl_core::solver::{FiringSolution, solve};

/// The worked example from the help text: `ftl calc 291 west 568`.
#[test]
fn example_291_west_568() -> anyhow::Result<()> {
    let cfg: Config = Config::default();
    let solution: FiringSolution = solve(291, Direction::West, 568, &cfg)?;

    assert_eq!(solution.blue.as_str(), "100010111000000");
    assert_eq!(solution.red.as_str(), "000001110101101");
    assert_eq!(solution.direction_code(), "11");

    let full: String = solution.full_binary();
    assert_eq!(full.len(), 32);
    assert_eq!(full, "10001011100000011000001110101101");

    let formatted: String = solution.formatted()?;
    assert_eq!(formatted, "100 010 111 000 000 11 000 001 110 101 101");
    assert_eq!(formatted.len(), 34);

    assert_eq!(solution.blue_total() + solution.red_total(), 291 + 568);
    Ok(())
}

#[test]
fn formatter_matches_pipeline_output() -> anyhow::Result<()> {
    let cfg: Config = Config::default();
    let solution: FiringSolution = solve(6000, Direction::South, 6000, &cfg)?;

    let by_hand: String = format_grouped(
        encode(6000, WeightSet::BLUE.as_slice())?.as_str(),
        Direction::South.code(),
        encode(6000, WeightSet::RED.as_slice())?.as_str(),
    )?;

    assert_eq!(solution.formatted()?, by_hand);
    assert_eq!(by_hand, "000 000 000 000 001 10 100 000 000 000 000");
    Ok(())
}

#[test]
fn blue_covers_whole_nominal_range() {
    let blue: WeightSet = WeightSet::BLUE;
    for value in 0..=i64::from(MAX_TNT) {
        let encoding = encode(value, blue.as_slice())
            .unwrap_or_else(|e| panic!("blue {value} failed: {e}"));
        assert_eq!(encoding.selected_sum(blue.as_slice()), value as u64);
    }
}

#[test]
fn red_has_gaps_inside_nominal_range() {
    let red: WeightSet = WeightSet::RED;
    let failures: Vec<i64> = (0..=i64::from(MAX_TNT))
        .filter(|&value| encode(value, red.as_slice()).is_err())
        .collect();

    assert_eq!(failures.len(), 2358);
    assert_eq!(failures.first(), Some(&3621));
}

#[test]
fn failed_half_produces_no_solution() {
    let cfg: Config = Config::default();

    let result = solve(291, Direction::East, 3621, &cfg);
    assert_eq!(
        result,
        Err(EncodeError::NonRepresentable {
            value: 3621,
            remainder: 1
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Cannot represent 3621 with given weights. Remainder: 1"
    );
}

#[test]
fn negative_count_is_rejected() {
    let cfg: Config = Config::default();
    let err = solve(0, Direction::North, -1, &cfg).unwrap_err();
    assert_eq!(err, EncodeError::InvalidInput { value: -1 });
    assert_eq!(err.to_string(), "Value -1 cannot be negative");
}

#[test]
fn custom_weights_from_list() -> anyhow::Result<()> {
    let cfg: Config = Config {
        blue_weights: "1,2,4,8,16,32,64,128,256,512,1024,2048,4096,8192,16384".parse()?,
        ..Config::default()
    };
    let solution: FiringSolution = solve(5, Direction::East, 0, &cfg)?;
    assert_eq!(solution.blue.as_str(), "101000000000000");
    assert_eq!(solution.blue_total(), 5);
    Ok(())
}
