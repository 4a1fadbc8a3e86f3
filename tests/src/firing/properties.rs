use ftl_common::config::Config;
use ftl_common::direction::Direction;
use ftl_common::error::EncodeError;
use ftl_common::weights::{WIDTH, WeightSet};
use ftl_core::encoder::encode;
use ftl_core::solver::solve;
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn weight_set() -> impl Strategy<Value = WeightSet> {
    prop::collection::vec(1u32..=6000, WIDTH)
        .prop_map(|weights| WeightSet::new(&weights).expect("generated weights are valid"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn solution_is_consistent(
        blue in 0i64..=12000,
        red in 0i64..=12000,
        direction in direction(),
    ) {
        let cfg = Config::default();
        match solve(blue, direction, red, &cfg) {
            Ok(solution) => {
                let full = solution.full_binary();
                prop_assert_eq!(full.len(), 32);
                prop_assert_eq!(&full[15..17], direction.code());
                prop_assert_eq!(solution.formatted().unwrap().replace(' ', ""), full);
                prop_assert_eq!(solution.blue_total(), blue as u64);
                prop_assert_eq!(solution.red_total(), red as u64);
            }
            Err(EncodeError::NonRepresentable { value, remainder }) => {
                // only red has gaps in the default sets
                prop_assert_eq!(value, red);
                prop_assert!(remainder > 0);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn sum_of_selected_weights_is_left_inverse(
        weights in weight_set(),
        value in 0i64..=20000,
    ) {
        if let Ok(encoding) = encode(value, weights.as_slice()) {
            prop_assert_eq!(encoding.len(), WIDTH);
            prop_assert_eq!(encoding.selected_sum(weights.as_slice()), value as u64);
        }
    }

    #[test]
    fn encoding_is_deterministic(weights in weight_set(), value in 0i64..=20000) {
        prop_assert_eq!(encode(value, weights.as_slice()), encode(value, weights.as_slice()));
    }

    #[test]
    fn full_set_sum_sets_every_bit(weights in weight_set()) {
        let total = weights.total() as i64;
        let encoding = encode(total, weights.as_slice()).unwrap();
        prop_assert_eq!(encoding.as_str(), "1".repeat(WIDTH));
        prop_assert_eq!(
            encode(total + 1, weights.as_slice()),
            Err(EncodeError::NonRepresentable { value: total + 1, remainder: 1 })
        );
    }
}
