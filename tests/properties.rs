use otter_acts::structures::{
    formula::{Formula, Operator},
    names::Fluent,
    observation::Observation,
};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

fn formula_strategy() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        1 => Just(Formula::Top),
        4 => proptest::sample::select(NAMES.to_vec()).prop_map(Formula::atom),
    ];

    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::negation),
            (
                proptest::sample::select(vec![
                    Operator::And,
                    Operator::Or,
                    Operator::Implies,
                    Operator::Iff,
                ]),
                inner.clone(),
                inner,
            )
                .prop_map(|(operator, left, right)| Formula::binary(operator, left, right)),
        ]
    })
}

fn observation_from_bits(bits: u8) -> Observation {
    Observation::from_pairs(
        NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| (Fluent::from(*name), bits & (1 << index) != 0)),
    )
    .unwrap()
}

fn every_observation() -> impl Iterator<Item = Observation> {
    (0..16_u8).map(observation_from_bits)
}

proptest! {
    #[test]
    fn evaluation_is_total_and_deterministic(formula in formula_strategy(), bits in 0..16_u8) {
        let observation = observation_from_bits(bits);
        let first = formula.evaluate(&observation);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, formula.evaluate(&observation));
    }

    #[test]
    fn models_are_the_satisfying_assignments(formula in formula_strategy()) {
        let atom_count = formula.atoms().len();
        let models = formula.models(8).unwrap();
        prop_assert!(models.len() <= 1 << atom_count);

        for model in &models {
            prop_assert_eq!(formula.evaluate(model), Ok(true));
        }

        let satisfying = every_observation()
            .filter(|observation| formula.evaluate(observation) == Ok(true))
            .count();
        prop_assert_eq!(satisfying, models.len() << (NAMES.len() - atom_count));
    }

    #[test]
    fn compatibility_is_satisfaction(formula in formula_strategy(), bits in 0..16_u8) {
        let observation = observation_from_bits(bits);
        let models = formula.models(8).unwrap();
        prop_assert_eq!(
            observation.is_compatible_with(&models),
            formula.evaluate(&observation)
        );
    }

    #[test]
    fn merge_identities(bits in 0..16_u8, other in 0..16_u8) {
        let observation = observation_from_bits(bits);

        let nothing: [(Fluent, bool); 0] = [];
        prop_assert_eq!(observation.merge(nothing), Ok(observation.clone()));

        let own = NAMES
            .iter()
            .map(|name| (Fluent::from(*name), observation.get(name).unwrap()));
        prop_assert_eq!(observation.merge(own), Ok(observation.clone()));

        let target = observation_from_bits(other);
        let onto = NAMES
            .iter()
            .map(|name| (Fluent::from(*name), target.get(name).unwrap()));
        prop_assert_eq!(observation.merge(onto), Ok(target));
    }
}
