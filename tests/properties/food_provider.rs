//! Property tests for provider reassignment.

use proptest::prelude::*;

use solid::principles::dependency_inversion::{
    CanProvideFood, GoodWife, HappiestMan, Mother, SecondWife, Sister, ThirdWife,
};

fn boxed(provider: impl CanProvideFood + 'static) -> Box<dyn CanProvideFood> {
    Box::new(provider)
}

fn provider(kind: u8) -> (Box<dyn CanProvideFood>, &'static str) {
    match kind % 5 {
        0 => (boxed(Mother), "Bestly food"),
        1 => (boxed(Sister), "Like food"),
        2 => (boxed(ThirdWife), "fust food"),
        3 => (boxed(GoodWife), "Good food"),
        _ => (boxed(SecondWife), "Best food"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: food always reflects the most recently assigned provider.
    #[test]
    fn property_food_follows_provider(first in any::<u8>(), rest in proptest::collection::vec(any::<u8>(), 0..10)) {
        let (initial, initial_food) = provider(first);
        let mut man = HappiestMan::new(initial);
        prop_assert_eq!(man.food(), initial_food);

        let mut previous_food = initial_food;
        for kind in rest {
            let (next, expected) = provider(kind);
            let previous = man.set_food_provider(next);
            prop_assert_eq!(previous.get_food(), previous_food);
            prop_assert_eq!(man.food(), expected);
            previous_food = expected;
        }
    }
}
