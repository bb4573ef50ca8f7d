//! Property tests for bird capabilities.

use proptest::prelude::*;

use solid::principles::liskov_substitution::{
    fastest_flyer, CanFly, CanSwim, Duck, GoodEagle, GoodPenguin,
};

fn speed() -> impl Strategy<Value = f64> {
    0.0f64..500.0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: speeds read back exactly as constructed.
    #[test]
    fn property_speeds_read_back(fly in speed(), swim in speed()) {
        prop_assert_eq!(GoodEagle::new("Eagle", fly).fly_speed(), fly);
        prop_assert_eq!(GoodPenguin::new("Penguin", swim).swim_speed(), swim);

        let duck = Duck::new("Duck", fly, swim);
        prop_assert_eq!(duck.fly_speed(), fly);
        prop_assert_eq!(duck.swim_speed(), swim);
    }

    /// PROPERTY: setting one capability never disturbs the other.
    #[test]
    fn property_setters_are_independent(fly in speed(), swim in speed(), new_fly in speed()) {
        let mut duck = Duck::new("Duck", fly, swim);
        duck.set_fly_speed(new_fly);
        prop_assert_eq!(duck.fly_speed(), new_fly);
        prop_assert_eq!(duck.swim_speed(), swim);
    }

    /// PROPERTY: `fastest_flyer` returns the maximum of the given speeds.
    #[test]
    fn property_fastest_flyer_is_max(speeds in proptest::collection::vec(speed(), 1..8)) {
        let eagles: Vec<GoodEagle> = speeds.iter().map(|s| GoodEagle::new("Eagle", *s)).collect();
        let flyers: Vec<&dyn CanFly> = eagles.iter().map(|e| e as &dyn CanFly).collect();

        let expected = speeds.iter().copied().fold(f64::MIN, f64::max);
        prop_assert_eq!(fastest_flyer(&flyers), Some(expected));
    }
}
