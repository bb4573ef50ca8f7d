//! Property tests for the on/off consumers.

use proptest::prelude::*;

use solid::principles::single_responsibility::{Switch, SwitchOff, SwitchOn};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any sequence of commands the last write wins.
    #[test]
    fn property_last_command_wins(commands in proptest::collection::vec(any::<bool>(), 0..16)) {
        let switcher = Switch::new();
        let on = SwitchOn::new(&switcher);
        let off = SwitchOff::new(&switcher);

        for &turn_on in &commands {
            if turn_on {
                on.execute();
            } else {
                off.execute();
            }
        }

        let expected = commands.last().copied().unwrap_or(false);
        prop_assert_eq!(switcher.is_on(), expected);
    }
}
