//! Liskov substitution contracts (LSP-001 through LSP-003)

use solid::principles::liskov_substitution::{
    fastest_flyer, fastest_swimmer, CanFly, CanSwim, Duck, GoodEagle, GoodPenguin, Named,
};

/// CONTRACT LSP-001: every `CanFly` given to a flight consumer really flies
///
/// Only types that implement `CanFly` can be passed, so a swimmer can never
/// reach `fastest_flyer` with a made-up speed.
#[test]
fn contract_flight_consumer_sees_only_flyers() {
    let eagle = GoodEagle::new("Eagle", 25.0);
    let duck = Duck::new("Duck", 18.0, 4.0);

    let flyers: [&dyn CanFly; 2] = [&eagle, &duck];
    assert_eq!(fastest_flyer(&flyers), Some(25.0));
}

/// CONTRACT LSP-002: a swimmer has no flight attribute and vice versa
#[test]
fn contract_capabilities_are_not_forced() {
    let penguin = serde_json::to_value(GoodPenguin::new("Peanguin", 10.0)).unwrap();
    let eagle = serde_json::to_value(GoodEagle::new("Eagle", 25.0)).unwrap();

    assert!(penguin.get("fly_speed").is_none());
    assert!(eagle.get("swim_speed").is_none());
}

/// CONTRACT LSP-003: a bird with both capabilities reads both back as built
#[test]
fn contract_both_capabilities_are_independent() {
    let duck = Duck::new("Duck", 18.0, 4.0);

    assert_eq!(duck.name(), "Duck");
    assert_eq!(duck.fly_speed(), 18.0);
    assert_eq!(duck.swim_speed(), 4.0);

    let swimmers: [&dyn CanSwim; 1] = [&duck];
    assert_eq!(fastest_swimmer(&swimmers), Some(4.0));
}
