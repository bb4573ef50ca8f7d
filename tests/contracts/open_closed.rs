//! Open/closed contracts (OCP-001 through OCP-003)

use solid::principles::open_closed::{
    CanWriteCode, CoolTeam, IosDeveloper, IosDeveloperCool, WebDeveloper,
};

/// CONTRACT OCP-001: the playground roster reads back in member order
#[test]
fn contract_cool_team_end_to_end() {
    let ios_dev = IosDeveloper;
    let ios_cool_dev = IosDeveloperCool;
    let web_dev = WebDeveloper;

    let team = CoolTeam::new(vec![&ios_dev as &dyn CanWriteCode, &ios_cool_dev, &web_dev]);

    assert_eq!(
        team.programming_cool_team(),
        vec!["Object-C", "Swift", "Ruby"]
    );
}

/// CONTRACT OCP-002: new developer kinds join without touching `CoolTeam`
#[test]
fn contract_new_kind_needs_no_roster_change() {
    struct Polyglot {
        language: String,
    }

    impl CanWriteCode for Polyglot {
        fn programming(&self) -> &str {
            &self.language
        }
    }

    let go = Polyglot {
        language: "Go".to_string(),
    };
    let web_dev = WebDeveloper;

    let team = CoolTeam::new(vec![&go as &dyn CanWriteCode, &web_dev]);
    assert_eq!(team.programming_cool_team(), vec!["Go", "Ruby"]);
}

/// CONTRACT OCP-003: an empty roster is valid and yields no labels
#[test]
fn contract_empty_roster_is_valid() {
    assert!(CoolTeam::default().programming_cool_team().is_empty());
}
