//! Playground runner
//!
//! Evaluates each demonstration top to bottom and records every value it
//! inspects along the way, split into the violating and corrected halves.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::principle::Principle;
use crate::principles::dependency_inversion::{
    GoodWife, HappiestMan, HappyMan, Mother, SecondWife, Sister, ThirdWife, UnhappyMan,
};
use crate::principles::interface_segregation::{declared_fields, Back, Front, Ios, IosDev};
use crate::principles::liskov_substitution::{
    fastest_flyer, CanFly, CanSwim, Eagle, GoodEagle, GoodPenguin, Penguin,
};
use crate::principles::open_closed::{
    CanWriteCode, CoolTeam, IosDeveloper, IosDeveloperCool, Team, WebDeveloper,
};
use crate::principles::single_responsibility::{Switch, SwitchOff, SwitchOn, SwitchPanel};

/// Values the scenarios are built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default = "default_eagle_fly_speed")]
    pub eagle_fly_speed: f64,

    #[serde(default = "default_penguin_swim_speed")]
    pub penguin_swim_speed: f64,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            eagle_fly_speed: default_eagle_fly_speed(),
            penguin_swim_speed: default_penguin_swim_speed(),
        }
    }
}

fn default_eagle_fly_speed() -> f64 {
    25.0
}

fn default_penguin_swim_speed() -> f64 {
    10.0
}

/// One inspected expression and the value it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub label: String,
    pub value: String,
}

/// Everything one principle's scenario inspected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipleReport {
    pub principle: Principle,
    pub title: String,
    pub violating: Vec<Inspection>,
    pub corrected: Vec<Inspection>,
}

impl PrincipleReport {
    fn new(principle: Principle) -> Self {
        Self {
            principle,
            title: principle.title().to_string(),
            violating: Vec::new(),
            corrected: Vec::new(),
        }
    }

    fn violating(&mut self, label: &str, value: impl Debug) {
        let inspection = inspect(self.principle, label, value);
        self.violating.push(inspection);
    }

    fn corrected(&mut self, label: &str, value: impl Debug) {
        let inspection = inspect(self.principle, label, value);
        self.corrected.push(inspection);
    }

    /// Look up the last value recorded under `label` in either half
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.violating
            .iter()
            .chain(self.corrected.iter())
            .rev()
            .find(|inspection| inspection.label == label)
            .map(|inspection| inspection.value.as_str())
    }
}

fn inspect(principle: Principle, label: &str, value: impl Debug) -> Inspection {
    let value = format!("{:?}", value);
    debug!(%principle, label, value = %value, "inspected");
    Inspection {
        label: label.to_string(),
        value,
    }
}

/// Runs principle scenarios with a fixed set of fixtures
#[derive(Debug, Clone, Default)]
pub struct Playground {
    fixtures: Fixtures,
}

impl Playground {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Run a single principle
    pub fn run(&self, principle: Principle) -> PrincipleReport {
        info!(%principle, "running playground");
        let mut report = PrincipleReport::new(principle);
        match principle {
            Principle::Srp => single_responsibility(&mut report),
            Principle::Ocp => open_closed(&mut report),
            Principle::Lsp => self.liskov_substitution(&mut report),
            Principle::Isp => interface_segregation(&mut report),
            Principle::Dip => dependency_inversion(&mut report),
        }
        report
    }

    /// Run several principles in the given order
    pub fn run_all(&self, principles: &[Principle]) -> Vec<PrincipleReport> {
        principles.iter().map(|p| self.run(*p)).collect()
    }

    fn liskov_substitution(&self, report: &mut PrincipleReport) {
        let fly = self.fixtures.eagle_fly_speed;
        let swim = self.fixtures.penguin_swim_speed;

        let eagle = Eagle::new("Eagle", fly);
        report.violating("eagle.fly_speed", eagle.0.fly_speed);
        // A penguin cannot say "can't fly"; zero is the closest lie.
        let penguin = Penguin::new("Penguin", 0.0, swim);
        report.violating("penguin.fly_speed", penguin.bird.fly_speed);
        report.violating("penguin.swim_speed", penguin.swim_speed);

        let good_eagle = GoodEagle::new("Eagle", fly);
        let good_penguin = GoodPenguin::new("Peanguin", swim);
        report.corrected("good_eagle.fly_speed()", good_eagle.fly_speed());
        report.corrected("good_penguin.swim_speed()", good_penguin.swim_speed());
        report.corrected(
            "fastest_flyer([good_eagle])",
            fastest_flyer(&[&good_eagle]),
        );
    }
}

fn single_responsibility(report: &mut PrincipleReport) {
    let panel = SwitchPanel::new();
    report.violating("panel.status()", panel.status());
    panel.press_on();
    report.violating("panel.status()", panel.status());

    let switcher = Switch::new();
    report.corrected("switcher.is_on()", switcher.is_on());
    SwitchOn::new(&switcher).execute();
    report.corrected("switcher.is_on()", switcher.is_on());
    SwitchOff::new(&switcher).execute();
    report.corrected("switcher.is_on()", switcher.is_on());
}

fn open_closed(report: &mut PrincipleReport) {
    let ios1 = IosDeveloper;
    let ios2 = IosDeveloper;
    let ios_cool1 = IosDeveloperCool;
    let ios_cool2 = IosDeveloperCool;

    let team = Team::new(vec![ios1, ios2], vec![ios_cool1, ios_cool2]);
    report.violating("team.programming_team()", team.programming_team());

    let web_dev = WebDeveloper;
    let cool_team = CoolTeam::new(vec![&ios1 as &dyn CanWriteCode, &ios_cool1, &web_dev]);
    report.corrected(
        "cool_team.programming_cool_team()",
        cool_team.programming_cool_team(),
    );
}

fn interface_segregation(report: &mut PrincipleReport) {
    let ios = Ios::new(true, true, false, false, false, false);
    report.violating("ios fields", declared_fields(&ios));

    let ios_dev = IosDev::new(true, true);
    let front = Front::new(true, true);
    let back = Back::new(true, true);
    report.corrected("ios_dev fields", declared_fields(&ios_dev));
    report.corrected("front fields", declared_fields(&front));
    report.corrected("back fields", declared_fields(&back));
}

fn dependency_inversion(report: &mut PrincipleReport) {
    report.violating("unhappy_man.food()", UnhappyMan::new().food());
    report.violating("man.food()", HappyMan::new(Box::new(GoodWife)).food());
    report.violating("new_man.food()", HappyMan::new(Box::new(SecondWife)).food());

    let mut happiest_man = HappiestMan::new(Box::new(Mother));
    report.corrected("happiest_man.food()", happiest_man.food());
    happiest_man.set_food_provider(Box::new(Sister));
    report.corrected("happiest_man.food()", happiest_man.food());
    happiest_man.set_food_provider(Box::new(ThirdWife));
    report.corrected("happiest_man.food()", happiest_man.food());
}
