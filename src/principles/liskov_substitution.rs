//! Liskov Substitution: birds that fly and swim
//!
//! The violating `Bird` forces every subtype to carry a fly speed, so a
//! penguin has to lie about flying and widen the base constructor to add
//! swimming. The corrected design keeps only identity in `GeneralBird` and
//! attaches flight and swimming as independent contracts.

use serde::Serialize;

/// Violating base type: every bird has a fly speed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bird {
    pub name: String,
    pub fly_speed: f64,
}

impl Bird {
    pub fn new(name: impl Into<String>, fly_speed: f64) -> Self {
        Self {
            name: name.into(),
            fly_speed,
        }
    }
}

/// Violating subtype that flies for real
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eagle(pub Bird);

impl Eagle {
    pub fn new(name: impl Into<String>, fly_speed: f64) -> Self {
        Self(Bird::new(name, fly_speed))
    }
}

/// Violating subtype that cannot fly but still needs a fly speed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Penguin {
    #[serde(flatten)]
    pub bird: Bird,
    pub swim_speed: f64,
}

impl Penguin {
    pub fn new(name: impl Into<String>, fly_speed: f64, swim_speed: f64) -> Self {
        Self {
            bird: Bird::new(name, fly_speed),
            swim_speed,
        }
    }
}

/// Anything with a bird identity
pub trait Named {
    fn name(&self) -> &str;
}

/// Can fly at a given speed
pub trait CanFly {
    fn fly_speed(&self) -> f64;
    fn set_fly_speed(&mut self, speed: f64);
}

/// Can swim at a given speed
pub trait CanSwim {
    fn swim_speed(&self) -> f64;
    fn set_swim_speed(&mut self, speed: f64);
}

/// Identity shared by every corrected bird
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralBird {
    pub name: String,
}

impl GeneralBird {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for GeneralBird {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoodEagle {
    #[serde(flatten)]
    identity: GeneralBird,
    fly_speed: f64,
}

impl GoodEagle {
    pub fn new(name: impl Into<String>, fly_speed: f64) -> Self {
        Self {
            identity: GeneralBird::new(name),
            fly_speed,
        }
    }
}

impl Named for GoodEagle {
    fn name(&self) -> &str {
        self.identity.name()
    }
}

impl CanFly for GoodEagle {
    fn fly_speed(&self) -> f64 {
        self.fly_speed
    }

    fn set_fly_speed(&mut self, speed: f64) {
        self.fly_speed = speed;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoodPenguin {
    #[serde(flatten)]
    identity: GeneralBird,
    swim_speed: f64,
}

impl GoodPenguin {
    pub fn new(name: impl Into<String>, swim_speed: f64) -> Self {
        Self {
            identity: GeneralBird::new(name),
            swim_speed,
        }
    }
}

impl Named for GoodPenguin {
    fn name(&self) -> &str {
        self.identity.name()
    }
}

impl CanSwim for GoodPenguin {
    fn swim_speed(&self) -> f64 {
        self.swim_speed
    }

    fn set_swim_speed(&mut self, speed: f64) {
        self.swim_speed = speed;
    }
}

/// Flies and swims; the two speeds are independent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Duck {
    #[serde(flatten)]
    identity: GeneralBird,
    fly_speed: f64,
    swim_speed: f64,
}

impl Duck {
    pub fn new(name: impl Into<String>, fly_speed: f64, swim_speed: f64) -> Self {
        Self {
            identity: GeneralBird::new(name),
            fly_speed,
            swim_speed,
        }
    }
}

impl Named for Duck {
    fn name(&self) -> &str {
        self.identity.name()
    }
}

impl CanFly for Duck {
    fn fly_speed(&self) -> f64 {
        self.fly_speed
    }

    fn set_fly_speed(&mut self, speed: f64) {
        self.fly_speed = speed;
    }
}

impl CanSwim for Duck {
    fn swim_speed(&self) -> f64 {
        self.swim_speed
    }

    fn set_swim_speed(&mut self, speed: f64) {
        self.swim_speed = speed;
    }
}

/// Highest fly speed among `flyers`, `None` when empty.
///
/// Works for every `CanFly`, with no knowledge of the concrete bird.
pub fn fastest_flyer(flyers: &[&dyn CanFly]) -> Option<f64> {
    flyers.iter().map(|bird| bird.fly_speed()).reduce(f64::max)
}

/// Highest swim speed among `swimmers`, `None` when empty.
pub fn fastest_swimmer(swimmers: &[&dyn CanSwim]) -> Option<f64> {
    swimmers.iter().map(|bird| bird.swim_speed()).reduce(f64::max)
}
