//! Dependency Inversion: who feeds the man
//!
//! Three steps. `UnhappyMan` builds his own `FirstWife` and can never eat
//! anything else. `HappyMan` receives any `Wife`, but still has to be
//! married to eat. `HappiestMan` depends on `CanProvideFood` alone and can
//! swap providers at any time.

use tracing::debug;

/// A concrete, non-substitutable provider
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWife;

impl FirstWife {
    pub fn get_food(&self) -> &str {
        "Vegeterian food"
    }
}

/// Violating design: owns one fixed provider
#[derive(Debug, Default)]
pub struct UnhappyMan {
    wife: FirstWife,
}

impl UnhappyMan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn food(&self) -> &str {
        self.wife.get_food()
    }
}

/// Provider contract still named after one family
pub trait Wife {
    fn get_food(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoodWife;

impl Wife for GoodWife {
    fn get_food(&self) -> &str {
        "Good food"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SecondWife;

impl Wife for SecondWife {
    fn get_food(&self) -> &str {
        "Best food"
    }
}

/// Depends on the `Wife` abstraction, injected at construction
pub struct HappyMan {
    wife: Box<dyn Wife>,
}

impl HappyMan {
    pub fn new(wife: Box<dyn Wife>) -> Self {
        Self { wife }
    }

    pub fn food(&self) -> &str {
        self.wife.get_food()
    }
}

/// Anything that can provide food, regardless of family
pub trait CanProvideFood {
    fn get_food(&self) -> &str;
}

// Every wife can feed the happiest man too.
impl<T: Wife> CanProvideFood for T {
    fn get_food(&self) -> &str {
        Wife::get_food(self)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mother;

impl CanProvideFood for Mother {
    fn get_food(&self) -> &str {
        "Bestly food"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sister;

impl CanProvideFood for Sister {
    fn get_food(&self) -> &str {
        "Like food"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdWife;

impl CanProvideFood for ThirdWife {
    fn get_food(&self) -> &str {
        "fust food"
    }
}

/// Depends only on `CanProvideFood`; the provider can be replaced later.
pub struct HappiestMan {
    food_provider: Box<dyn CanProvideFood>,
}

impl HappiestMan {
    pub fn new(food_provider: Box<dyn CanProvideFood>) -> Self {
        Self { food_provider }
    }

    /// Replace the provider, returning the previous one
    pub fn set_food_provider(
        &mut self,
        food_provider: Box<dyn CanProvideFood>,
    ) -> Box<dyn CanProvideFood> {
        debug!(
            from = self.food_provider.get_food(),
            to = food_provider.get_food(),
            "food provider reassigned"
        );
        std::mem::replace(&mut self.food_provider, food_provider)
    }

    pub fn food_provider(&self) -> &dyn CanProvideFood {
        self.food_provider.as_ref()
    }

    /// Food from the current provider
    pub fn food(&self) -> &str {
        self.food_provider.get_food()
    }
}
