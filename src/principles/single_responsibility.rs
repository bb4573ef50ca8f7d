//! Single Responsibility: an on/off switch
//!
//! `SwitchPanel` owns a concrete switch and both commands, so it changes for
//! two unrelated reasons. The corrected design gives each command its own
//! consumer that only sees the one capability it needs.

use std::cell::Cell;

use tracing::debug;

/// Something that can be switched on
pub trait CanBeOn {
    fn on(&self);
}

/// Something that can be switched off
pub trait CanBeOff {
    fn off(&self);
}

/// A stateful switch, off when created
#[derive(Debug, Default)]
pub struct Switch {
    state_on: Cell<bool>,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn is_on(&self) -> bool {
        self.state_on.get()
    }
}

impl CanBeOn for Switch {
    fn on(&self) {
        self.state_on.set(true);
    }
}

impl CanBeOff for Switch {
    fn off(&self) {
        self.state_on.set(false);
    }
}

/// Consumer responsible only for switching on
pub struct SwitchOn<'a> {
    switcher: &'a dyn CanBeOn,
}

impl<'a> SwitchOn<'a> {
    pub fn new(switcher: &'a dyn CanBeOn) -> Self {
        Self { switcher }
    }

    pub fn execute(&self) {
        debug!("switching on");
        self.switcher.on();
    }
}

/// Consumer responsible only for switching off
pub struct SwitchOff<'a> {
    switcher: &'a dyn CanBeOff,
}

impl<'a> SwitchOff<'a> {
    pub fn new(switcher: &'a dyn CanBeOff) -> Self {
        Self { switcher }
    }

    pub fn execute(&self) {
        debug!("switching off");
        self.switcher.off();
    }
}

/// Violating design: one type owns the switch, both commands and reporting.
#[derive(Debug, Default)]
pub struct SwitchPanel {
    switch: Switch,
}

impl SwitchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_on(&self) {
        self.switch.on();
    }

    pub fn press_off(&self) {
        self.switch.off();
    }

    pub fn status(&self) -> &'static str {
        if self.switch.is_on() {
            "on"
        } else {
            "off"
        }
    }
}
