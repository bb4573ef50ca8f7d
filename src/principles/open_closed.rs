//! Open/Closed: a team of developers
//!
//! `Team` has one field per developer kind, so hiring a new kind means
//! editing the struct. `CoolTeam` holds any `CanWriteCode` and never changes.

/// A developer who can report the language they write
pub trait CanWriteCode {
    fn programming(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IosDeveloper;

impl CanWriteCode for IosDeveloper {
    fn programming(&self) -> &str {
        "Object-C"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IosDeveloperCool;

impl CanWriteCode for IosDeveloperCool {
    fn programming(&self) -> &str {
        "Swift"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebDeveloper;

impl CanWriteCode for WebDeveloper {
    fn programming(&self) -> &str {
        "Ruby"
    }
}

/// Violating design: a fixed field per concrete developer type.
#[derive(Debug, Clone, Default)]
pub struct Team {
    pub ios: Vec<IosDeveloper>,
    pub ios_cool: Vec<IosDeveloperCool>,
}

impl Team {
    pub fn new(ios: Vec<IosDeveloper>, ios_cool: Vec<IosDeveloperCool>) -> Self {
        Self { ios, ios_cool }
    }

    /// Labels of all `ios` members followed by all `ios_cool` members
    pub fn programming_team(&self) -> Vec<&str> {
        self.ios
            .iter()
            .map(|dev| dev.programming())
            .chain(self.ios_cool.iter().map(|dev| dev.programming()))
            .collect()
    }
}

/// Roster of any developers, in insertion order.
///
/// Members are borrowed: the same developer may sit on several teams.
#[derive(Default)]
pub struct CoolTeam<'a> {
    team: Vec<&'a dyn CanWriteCode>,
}

impl<'a> CoolTeam<'a> {
    pub fn new(team: Vec<&'a dyn CanWriteCode>) -> Self {
        Self { team }
    }

    /// Append a member
    pub fn with_member(mut self, member: &'a dyn CanWriteCode) -> Self {
        self.team.push(member);
        self
    }

    pub fn len(&self) -> usize {
        self.team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_empty()
    }

    /// Each member's language, preserving member order
    pub fn programming_cool_team(&self) -> Vec<&'a str> {
        self.team.iter().copied().map(|dev| dev.programming()).collect()
    }
}
