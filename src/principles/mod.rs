//! The five demonstration units
//!
//! Each module holds a violating design and its corrected counterpart.
//! The modules never refer to one another.
//!
//! - `single_responsibility` - on/off switch
//! - `open_closed` - developer team
//! - `liskov_substitution` - flying and swimming birds
//! - `interface_segregation` - developer skills
//! - `dependency_inversion` - who feeds the man

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;
