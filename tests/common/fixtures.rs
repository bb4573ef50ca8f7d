//! Reusable config contents.

#![allow(dead_code)]

/// Only the Liskov unit, with custom bird speeds
pub const LSP_FAST_BIRDS: &str = r#"
[principles]
enabled = ["lsp"]

[fixtures]
eagle_fly_speed = 88.0
penguin_swim_speed = 12.0
"#;

/// JSON output for two principles
pub const JSON_SRP_DIP: &str = r#"
[principles]
enabled = ["dip", "srp"]

[output]
format = "json"
"#;

/// Contains a misspelled key
pub const TYPO_CONFIG: &str = r#"
[output]
verbosty = "debug"
"#;
