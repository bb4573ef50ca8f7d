//! Interface Segregation: developer skills
//!
//! `Skills` bundles six flags, so an iOS vacancy still has to answer for
//! HTML and PHP. Splitting it into one contract per role lets every
//! implementer declare only what it is.

use serde::Serialize;

/// Violating contract: every skill in one trait
pub trait Skills {
    fn swift(&self) -> bool;
    fn set_swift(&mut self, value: bool);
    fn object_c(&self) -> bool;
    fn set_object_c(&mut self, value: bool);
    fn html(&self) -> bool;
    fn set_html(&mut self, value: bool);
    fn css(&self) -> bool;
    fn set_css(&mut self, value: bool);
    fn ruby(&self) -> bool;
    fn set_ruby(&mut self, value: bool);
    fn php(&self) -> bool;
    fn set_php(&mut self, value: bool);
}

/// Violating implementer: an iOS developer forced to carry web flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ios {
    swift: bool,
    object_c: bool,
    html: bool,
    css: bool,
    ruby: bool,
    php: bool,
}

impl Ios {
    pub fn new(swift: bool, object_c: bool, html: bool, css: bool, ruby: bool, php: bool) -> Self {
        Self {
            swift,
            object_c,
            html,
            css,
            ruby,
            php,
        }
    }
}

impl Skills for Ios {
    fn swift(&self) -> bool {
        self.swift
    }
    fn set_swift(&mut self, value: bool) {
        self.swift = value;
    }
    fn object_c(&self) -> bool {
        self.object_c
    }
    fn set_object_c(&mut self, value: bool) {
        self.object_c = value;
    }
    fn html(&self) -> bool {
        self.html
    }
    fn set_html(&mut self, value: bool) {
        self.html = value;
    }
    fn css(&self) -> bool {
        self.css
    }
    fn set_css(&mut self, value: bool) {
        self.css = value;
    }
    fn ruby(&self) -> bool {
        self.ruby
    }
    fn set_ruby(&mut self, value: bool) {
        self.ruby = value;
    }
    fn php(&self) -> bool {
        self.php
    }
    fn set_php(&mut self, value: bool) {
        self.php = value;
    }
}

/// Mobile skills
pub trait IosSkill {
    fn swift(&self) -> bool;
    fn set_swift(&mut self, value: bool);
    fn object_c(&self) -> bool;
    fn set_object_c(&mut self, value: bool);
}

/// Front-end skills
pub trait FrontSkill {
    fn html(&self) -> bool;
    fn set_html(&mut self, value: bool);
    fn css(&self) -> bool;
    fn set_css(&mut self, value: bool);
}

/// Back-end skills
pub trait BackSkill {
    fn ruby(&self) -> bool;
    fn set_ruby(&mut self, value: bool);
    fn php(&self) -> bool;
    fn set_php(&mut self, value: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IosDev {
    swift: bool,
    object_c: bool,
}

impl IosDev {
    pub fn new(swift: bool, object_c: bool) -> Self {
        Self { swift, object_c }
    }
}

impl IosSkill for IosDev {
    fn swift(&self) -> bool {
        self.swift
    }
    fn set_swift(&mut self, value: bool) {
        self.swift = value;
    }
    fn object_c(&self) -> bool {
        self.object_c
    }
    fn set_object_c(&mut self, value: bool) {
        self.object_c = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Front {
    html: bool,
    css: bool,
}

impl Front {
    pub fn new(html: bool, css: bool) -> Self {
        Self { html, css }
    }
}

impl FrontSkill for Front {
    fn html(&self) -> bool {
        self.html
    }
    fn set_html(&mut self, value: bool) {
        self.html = value;
    }
    fn css(&self) -> bool {
        self.css
    }
    fn set_css(&mut self, value: bool) {
        self.css = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Back {
    ruby: bool,
    php: bool,
}

impl Back {
    pub fn new(ruby: bool, php: bool) -> Self {
        Self { ruby, php }
    }
}

impl BackSkill for Back {
    fn ruby(&self) -> bool {
        self.ruby
    }
    fn set_ruby(&mut self, value: bool) {
        self.ruby = value;
    }
    fn php(&self) -> bool {
        self.php
    }
    fn set_php(&mut self, value: bool) {
        self.php = value;
    }
}

/// A skill holder whose flags are plain named struct fields.
///
/// Only the types in this module implement it, so [`declared_fields`] never
/// sees a value that serializes to anything but a JSON object.
pub trait SkillSet: Serialize + sealed::Sealed {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Ios {}
    impl Sealed for super::IosDev {}
    impl Sealed for super::Front {}
    impl Sealed for super::Back {}
}

impl SkillSet for Ios {}
impl SkillSet for IosDev {}
impl SkillSet for Front {}
impl SkillSet for Back {}

/// Names of the fields a skill set carries, sorted.
pub fn declared_fields(value: &impl SkillSet) -> Vec<String> {
    let mut keys: Vec<String> = serde_json::to_value(value)
        .ok()
        .and_then(|json| json.as_object().map(|obj| obj.keys().cloned().collect()))
        .unwrap_or_default();
    keys.sort();
    keys
}
