//! Module name tagging.
//!
//! A tag is a suffix appended to the generated module name so that several
//! builds of the same interface can be installed side by side. The tag is
//! either given explicitly (stable across rebuilds) or derived from the
//! local wall-clock time (unique per build, to the second).

use chrono::{DateTime, Local};

/// `strftime` format of a timestamp tag: fixed width, sorts chronologically.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Tagging policy for the module name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tag {
    /// Module name is used as-is.
    #[default]
    None,
    /// Append `_<value>`.
    Explicit(String),
    /// Append `_<YYYYMMDDHHMMSS>` taken from the clock at resolve time.
    Timestamp,
}

impl Tag {
    /// Build a policy from the `enabled` flag and an optional explicit value.
    ///
    /// A value is ignored while tagging is disabled; callers that want an
    /// explicit value to imply tagging must fold that into `enabled`.
    pub fn new(enabled: bool, value: Option<String>) -> Self {
        match (enabled, value) {
            (false, _) => Tag::None,
            (true, Some(value)) => Tag::Explicit(value),
            (true, None) => Tag::Timestamp,
        }
    }

    /// Whether this policy changes the module name.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Tag::None)
    }

    /// Apply the policy to `base`, reading the clock if needed.
    pub fn apply(&self, base: &str) -> String {
        self.apply_at(base, Local::now())
    }

    /// Apply the policy to `base` using `now` for timestamp tags.
    pub fn apply_at(&self, base: &str, now: DateTime<Local>) -> String {
        match self {
            Tag::None => base.to_string(),
            Tag::Explicit(value) => format!("{}_{}", base, value),
            Tag::Timestamp => format!("{}_{}", base, timestamp(now)),
        }
    }
}

/// Format `now` as a timestamp tag.
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Apply a tag described by loose flags to `base`.
pub fn apply_tag(base: &str, enabled: bool, value: Option<&str>) -> String {
    Tag::new(enabled, value.map(str::to_string)).apply(base)
}
