use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const SUCCESS_GLYPH: &str = "✅";
pub const ERROR_GLYPH: &str = "❌";

pub const SUCCESS_MARKERS: [&str; 2] = ["bg-green-100", "border-green-400"];
pub const ERROR_MARKERS: [&str; 2] = ["bg-red-100", "border-red-400"];

/// Every category marker, cleared before a new category is applied.
pub const CATEGORY_MARKERS: [&str; 4] = [
    SUCCESS_MARKERS[0],
    SUCCESS_MARKERS[1],
    ERROR_MARKERS[0],
    ERROR_MARKERS[1],
];

pub const VISIBLE_MARKERS: [&str; 2] = ["opacity-100", "translate-y-0"];
pub const HIDDEN_MARKERS: [&str; 2] = ["opacity-0", "translate-y-64"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Success,
    Error,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Success, Category::Error];

    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Category::Success => &SUCCESS_MARKERS,
            Category::Error => &ERROR_MARKERS,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Success => SUCCESS_GLYPH,
            Category::Error => ERROR_GLYPH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Category::Success),
            "error" => Ok(Category::Error),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub category: Category,
}

impl Toast {
    pub fn new<S: AsRef<str>>(title: S, message: String, category: Category) -> Self {
        Self {
            title: title.as_ref().to_string(),
            message,
            category,
        }
    }
}
