use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("unknown category: {0}")]
    Unknown(String),
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// A closed set of outcomes a quiz can resolve to.
///
/// Implementors are plain enums. `ALL` lists every variant in definition order
/// and holds at least two entries.
pub trait Category: Copy + Eq + Hash + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Stable lowercase name, used for display text, asset names and data files.
    fn slug(self) -> &'static str;

    /// Looks up a category by its slug.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Unknown` if no variant carries that slug.
    fn from_slug(slug: &str) -> Result<Self, CategoryError> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.slug() == slug)
            .ok_or_else(|| CategoryError::Unknown(slug.to_string()))
    }
}

//
// ─── ANIMAL ───────────────────────────────────────────────────────────────────
//

/// The animals the reference quiz can tell you that you are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    Cat,
    Dog,
    Fox,
    Hamster,
    Horse,
}

impl Category for Animal {
    const ALL: &'static [Self] = &[
        Animal::Cat,
        Animal::Dog,
        Animal::Fox,
        Animal::Hamster,
        Animal::Horse,
    ];

    fn slug(self) -> &'static str {
        match self {
            Animal::Cat => "cat",
            Animal::Dog => "dog",
            Animal::Fox => "fox",
            Animal::Hamster => "hamster",
            Animal::Horse => "horse",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Animal {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s.trim())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
