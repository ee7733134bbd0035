//! Font references and name resolution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Family name used for the platform's default typeface.
pub const SYSTEM_FAMILY: &str = "system";

/// Font weight, from lightest to heaviest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

/// An opaque font reference: a family name, a point size and a weight.
///
/// `garnish` never loads font data; the reference is carried as an attribute
/// and interpreted by whatever renders the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
        }
    }

    /// The default system typeface at the given size.
    pub fn system(size: f64) -> Self {
        Self::new(SYSTEM_FAMILY, size)
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// True for semibold and heavier weights.
    pub fn is_bold(&self) -> bool {
        self.weight >= FontWeight::Semibold
    }
}

/// Resolves a family name to a usable font.
///
/// Builders fall back to [`Font::system`] when resolution returns `None`.
pub trait FontResolver {
    fn resolve(&self, family: &str, size: f64) -> Option<Font>;
}

/// A [`FontResolver`] backed by a fixed set of known family names.
///
/// # Example
///
/// ```rust
/// use garnish::text::{FontCatalog, FontResolver};
///
/// let catalog = FontCatalog::new().add("Avenir").add("Menlo");
/// assert!(catalog.resolve("Menlo", 12.0).is_some());
/// assert!(catalog.resolve("Comic Sans", 12.0).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    families: BTreeSet<String>,
}

impl FontCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a family name, returning the catalog for chaining.
    #[must_use]
    pub fn add(mut self, family: impl Into<String>) -> Self {
        self.families.insert(family.into());
        self
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains(family)
    }
}

impl FontResolver for FontCatalog {
    fn resolve(&self, family: &str, size: f64) -> Option<Font> {
        self.contains(family).then(|| Font::new(family, size))
    }
}
