//! Classification levels and label parsing.
//!
//! [`ClassificationLevel`] is the single ordered enumeration used for every
//! clearance comparison. [`ClassificationLevel::from_label`] is the only
//! place a free-text document label is mapped to a level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Classification level, totally ordered.
///
/// `Unclassified < Confidential < Secret < TopSecret`. The derived `Ord`
/// follows declaration order, which matches the numeric rank.
///
/// # Example
///
/// ```rust
/// use holon_core::ClassificationLevel;
///
/// assert!(ClassificationLevel::TopSecret > ClassificationLevel::Secret);
/// assert_eq!(ClassificationLevel::Confidential.rank(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationLevel {
    /// Rank 0. Also the level of anything without resolvable provenance.
    #[default]
    Unclassified,
    /// Rank 1.
    Confidential,
    /// Rank 2.
    Secret,
    /// Rank 3.
    TopSecret,
}

/// Labels tested against a document's metadata, most specific first.
///
/// `TOP SECRET` must precede `SECRET` or every top secret document would
/// resolve one level too low.
const LABELS: [(&str, ClassificationLevel); 3] = [
    ("TOP SECRET", ClassificationLevel::TopSecret),
    ("SECRET", ClassificationLevel::Secret),
    ("CONFIDENTIAL", ClassificationLevel::Confidential),
];

impl ClassificationLevel {
    /// All levels in ascending order.
    pub const ALL: [ClassificationLevel; 4] = [
        ClassificationLevel::Unclassified,
        ClassificationLevel::Confidential,
        ClassificationLevel::Secret,
        ClassificationLevel::TopSecret,
    ];

    /// Numeric rank (0..=3).
    pub fn rank(self) -> u8 {
        match self {
            Self::Unclassified => 0,
            Self::Confidential => 1,
            Self::Secret => 2,
            Self::TopSecret => 3,
        }
    }

    /// Maps a free-text classification label to a level.
    ///
    /// Matching is a case-insensitive substring search, testing
    /// `TOP SECRET`, then `SECRET`, then `CONFIDENTIAL`. Each run of
    /// separators (whitespace, `_`, `-`) counts as one space, so
    /// `top_secret` matches `TOP SECRET` but `TOPSECRET` only matches
    /// `SECRET`. Anything else is `Unclassified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holon_core::ClassificationLevel;
    ///
    /// assert_eq!(ClassificationLevel::from_label("TOP SECRET//NOFORN"), ClassificationLevel::TopSecret);
    /// assert_eq!(ClassificationLevel::from_label("secret"), ClassificationLevel::Secret);
    /// assert_eq!(ClassificationLevel::from_label("Confidential"), ClassificationLevel::Confidential);
    /// assert_eq!(ClassificationLevel::from_label("internal"), ClassificationLevel::Unclassified);
    /// ```
    pub fn from_label(label: &str) -> Self {
        let normalized = normalize_label(label);
        LABELS
            .iter()
            .find(|(needle, _)| normalized.contains(needle))
            .map(|(_, level)| *level)
            .unwrap_or_default()
    }

    /// Canonical display label (e.g. "TOP SECRET").
    pub fn label(self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::Confidential => "CONFIDENTIAL",
            Self::Secret => "SECRET",
            Self::TopSecret => "TOP SECRET",
        }
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Uppercases a label and collapses each run of separators to one space.
fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_separator = false;
    for c in label.chars() {
        if is_separator(c) {
            if !in_separator {
                out.push(' ');
            }
            in_separator = true;
        } else {
            out.extend(c.to_uppercase());
            in_separator = false;
        }
    }
    out
}

/// Uppercases a name and drops separators entirely.
fn compact_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !is_separator(*c))
        .flat_map(char::to_uppercase)
        .collect()
}

impl fmt::Display for ClassificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClassificationLevel {
    type Err = Error;

    /// Strict parse of a level name, for configuration and CLI input.
    ///
    /// Unlike [`ClassificationLevel::from_label`], unknown names are an error.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match compact_label(s).as_str() {
            "UNCLASSIFIED" | "0" => Ok(Self::Unclassified),
            "CONFIDENTIAL" | "1" => Ok(Self::Confidential),
            "SECRET" | "2" => Ok(Self::Secret),
            "TOPSECRET" | "3" => Ok(Self::TopSecret),
            _ => Err(Error::parse("classification level", s)),
        }
    }
}
