//! Roster model and normalizer.
//!
//! Turns free-form text into an ordered list of entities. Order is kept
//! for display only; it carries no weight for grouping.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Entity;

/// How raw roster text is split into entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RosterFormat {
    /// One entry per line (`\n` or `\r\n`).
    #[default]
    Lines,
    /// Entries separated by any run of newlines, commas, or semicolons.
    Delimited,
}

/// An ordered list of roster members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entities: Vec<Entity>,
}

impl Roster {
    /// Parses roster text. Entries are trimmed and empty entries dropped.
    ///
    /// Never fails: duplicates are kept and reported by [`Roster::duplicates`].
    ///
    /// # Example
    /// ```
    /// use u_group::models::{Roster, RosterFormat};
    ///
    /// let roster = Roster::parse("Avery, Jordan;\n  Sam \n\n", RosterFormat::Delimited);
    /// assert_eq!(roster.labels(), vec!["Avery", "Jordan", "Sam"]);
    /// ```
    pub fn parse(text: &str, format: RosterFormat) -> Self {
        let entries: Vec<&str> = match format {
            RosterFormat::Lines => text.lines().collect(),
            RosterFormat::Delimited => text.split(['\n', ',', ';']).collect(),
        };
        Self::from_labels(entries)
    }

    /// Builds a roster from labels, trimming and skipping blank ones.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entities = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .map(Entity::new)
            .collect();
        Self { entities }
    }

    /// Members in input order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Display labels in input order.
    pub fn labels(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.label.as_str()).collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Labels that repeat an earlier label case-insensitively.
    ///
    /// Each offending label is listed once, in the order it was encountered.
    /// The first occurrence of a name is not itself reported.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for entity in &self.entities {
            let key = entity.label.to_lowercase();
            if !seen.insert(key) && reported.insert(entity.label.as_str()) {
                duplicates.push(entity.label.as_str());
            }
        }
        duplicates
    }

    /// Whether any label repeats case-insensitively.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates().is_empty()
    }
}
