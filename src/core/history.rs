use crate::domain::RomanNumeral;
use crate::utils::error::EmptyHistory;
use serde::{Deserialize, Serialize};

/// Ordered log of computed results for one session.
///
/// Entries are only ever added at the end and removed from the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<RomanNumeral>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: RomanNumeral) {
        tracing::debug!(entry = %entry, size = self.entries.len() + 1, "history append");
        self.entries.push(entry);
    }

    /// Removes and returns the most recent entry.
    pub fn remove_last(&mut self) -> Result<RomanNumeral, EmptyHistory> {
        let entry = self.entries.pop().ok_or(EmptyHistory)?;
        tracing::debug!(entry = %entry, size = self.entries.len(), "history remove");
        Ok(entry)
    }

    pub fn list_all(&self) -> &[RomanNumeral] {
        &self.entries
    }

    pub fn last(&self) -> Option<&RomanNumeral> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.entries
            .iter()
            .map(RomanNumeral::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<RomanNumeral> for History {
    fn from_iter<I: IntoIterator<Item = RomanNumeral>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeral(s: &str) -> RomanNumeral {
        RomanNumeral::parse(s).unwrap()
    }

    fn listed(history: &History) -> Vec<&str> {
        history.list_all().iter().map(RomanNumeral::as_str).collect()
    }

    #[test]
    fn test_append_remove_cycle() {
        let mut history = History::new();
        history.append(numeral("V"));
        history.append(numeral("X"));
        assert_eq!(listed(&history), vec!["V", "X"]);

        assert_eq!(history.remove_last().unwrap().as_str(), "X");
        assert_eq!(listed(&history), vec!["V"]);

        assert_eq!(history.remove_last().unwrap().as_str(), "V");
        assert!(history.list_all().is_empty());

        assert_eq!(history.remove_last(), Err(EmptyHistory));
        assert!(history.is_empty());
    }

    #[test]
    fn test_list_all_is_idempotent() {
        let history: History = ["I", "II", "III"].into_iter().map(numeral).collect();
        let first = history.list_all().to_vec();
        let second = history.list_all().to_vec();
        assert_eq!(first, second);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_join_and_last() {
        let mut history = History::new();
        assert_eq!(history.join(", "), "");
        assert!(history.last().is_none());

        history.append(numeral("IV"));
        history.append(numeral("IX"));
        assert_eq!(history.join(", "), "IV, IX");
        assert_eq!(history.last().map(RomanNumeral::as_str), Some("IX"));
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut history = History::new();
        history.append(numeral("V"));
        history.append(numeral("V"));
        assert_eq!(listed(&history), vec!["V", "V"]);
    }
}
