use std::collections::HashMap;

use crate::models::{Assignment, Student};

/// A table row addressable by id and by display name.
pub trait Record {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Record for Student {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Assignment {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Id-keyed table that iterates in first-insertion order.
///
/// Re-inserting an existing id replaces the entry but keeps the slot of the
/// first occurrence, so later lines in a file overwrite earlier ones without
/// reordering the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<T> {
    entries: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Record> Roster<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: T) {
        match self.positions.get(entry.id()) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.positions
                    .insert(entry.id().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.positions.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Record> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for entry in iter {
            roster.insert(entry);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn iterates_in_insertion_order() {
        let roster: Roster<Student> = vec![student("3", "Cara"), student("1", "Avery")]
            .into_iter()
            .collect();
        let ids: Vec<&str> = roster.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn last_write_wins_without_moving_the_entry() {
        let mut roster = Roster::new();
        roster.insert(student("1", "Avery"));
        roster.insert(student("2", "Jules"));
        roster.insert(student("1", "Avery Lee"));

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("1").map(|s| s.name.as_str()), Some("Avery Lee"));
        let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Avery Lee", "Jules"]);
    }

    #[test]
    fn missing_id_is_none() {
        let roster: Roster<Student> = Roster::new();
        assert!(roster.is_empty());
        assert!(roster.get("42").is_none());
    }
}
