// src/record.rs
//
// Extracted transcript values. Column sets are driven by whatever header
// text the export carries, so records are small insertion-ordered maps
// rather than fixed structs.

use crate::config::consts::*;

/// Insertion-ordered string map. Re-inserting a key replaces its value
/// but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut f = Fields::new();
        for (k, v) in iter {
            f.insert(k.into(), v.into());
        }
        f
    }
}

/// Key/value attributes from the student-info table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentInfo(Fields);

/// Display triple for a sidebar/profile header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub student_number: String,
    pub program: String,
}

impl StudentInfo {
    pub fn new(fields: Fields) -> Self { Self(fields) }

    pub fn get(&self, key: &str) -> Option<&str> { self.0.get(key) }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> { self.0.iter() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn profile(&self) -> Profile {
        let pick = |k: &str| s!(self.get(k).unwrap_or(INFO_MISSING));
        Profile {
            name: pick(INFO_NAME),
            student_number: pick(INFO_STUDENT_NUMBER),
            program: pick(INFO_PROGRAM),
        }
    }
}

/// One raw grade row, keyed by the header text of its source table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradeRecord(Fields);

impl GradeRecord {
    pub fn new(fields: Fields) -> Self { Self(fields) }

    pub fn fields(&self) -> &Fields { &self.0 }
    pub fn get(&self, column: &str) -> Option<&str> { self.0.get(column) }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn course(&self) -> Option<&str> { self.get(COL_COURSE) }
    pub fn grade(&self) -> Option<&str> { self.get(COL_GRADE) }
    pub fn units(&self) -> Option<&str> { self.get(COL_UNITS) }
    pub fn year(&self) -> Option<&str> { self.get(COL_YEAR) }
    pub fn semester(&self) -> Option<&str> { self.get(COL_SEMESTER) }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GradeRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        GradeRecord(iter.into_iter().collect())
    }
}
