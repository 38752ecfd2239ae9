use std::{ops::Deref, slice::Iter, sync::Arc};

use derive_more::{Deref, Display, Into};

#[derive(Deref, Display, Into, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(i64);

impl From<i64> for ExerciseID {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: ExerciseID,
    pub name: String,
    pub exercise_type: String,
    pub body_part: String,
    pub equipment: String,
    pub gender: String,
    pub target: String,
    pub synergist: String,
    pub category: Option<String>,
}

/// Immutable, ordered snapshot of all exercise records of one successful load.
///
/// Clones share the same allocation, so every caller that receives a published catalog sees the
/// identical sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(Arc<[ExerciseRecord]>);

impl Catalog {
    #[must_use]
    pub fn iter(&self) -> Iter<'_, ExerciseRecord> {
        self.0.iter()
    }

    #[must_use]
    pub fn find(&self, id: ExerciseID) -> Option<&ExerciseRecord> {
        self.0.iter().find(|r| r.id == id)
    }

    /// Returns true if both catalogs refer to the same published snapshot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Catalog {
    type Target = [ExerciseRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ExerciseRecord>> for Catalog {
    fn from(value: Vec<ExerciseRecord>) -> Self {
        Self(value.into())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ExerciseRecord;
    type IntoIter = Iter<'a, ExerciseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
