use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A ToDo record.
///
/// All fields are optional; `id` is assigned by the database on first save
/// and is immutable afterwards. `creation_date` is client-supplied, not
/// server-stamped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub creation_date: Option<NaiveDate>,
}

impl Todo {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn creation_date(mut self, creation_date: NaiveDate) -> Self {
        self.creation_date = Some(creation_date);
        self
    }
}

/// Identity-based equality: two ToDos are equal iff both have an id and the
/// ids match. An unsaved ToDo (id `None`) is never equal to anything,
/// including a clone of itself. This is the entity contract, not an
/// oversight; `Eq` is deliberately not implemented since the relation is
/// not reflexive for unsaved rows.
impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
