use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Column;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Fields submitted by the add and edit dialogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFields {
    pub title: String,
    pub table: String,
    pub column: Column,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(fields: OrderFields) -> Self {
        Self::with_id(OrderId::generate(), fields)
    }

    pub fn with_id(id: impl Into<OrderId>, fields: OrderFields) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            table: fields.table,
            column: fields.column,
            created_at: Utc::now(),
        }
    }

    pub fn fields(&self) -> OrderFields {
        OrderFields {
            title: self.title.clone(),
            table: self.table.clone(),
            column: self.column,
        }
    }

    pub fn apply(&mut self, fields: OrderFields) {
        self.title = fields.title;
        self.table = fields.table;
        self.column = fields.column;
    }
}
