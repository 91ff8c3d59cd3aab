use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::BoardError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    #[default]
    Ordered,
    Ready,
    Served,
}

impl Column {
    /// Label carried by the `data-area` marker of the column's drop area.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::Ready => "ready",
            Column::Served => "served",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::Ready => "Ready",
            Column::Served => "Served",
        }
    }

    pub fn all() -> [Column; 3] {
        [Column::Ordered, Column::Ready, Column::Served]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ordered" => Ok(Column::Ordered),
            "ready" => Ok(Column::Ready),
            "served" => Ok(Column::Served),
            other => Err(BoardError::UnknownColumn(other.to_string())),
        }
    }
}
