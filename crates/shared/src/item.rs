use serde::{Deserialize, Serialize};
use time::Date;

use crate::parse_day;

/// A perishable item as the calendar sees it, with every date already
/// normalised to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerishableItem {
    pub id: String,
    pub name: String,
    pub terminal_date: Option<Date>,
    pub is_frozen: bool,
    pub thaw_date: Option<Date>,
}

impl PerishableItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            terminal_date: None,
            is_frozen: false,
            thaw_date: None,
        }
    }

    pub fn best_by(mut self, date: Date) -> Self {
        self.terminal_date = Some(date);
        self
    }

    pub fn frozen(mut self, thaw_date: impl Into<Option<Date>>) -> Self {
        self.is_frozen = true;
        self.thaw_date = thaw_date.into();
        self
    }

    /// Thaw date for frozen items that have one, best-by date otherwise
    pub fn effective_terminal_date(&self) -> Option<Date> {
        match (self.is_frozen, self.thaw_date) {
            (true, Some(thaw_date)) => Some(thaw_date),
            _ => self.terminal_date,
        }
    }

    pub fn is_trackable(&self) -> bool {
        self.effective_terminal_date().is_some()
    }
}

/// Raw item row as handed over by the item source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "best_by")]
    pub terminal_date: Option<String>,
    #[serde(default, alias = "frozen")]
    pub is_frozen: bool,
    #[serde(default)]
    pub thaw_date: Option<String>,
}

impl From<ItemRecord> for PerishableItem {
    fn from(record: ItemRecord) -> Self {
        let terminal_date = record
            .terminal_date
            .as_deref()
            .and_then(|raw| record_day(&record.id, "terminal_date", raw));

        let thaw_date = record
            .thaw_date
            .as_deref()
            .and_then(|raw| record_day(&record.id, "thaw_date", raw));

        Self {
            id: record.id,
            name: record.name,
            terminal_date,
            is_frozen: record.is_frozen,
            thaw_date,
        }
    }
}

fn record_day(id: &str, field: &str, raw: &str) -> Option<Date> {
    match parse_day(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!(item = id, field, err = %err, "Ignoring unparseable item date");

            None
        }
    }
}
