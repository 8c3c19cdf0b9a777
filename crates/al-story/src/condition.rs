use std::fmt;

use crate::error::TagError;
use crate::record::ConditionRecord;

/// A test against player state that gates a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The item is in the inventory.
    HasItem(String),
    /// The item is not in the inventory.
    LacksItem(String),
    /// The flag (default `false`) equals the value.
    FlagIs(String, bool),
    /// The stat (default 0) equals the value.
    StatEquals(String, i64),
    /// The stat (default 0) is at least the value.
    StatGte(String, i64),
    /// The stat (default 0) is at most the value.
    StatLte(String, i64),
}

impl Condition {
    /// The key this kind is written under in a story file.
    pub fn kind(&self) -> &'static str {
        match self {
            Condition::HasItem(_) => "has_item",
            Condition::LacksItem(_) => "lacks_item",
            Condition::FlagIs(..) => "flag_is",
            Condition::StatEquals(..) => "stat_equals",
            Condition::StatGte(..) => "stat_gte",
            Condition::StatLte(..) => "stat_lte",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::HasItem(item) | Condition::LacksItem(item) => {
                write!(f, "{}({item})", self.kind())
            }
            Condition::FlagIs(name, value) => write!(f, "{}({name}, {value})", self.kind()),
            Condition::StatEquals(name, value)
            | Condition::StatGte(name, value)
            | Condition::StatLte(name, value) => write!(f, "{}({name}, {value})", self.kind()),
        }
    }
}

impl TryFrom<ConditionRecord> for Condition {
    type Error = TagError;

    fn try_from(record: ConditionRecord) -> Result<Self, Self::Error> {
        if !record.unknown.is_empty() {
            return Err(TagError::Unrecognized(
                record.unknown.into_keys().collect(),
            ));
        }

        let mut found = Vec::new();
        if let Some(item) = record.has_item {
            found.push(Condition::HasItem(item));
        }
        if let Some(item) = record.lacks_item {
            found.push(Condition::LacksItem(item));
        }
        if let Some((name, value)) = record.flag_is {
            found.push(Condition::FlagIs(name, value));
        }
        if let Some((name, value)) = record.stat_equals {
            found.push(Condition::StatEquals(name, value));
        }
        if let Some((name, value)) = record.stat_gte {
            found.push(Condition::StatGte(name, value));
        }
        if let Some((name, value)) = record.stat_lte {
            found.push(Condition::StatLte(name, value));
        }

        match found.len() {
            0 => Err(TagError::Missing),
            1 => Ok(found.remove(0)),
            _ => Err(TagError::Ambiguous(
                found.iter().map(|c| c.kind().to_string()).collect(),
            )),
        }
    }
}
