use std::fmt;

use crate::error::TagError;
use crate::record::EffectRecord;

/// A change to player state applied when a choice is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the item in the inventory (no-op if already there).
    AddItem(String),
    /// Take the item out of the inventory (no-op if absent).
    RemoveItem(String),
    /// Overwrite the flag.
    SetFlag(String, bool),
    /// Overwrite the stat.
    SetStat(String, i64),
    /// Add a (possibly negative) delta to the stat.
    AddToStat(String, i64),
}

impl Effect {
    /// The key this kind is written under in a story file.
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::AddItem(_) => "add_item",
            Effect::RemoveItem(_) => "remove_item",
            Effect::SetFlag(..) => "set_flag",
            Effect::SetStat(..) => "set_stat",
            Effect::AddToStat(..) => "add_to_stat",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::AddItem(item) | Effect::RemoveItem(item) => {
                write!(f, "{}({item})", self.kind())
            }
            Effect::SetFlag(name, value) => write!(f, "{}({name}, {value})", self.kind()),
            Effect::SetStat(name, value) | Effect::AddToStat(name, value) => {
                write!(f, "{}({name}, {value})", self.kind())
            }
        }
    }
}

impl TryFrom<EffectRecord> for Effect {
    type Error = TagError;

    fn try_from(record: EffectRecord) -> Result<Self, Self::Error> {
        if !record.unknown.is_empty() {
            return Err(TagError::Unrecognized(
                record.unknown.into_keys().collect(),
            ));
        }

        let mut found = Vec::new();
        if let Some(item) = record.add_item {
            found.push(Effect::AddItem(item));
        }
        if let Some(item) = record.remove_item {
            found.push(Effect::RemoveItem(item));
        }
        if let Some((name, value)) = record.set_flag {
            found.push(Effect::SetFlag(name, value));
        }
        if let Some((name, value)) = record.set_stat {
            found.push(Effect::SetStat(name, value));
        }
        if let Some((name, value)) = record.add_to_stat {
            found.push(Effect::AddToStat(name, value));
        }

        match found.len() {
            0 => Err(TagError::Missing),
            1 => Ok(found.remove(0)),
            _ => Err(TagError::Ambiguous(
                found.iter().map(|e| e.kind().to_string()).collect(),
            )),
        }
    }
}
