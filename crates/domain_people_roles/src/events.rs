//! Event boundary between the party editor and its parent list owner
//!
//! These four outcomes are the only values that cross out of the editor.
//! At most one terminal event (`AddEdit`, `Remove`, `Reset`) is produced per
//! submission cycle; `RemoveCpRole` may only appear immediately before an
//! `AddEdit`, in that order, as one batch.

use serde::{Deserialize, Serialize};

use crate::party::OrgPerson;

/// Outcome events consumed by the parent party-list component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyEvent {
    /// Upsert this record at the editing index, or append when creating
    AddEdit(OrgPerson),
    /// Delete the list entry at this index
    Remove(usize),
    /// Close the edit form without mutating the list
    Reset,
    /// Strip the Completing Party role from its current holder before or
    /// alongside applying the accompanying `AddEdit`
    RemoveCpRole,
}

impl PartyEvent {
    /// Whether this event ends the submission cycle
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PartyEvent::RemoveCpRole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(PartyEvent::Reset.is_terminal());
        assert!(PartyEvent::Remove(0).is_terminal());
        assert!(PartyEvent::AddEdit(OrgPerson::new_person()).is_terminal());
        assert!(!PartyEvent::RemoveCpRole.is_terminal());
    }
}
