//! Completing-party conflict resolution
//!
//! At most one party in a filing may hold the Completing Party role. When
//! the role is requested for a draft while another party already holds it,
//! the toggle is held behind a confirmation dialog: declining reverts the
//! toggle, accepting defers the reassignment signal until the draft is
//! submitted.
//!
//! The dialog is an explicit two-state machine rather than a UI callback,
//! so the editor can drive it synchronously and tests can resolve it
//! directly.

use crate::party::{OrgPerson, Role};

/// Outcome of a completing-party conflict check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// No other holder, or the draft itself is the current holder
    Proceed,
    /// A distinct party holds the role; confirmation is required
    RequiresConfirmation,
}

/// Decides whether assigning the Completing Party role to `draft` conflicts
/// with an existing holder elsewhere in the party list
pub fn check_conflict(draft: &OrgPerson, current_holder: Option<&OrgPerson>) -> ConflictDecision {
    match current_holder {
        None => ConflictDecision::Proceed,
        Some(holder) if holder.officer.same_identity(&draft.officer) => ConflictDecision::Proceed,
        Some(_) => ConflictDecision::RequiresConfirmation,
    }
}

/// State of the reassignment confirmation dialog
///
/// `AwaitingConfirmation` keeps the pre-toggle role set so a declined
/// dialog can restore the draft exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Idle,
    AwaitingConfirmation {
        prior_roles: Vec<Role>,
    },
}

impl DialogState {
    /// Whether a confirmation is currently pending
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::AwaitingConfirmation { .. })
    }

    /// Opens the dialog, capturing the pre-toggle role set
    pub fn open(&mut self, prior_roles: Vec<Role>) {
        *self = DialogState::AwaitingConfirmation { prior_roles };
    }

    /// Closes the dialog, returning the captured role set if one was pending
    pub fn close(&mut self) -> Option<Vec<Role>> {
        match std::mem::take(self) {
            DialogState::Idle => None,
            DialogState::AwaitingConfirmation { prior_roles } => Some(prior_roles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::{OrgPerson, RoleType};
    use chrono::NaiveDate;
    use filing_kernel::PartyId;

    fn party_with_id(id: PartyId) -> OrgPerson {
        let mut party = OrgPerson::new_person();
        party.officer.id = Some(id);
        party
    }

    #[test]
    fn test_no_holder_proceeds() {
        let draft = OrgPerson::new_person();
        assert_eq!(check_conflict(&draft, None), ConflictDecision::Proceed);
    }

    #[test]
    fn test_same_identity_proceeds() {
        let id = PartyId::new_v7();
        let draft = party_with_id(id);
        let holder = party_with_id(id);
        assert_eq!(check_conflict(&draft, Some(&holder)), ConflictDecision::Proceed);
    }

    #[test]
    fn test_distinct_holder_requires_confirmation() {
        let draft = party_with_id(PartyId::new_v7());
        let holder = party_with_id(PartyId::new_v7());
        assert_eq!(
            check_conflict(&draft, Some(&holder)),
            ConflictDecision::RequiresConfirmation
        );
    }

    #[test]
    fn test_new_draft_against_holder_requires_confirmation() {
        // A draft with no id yet can never be the current holder
        let draft = OrgPerson::new_person();
        let holder = party_with_id(PartyId::new_v7());
        assert_eq!(
            check_conflict(&draft, Some(&holder)),
            ConflictDecision::RequiresConfirmation
        );
    }

    #[test]
    fn test_dialog_lifecycle() {
        let mut dialog = DialogState::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.close(), None);

        let prior = vec![Role::new(
            RoleType::Incorporator,
            NaiveDate::from_ymd_opt(2020, 3, 30).unwrap(),
        )];
        dialog.open(prior.clone());
        assert!(dialog.is_open());

        assert_eq!(dialog.close(), Some(prior));
        assert!(!dialog.is_open());
    }
}
