//! Draft reconciliation engine
//!
//! [`PartyEditor`] owns the mutable draft of a single party being added or
//! edited, recomputes validation after every mutation once the latch is
//! set, mediates the completing-party conflict through the confirmation
//! dialog, and decides which outcome events to hand back on submission.
//!
//! # Invariants
//!
//! - An organization draft's role set is always exactly one Incorporator
//!   entry, and no toggle can change it.
//! - No events are produced while the draft is invalid or while the
//!   confirmation dialog is pending.
//! - Accepting the reassignment dialog emits nothing by itself; the
//!   `RemoveCpRole` signal is deferred until the draft is submitted.

use tracing::debug;

use filing_kernel::FilingContext;

use crate::address::Address;
use crate::conflict::{check_conflict, ConflictDecision, DialogState};
use crate::error::PartyError;
use crate::events::PartyEvent;
use crate::party::{OrgPerson, PartyType, Role, RoleType};
use crate::validation::{PartyValidation, PartyValidator};

/// Result of a role checkbox toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleToggle {
    /// The toggle was applied to the draft
    Applied,
    /// The toggle was applied provisionally; a reassignment confirmation
    /// dialog is now pending
    ConfirmationRequired,
}

/// State machine for editing one party draft
pub struct PartyEditor {
    context: FilingContext,
    draft: OrgPerson,
    original: OrgPerson,
    active_index: Option<usize>,
    current_completing_party: Option<OrgPerson>,
    reassign_completing_party: bool,
    validation_active: bool,
    validation: PartyValidation,
    dialog: DialogState,
    delivery_same_as_mailing: bool,
}

impl PartyEditor {
    /// Opens an editor over an existing list entry or a fresh template
    ///
    /// `active_index` is the position of the entry in the parent's list
    /// (`None` when creating a new party). `current_completing_party` is
    /// whoever currently holds the Completing Party role elsewhere in the
    /// list, for conflict detection.
    pub fn open(
        current_party: Option<OrgPerson>,
        active_index: Option<usize>,
        current_completing_party: Option<OrgPerson>,
        context: FilingContext,
    ) -> Self {
        let mut draft = current_party.unwrap_or_else(OrgPerson::new_person);
        Self::apply_role_lock(&mut draft, &context);

        // The snapshot is taken after normalization, so an untouched draft
        // still compares equal on submit.
        let original = draft.clone();
        let delivery_same_as_mailing = match &draft.delivery_address {
            None => true,
            Some(delivery) => *delivery == draft.mailing_address,
        };

        debug!(
            party_type = ?draft.officer.party_type,
            editing = active_index.is_some(),
            "party editor opened"
        );

        Self {
            context,
            draft,
            original,
            active_index,
            current_completing_party,
            reassign_completing_party: false,
            validation_active: false,
            validation: PartyValidation::ok(),
            dialog: DialogState::Idle,
            delivery_same_as_mailing,
        }
    }

    /// The current draft
    pub fn draft(&self) -> &OrgPerson {
        &self.draft
    }

    /// The snapshot taken when the editor was opened
    pub fn original(&self) -> &OrgPerson {
        &self.original
    }

    /// The read-only filing context
    pub fn context(&self) -> &FilingContext {
        &self.context
    }

    /// The list index being edited, `None` in create mode
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether an existing list entry is being edited
    pub fn is_editing(&self) -> bool {
        self.active_index.is_some()
    }

    /// Whether the reassignment confirmation dialog is open
    pub fn dialog_pending(&self) -> bool {
        self.dialog.is_open()
    }

    /// Whether an accepted reassignment is deferred until submission
    pub fn reassign_pending(&self) -> bool {
        self.reassign_completing_party
    }

    /// Whether the validation latch has been triggered
    pub fn validation_active(&self) -> bool {
        self.validation_active
    }

    /// The latest validation result
    ///
    /// Empty until the latch is set by [`Self::apply_validation`] or the
    /// first [`Self::done`].
    pub fn validation(&self) -> &PartyValidation {
        &self.validation
    }

    /// Whether the delivery address mirrors the mailing address
    pub fn delivery_same_as_mailing(&self) -> bool {
        self.delivery_same_as_mailing
    }

    /// Whether the draft currently holds the Incorporator role
    pub fn is_incorporator(&self) -> bool {
        self.draft.has_role(RoleType::Incorporator)
    }

    /// Whether the draft currently holds the Director role
    pub fn is_director(&self) -> bool {
        self.draft.has_role(RoleType::Director)
    }

    /// Whether the draft currently holds the Completing Party role
    pub fn is_completing_party(&self) -> bool {
        self.draft.has_role(RoleType::CompletingParty)
    }

    /// Activates eager validation for the rest of the editor's life
    pub fn apply_validation(&mut self) {
        self.validation_active = true;
        self.revalidate();
    }

    /// Sets the person's first name
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.officer.first_name = value.into();
        self.revalidate();
    }

    /// Sets the person's middle name
    pub fn set_middle_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.draft.officer.middle_name = if value.is_empty() { None } else { Some(value) };
        self.revalidate();
    }

    /// Sets the person's last name
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.officer.last_name = value.into();
        self.revalidate();
    }

    /// Sets the organization name
    pub fn set_organization_name(&mut self, value: impl Into<String>) {
        self.draft.officer.organization_name = Some(value.into());
        self.revalidate();
    }

    /// Sets the contact email
    pub fn set_email(&mut self, value: Option<String>) {
        self.draft.officer.email = value;
        self.revalidate();
    }

    /// Switches between person and organization
    ///
    /// Clears the name branch the new type does not use and re-applies the
    /// organization role lock.
    pub fn set_party_type(&mut self, party_type: PartyType) {
        if self.draft.officer.party_type == party_type {
            return;
        }
        self.draft.officer.party_type = party_type;
        match party_type {
            PartyType::Person => {
                self.draft.officer.organization_name = None;
            }
            PartyType::Organization => {
                self.draft.officer.first_name.clear();
                self.draft.officer.middle_name = None;
                self.draft.officer.last_name.clear();
            }
        }
        Self::apply_role_lock(&mut self.draft, &self.context);
        self.revalidate();
    }

    /// Replaces the mailing address
    ///
    /// When the delivery address mirrors the mailing address, the mirror is
    /// kept in sync.
    pub fn set_mailing_address(&mut self, address: Address) {
        self.draft.mailing_address = address;
        if self.delivery_same_as_mailing && self.draft.delivery_address.is_some() {
            self.draft.delivery_address = Some(self.draft.mailing_address.clone());
        }
        self.revalidate();
    }

    /// Replaces the delivery address
    pub fn set_delivery_address(&mut self, address: Option<Address>) {
        self.draft.delivery_address = address;
        self.revalidate();
    }

    /// Toggles whether the delivery address mirrors the mailing address
    pub fn set_delivery_same_as_mailing(&mut self, same: bool) {
        self.delivery_same_as_mailing = same;
        if same && self.draft.delivery_address.is_some() {
            self.draft.delivery_address = Some(self.draft.mailing_address.clone());
        }
        self.revalidate();
    }

    /// Toggles a role checkbox on the draft
    ///
    /// Adding a role stamps the context's current date as its appointment
    /// date; removing one drops the entry. Requesting the Completing Party
    /// role while another party holds it opens the confirmation dialog
    /// instead of applying outright (the toggle is applied provisionally and
    /// reverted if the dialog is declined).
    pub fn toggle_role(&mut self, role_type: RoleType) -> Result<RoleToggle, PartyError> {
        if self.dialog.is_open() {
            return Err(PartyError::ConfirmationPending);
        }
        if self.draft.is_organization() {
            return Err(PartyError::RoleLocked);
        }

        if self.draft.has_role(role_type) {
            self.draft.roles.retain(|r| r.role_type != role_type);
            if role_type == RoleType::CompletingParty {
                // Dropping the role withdraws any confirmed reassignment
                self.reassign_completing_party = false;
            }
            self.revalidate();
            return Ok(RoleToggle::Applied);
        }

        if role_type == RoleType::CompletingParty
            && check_conflict(&self.draft, self.current_completing_party.as_ref())
                == ConflictDecision::RequiresConfirmation
        {
            let prior_roles = self.draft.roles.clone();
            self.add_role(role_type);
            self.dialog.open(prior_roles);
            self.revalidate();
            debug!("completing party conflict, awaiting confirmation");
            return Ok(RoleToggle::ConfirmationRequired);
        }

        self.add_role(role_type);
        self.revalidate();
        Ok(RoleToggle::Applied)
    }

    /// Resolves the pending reassignment dialog
    ///
    /// Declining restores the pre-toggle role set. Accepting keeps the role
    /// on the draft and defers the `RemoveCpRole` signal until submission;
    /// nothing is emitted here either way.
    pub fn resolve_reassign(&mut self, accepted: bool) -> Result<(), PartyError> {
        let prior_roles = self.dialog.close().ok_or(PartyError::NoPendingConfirmation)?;
        if accepted {
            self.reassign_completing_party = true;
        } else {
            self.draft.roles = prior_roles;
            self.reassign_completing_party = false;
        }
        self.revalidate();
        debug!(accepted, "reassignment dialog resolved");
        Ok(())
    }

    /// Submits the draft
    ///
    /// The first call sets the validation latch. Returns the outcome events
    /// in delivery order: nothing when the draft is invalid or a dialog is
    /// pending, `Reset` when the draft is unchanged, otherwise `AddEdit`
    /// (preceded by `RemoveCpRole` when a reassignment was confirmed).
    pub fn done(&mut self) -> Vec<PartyEvent> {
        if self.dialog.is_open() {
            return Vec::new();
        }

        self.apply_validation();
        if !self.validation.is_valid() {
            debug!(errors = self.validation.errors().len(), "submission blocked");
            return Vec::new();
        }

        if self.draft == self.original {
            debug!("draft unchanged, resetting");
            return vec![PartyEvent::Reset];
        }

        let mut events = Vec::with_capacity(2);
        if self.reassign_completing_party {
            events.push(PartyEvent::RemoveCpRole);
        }
        events.push(PartyEvent::AddEdit(self.draft.clone()));
        debug!(reassign = self.reassign_completing_party, "draft committed");
        events
    }

    /// Removes the party being edited from the parent's list
    ///
    /// Only available in edit mode, and not while the confirmation dialog
    /// is pending.
    pub fn remove(&self) -> Result<PartyEvent, PartyError> {
        if self.dialog.is_open() {
            return Err(PartyError::ConfirmationPending);
        }
        match self.active_index {
            Some(index) => Ok(PartyEvent::Remove(index)),
            None => Err(PartyError::NotEditing),
        }
    }

    /// Discards all edits and closes the form
    ///
    /// Unconditional: runs regardless of validity or pending state.
    pub fn cancel(&mut self) -> PartyEvent {
        self.draft = self.original.clone();
        self.reassign_completing_party = false;
        self.dialog.close();
        self.revalidate();
        PartyEvent::Reset
    }

    /// Forces an organization draft's role set to exactly one Incorporator
    ///
    /// An existing appointment date is preserved; otherwise the context's
    /// current date is stamped.
    fn apply_role_lock(draft: &mut OrgPerson, context: &FilingContext) {
        if draft.officer.party_type != PartyType::Organization {
            return;
        }
        let appointment_date = draft
            .role(RoleType::Incorporator)
            .map(|r| r.appointment_date)
            .unwrap_or(context.current_date);
        draft.roles = vec![Role::new(RoleType::Incorporator, appointment_date)];
    }

    fn add_role(&mut self, role_type: RoleType) {
        self.draft
            .roles
            .push(Role::new(role_type, self.context.current_date));
    }

    fn revalidate(&mut self) {
        if self.validation_active {
            self.validation =
                PartyValidator::validate(&self.draft, !self.delivery_same_as_mailing);
        }
    }
}
