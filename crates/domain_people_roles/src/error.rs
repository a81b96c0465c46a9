//! People-and-roles domain errors
//!
//! Field validation failures are values (see [`crate::validation`]), not
//! errors. These errors cover invariant-protecting rejections at the editor
//! API; the form layer prevents them up front by disabling the offending
//! controls.

use thiserror::Error;

/// Errors that can occur in the people-and-roles domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// Role changes are locked for this party type
    #[error("Role changes are locked for organizations")]
    RoleLocked,

    /// A completing-party confirmation dialog is pending
    #[error("A completing party confirmation is pending")]
    ConfirmationPending,

    /// A dialog resolution arrived with no dialog open
    #[error("No confirmation is pending")]
    NoPendingConfirmation,

    /// Remove is only available when editing an existing list entry
    #[error("Remove is only available when editing an existing party")]
    NotEditing,

    /// Invalid party data provided
    #[error("Invalid party data: {0}")]
    InvalidData(String),
}

impl PartyError {
    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        PartyError::InvalidData(message.into())
    }
}
