//! Presentation view-model
//!
//! A pure projection of the editor's state onto the interactive controls a
//! form would render: which role checkboxes are offered, checked, and
//! enabled, and which action buttons are available. Invariant-violating
//! interactions (toggling a locked role, submitting while the dialog is
//! pending) are prevented here by disabling the control, matching the
//! editor's own rejections.

use crate::editor::PartyEditor;
use crate::party::RoleType;

/// State of one role checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox {
    /// Whether the control is rendered at all
    pub offered: bool,
    pub checked: bool,
    pub enabled: bool,
}

impl Checkbox {
    fn hidden() -> Self {
        Self {
            offered: false,
            checked: false,
            enabled: false,
        }
    }
}

/// Control states for the party edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormControls {
    pub completing_party: Checkbox,
    pub incorporator: Checkbox,
    pub director: Checkbox,
    pub done_enabled: bool,
    pub remove_enabled: bool,
    pub cancel_enabled: bool,
}

impl FormControls {
    /// Derives the control states from the editor
    pub fn from_editor(editor: &PartyEditor) -> Self {
        let dialog_open = editor.dialog_pending();

        if editor.draft().is_organization() {
            // Role lock: only the Incorporator box is shown, checked and
            // immutable.
            return Self {
                completing_party: Checkbox::hidden(),
                incorporator: Checkbox {
                    offered: true,
                    checked: editor.draft().has_role(RoleType::Incorporator),
                    enabled: false,
                },
                director: Checkbox::hidden(),
                done_enabled: !dialog_open,
                remove_enabled: editor.is_editing() && !dialog_open,
                cancel_enabled: true,
            };
        }

        let role_box = |role_type: RoleType| Checkbox {
            offered: true,
            checked: editor.draft().has_role(role_type),
            enabled: !dialog_open,
        };

        Self {
            completing_party: role_box(RoleType::CompletingParty),
            incorporator: role_box(RoleType::Incorporator),
            director: role_box(RoleType::Director),
            done_enabled: !dialog_open,
            remove_enabled: editor.is_editing() && !dialog_open,
            cancel_enabled: true,
        }
    }
}
