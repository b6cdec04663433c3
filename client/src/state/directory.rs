//! User-directory state: the last fetched list plus row-level modal state.
//!
//! DESIGN
//! ======
//! The list is a cache of the most recent `GET /users`, never patched
//! locally. Every successful mutation ends with a full re-fetch whose result
//! replaces `items` wholesale, so the table always shows exactly one server
//! snapshot.
//!
//! View and edit modals share one `DirectoryModal` slot, which keeps them
//! mutually exclusive without extra bookkeeping.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::types::{Role, Status, User, UserUpdate};

/// Edit-form values for one record, seeded from the row being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: Status,
    pub role: Role,
}

impl EditDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            status: user.status,
            role: user.role,
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            status: self.status,
            role: self.role,
        }
    }
}

/// Which row-level modal is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DirectoryModal {
    #[default]
    Closed,
    Viewing(User),
    Editing(EditDraft),
}

/// Directory page state backed by REST fetches.
#[derive(Clone, Debug, Default)]
pub struct DirectoryState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: DirectoryModal,
    /// An edit submit is in flight.
    pub saving: bool,
}

impl DirectoryState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the cached list with a fresh fetch result.
    pub fn apply_fetch(&mut self, users: Vec<User>) {
        self.items = users;
        self.loading = false;
        self.error = None;
    }

    /// Keep the previous list visible but stop the spinner.
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.items.iter().find(|u| u.id == id)
    }

    pub fn open_view(&mut self, user: User) {
        self.modal = DirectoryModal::Viewing(user);
    }

    pub fn open_edit(&mut self, user: &User) {
        self.saving = false;
        self.modal = DirectoryModal::Editing(EditDraft::from_user(user));
    }

    pub fn close_modal(&mut self) {
        self.saving = false;
        self.modal = DirectoryModal::Closed;
    }

    pub fn viewing(&self) -> Option<&User> {
        match &self.modal {
            DirectoryModal::Viewing(user) => Some(user),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.modal {
            DirectoryModal::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Apply `f` to the open edit draft; a no-op when not editing.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut EditDraft)) {
        if let DirectoryModal::Editing(draft) = &mut self.modal {
            f(draft);
        }
    }

    /// Mark the open draft as submitting and hand back a copy to send.
    /// Returns `None` when no edit is open or a save is already running.
    pub fn begin_save(&mut self) -> Option<EditDraft> {
        if self.saving {
            return None;
        }
        let draft = self.draft()?.clone();
        self.saving = true;
        Some(draft)
    }

    pub fn save_succeeded(&mut self) {
        self.close_modal();
    }

    /// Leave the modal open with the unsaved values intact.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }
}
