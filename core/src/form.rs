//! State machine for the single create-or-edit form.
//!
//! # Design
//! The editing id lives inside the `Editing` variant, so "an id is held
//! exactly when the form is editing" holds by construction. The draft is
//! an independent copy of the source post taken at edit-entry time; a
//! refresh landing while the form is open never reaches into it. Every
//! mode transition clears the draft, so nothing leaks from one session
//! into the next and a hidden form is always empty.

use uuid::Uuid;

use crate::types::{Post, PostDraft};

/// Which view the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List view; the form is not shown and the draft is empty.
    Hidden,
    /// Composing a new post.
    Creating,
    /// Replacing the fields of the post with this id.
    Editing(Uuid),
}

/// The store operation a valid submission maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    Create(PostDraft),
    Update(Uuid, PostDraft),
}

/// One create-or-edit interaction.
#[derive(Debug)]
pub struct FormSession {
    mode: Mode,
    draft: PostDraft,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            mode: Mode::Hidden,
            draft: PostDraft::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.mode != Mode::Hidden
    }

    /// Enter `Creating` with an empty draft.
    pub fn open_create(&mut self) {
        self.draft.clear();
        self.mode = Mode::Creating;
    }

    /// Enter `Editing` for a known post, copying its fields into the draft.
    pub fn open_edit(&mut self, post: &Post) {
        self.draft = PostDraft::from(post);
        self.mode = Mode::Editing(post.id);
    }

    /// Return to `Hidden`, dropping the draft and any editing id.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.mode = Mode::Hidden;
    }

    /// Field mutators are ignored while the form is hidden; a hidden form
    /// never holds draft text.
    pub fn set_title(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.draft.title = value.into();
        }
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.draft.content = value.into();
        }
    }

    pub fn set_author(&mut self, value: impl Into<String>) {
        if self.is_open() {
            self.draft.author = value.into();
        }
    }

    /// Validate the draft and map it to a store operation.
    ///
    /// Returns `None` — rejecting the submission with no side effects —
    /// when the form is hidden or any field is empty. Emptiness check
    /// only; whitespace is not trimmed.
    pub fn action(&self) -> Option<SubmitAction> {
        if !self.draft.is_complete() {
            return None;
        }
        match self.mode {
            Mode::Hidden => None,
            Mode::Creating => Some(SubmitAction::Create(self.draft.clone())),
            Mode::Editing(id) => Some(SubmitAction::Update(id, self.draft.clone())),
        }
    }
}
