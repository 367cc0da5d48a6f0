//! Form drafts - the submit lifecycle shared by the contact and careers forms.
//!
//! A draft pre-validates before any mutation call goes out; validation
//! failures block the call entirely. The lifecycle is
//! `editing -> submitting -> (success -> cleared) | (failure -> editing with
//! error)`. There is no persistent submitted state.

use crate::schema::{
    ApplicationForm, ContactForm, InsertContact, InsertJobApplication, ValidationErrors,
};

/// A submittable draft payload with a declared validator.
pub trait Form: Default {
    type Output;

    fn validate(&self) -> Result<Self::Output, ValidationErrors>;
}

impl Form for ContactForm {
    type Output = InsertContact;

    fn validate(&self) -> Result<InsertContact, ValidationErrors> {
        ContactForm::validate(self)
    }
}

impl Form for ApplicationForm {
    type Output = InsertJobApplication;

    fn validate(&self) -> Result<InsertJobApplication, ValidationErrors> {
        ApplicationForm::validate(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
}

/// Local draft state for one form instance.
pub struct FormDraft<F: Form> {
    form: F,
    phase: Phase,
    error: Option<String>,
}

impl<F: Form> FormDraft<F> {
    pub fn new() -> Self {
        Self {
            form: F::default(),
            phase: Phase::Editing,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Edits are only possible while editing; a submission in flight cannot
    /// be changed or aborted.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self.phase {
            Phase::Editing => Some(&mut self.form),
            Phase::Submitting => None,
        }
    }

    /// Validate the draft and, if it passes, move to submitting and hand the
    /// caller the payload for the mutation call. A failed validation keeps
    /// the draft editable and records a user-facing message.
    pub fn submit(&mut self) -> Result<F::Output, ValidationErrors> {
        match self.form.validate() {
            Ok(output) => {
                self.phase = Phase::Submitting;
                self.error = None;
                Ok(output)
            }
            Err(errors) => {
                self.error = Some(toast_message(&errors));
                Err(errors)
            }
        }
    }

    /// The mutation call resolved successfully: clear the draft for reuse.
    pub fn resolve_success(&mut self) {
        self.form = F::default();
        self.phase = Phase::Editing;
        self.error = None;
    }

    /// The mutation call failed: return to editing with the draft intact and
    /// the server-provided (or fallback) message recorded.
    pub fn resolve_failure(&mut self, message: impl Into<String>) {
        self.phase = Phase::Editing;
        self.error = Some(message.into());
    }
}

impl<F: Form> Default for FormDraft<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirrors the page behaviour: one generic message when required fields are
/// missing, the specific message otherwise (e.g. the email hint).
fn toast_message(errors: &ValidationErrors) -> String {
    if errors
        .errors
        .iter()
        .any(|e| e.message.ends_with("is required"))
    {
        "Please fill in all required fields".to_string()
    } else {
        errors
            .errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Validation error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid_contact(draft: &mut FormDraft<ContactForm>) {
        let form = draft.form_mut().unwrap();
        form.first_name = "Ada".to_string();
        form.last_name = "Lovelace".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Site survey request".to_string();
    }

    #[test]
    fn test_empty_draft_blocks_submission() {
        let mut draft: FormDraft<ContactForm> = FormDraft::new();
        assert!(draft.submit().is_err());
        assert_eq!(draft.phase(), Phase::Editing);
        assert_eq!(draft.error(), Some("Please fill in all required fields"));
    }

    #[test]
    fn test_malformed_email_blocks_submission_with_specific_message() {
        let mut draft: FormDraft<ContactForm> = FormDraft::new();
        fill_valid_contact(&mut draft);
        draft.form_mut().unwrap().email = "not-an-email".to_string();

        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(draft.phase(), Phase::Editing);
        assert_eq!(draft.error(), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_successful_submit_then_resolve_clears_draft() {
        let mut draft: FormDraft<ContactForm> = FormDraft::new();
        fill_valid_contact(&mut draft);

        let insert = draft.submit().unwrap();
        assert_eq!(insert.first_name, "Ada");
        assert_eq!(draft.phase(), Phase::Submitting);
        assert!(draft.form_mut().is_none());

        draft.resolve_success();
        assert_eq!(draft.phase(), Phase::Editing);
        assert!(draft.form().first_name.is_empty());
        assert_eq!(draft.error(), None);
    }

    #[test]
    fn test_failed_submission_keeps_draft_and_records_message() {
        let mut draft: FormDraft<ContactForm> = FormDraft::new();
        fill_valid_contact(&mut draft);
        draft.submit().unwrap();

        draft.resolve_failure("Internal server error");
        assert_eq!(draft.phase(), Phase::Editing);
        assert_eq!(draft.form().first_name, "Ada");
        assert_eq!(draft.error(), Some("Internal server error"));
    }

    #[test]
    fn test_application_draft_requires_position() {
        let mut draft: FormDraft<ApplicationForm> = FormDraft::new();
        {
            let form = draft.form_mut().unwrap();
            form.first_name = "Grace".to_string();
            form.last_name = "Hopper".to_string();
            form.email = "grace@example.com".to_string();
        }
        assert!(draft.submit().is_err());
        assert_eq!(draft.error(), Some("Please fill in all required fields"));

        draft.form_mut().unwrap().position = "Senior Structural Engineer".to_string();
        assert!(draft.submit().is_ok());
        assert_eq!(draft.phase(), Phase::Submitting);
    }
}
