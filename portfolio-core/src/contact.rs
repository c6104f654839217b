//! Contact form acknowledgment
//!
//! Submitting the form never sends anything. It shows a thank-you message,
//! clears the fields right away and removes the message five seconds later.

use std::time::{Duration, Instant};

use crate::surface::{Effect, ElementId, MessageId};

/// How long an acknowledgment stays on screen
pub const ACK_LIFETIME: Duration = Duration::from_secs(5);

pub const ACK_TEXT: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRemoval {
    id: MessageId,
    due: Instant,
}

/// Acknowledgment scheduler for one form
#[derive(Debug, Clone)]
pub struct ContactForm {
    form: ElementId,
    pending: Vec<PendingRemoval>,
    next_id: u64,
}

impl ContactForm {
    pub fn new(form: ElementId) -> Self {
        Self {
            form,
            pending: Vec::new(),
            next_id: 1,
        }
    }

    pub fn form(&self) -> &ElementId {
        &self.form
    }

    /// Handle a submission at `now`.
    ///
    /// Each submission gets its own message and its own removal deadline;
    /// nothing already scheduled is touched.
    pub fn submit(&mut self, now: Instant) -> Vec<Effect> {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingRemoval {
            id,
            due: now + ACK_LIFETIME,
        });
        log::info!("Contact form submitted, acknowledgment {} scheduled", id.0);

        vec![
            Effect::AppendMessage {
                form: self.form.clone(),
                id,
                text: ACK_TEXT.to_string(),
            },
            Effect::ResetForm(self.form.clone()),
        ]
    }

    /// Removal effects for every message due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.pending.retain(|removal| {
            if removal.due <= now {
                effects.push(Effect::RemoveMessage(removal.id));
                false
            } else {
                true
            }
        });
        effects
    }

    /// Earliest pending deadline, if any
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|removal| removal.due).min()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ElementId::ContactForm)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::surface::{apply, FormFields, MemorySurface};

    fn surface_with_filled_form() -> MemorySurface {
        let mut surface = MemorySurface::new().with_form(ElementId::ContactForm);
        *surface.form_fields_mut(&ElementId::ContactForm).unwrap() = FormFields {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            message: "A reading nook, please.".into(),
        };
        surface
    }

    fn messages(surface: &MemorySurface) -> usize {
        surface.form(&ElementId::ContactForm).unwrap().messages.len()
    }

    #[test]
    fn test_submit_shows_message_and_resets_fields() {
        let mut surface = surface_with_filled_form();
        let mut contact = ContactForm::default();

        apply(&mut surface, contact.submit(Instant::now()));

        let form = surface.form(&ElementId::ContactForm).unwrap();
        assert!(form.fields.is_empty());
        assert_eq!(form.messages.len(), 1);
        assert_eq!(form.messages[0].1, ACK_TEXT);
    }

    #[test]
    fn test_message_removed_after_five_seconds() {
        let mut surface = surface_with_filled_form();
        let mut contact = ContactForm::default();
        let start = Instant::now();

        apply(&mut surface, contact.submit(start));

        apply(&mut surface, contact.tick(start + Duration::from_millis(4_999)));
        assert_eq!(messages(&surface), 1);

        apply(&mut surface, contact.tick(start + ACK_LIFETIME));
        assert_eq!(messages(&surface), 0);
        assert_eq!(contact.pending(), 0);
    }

    #[test]
    fn test_repeated_submissions_expire_independently() {
        let mut surface = surface_with_filled_form();
        let mut contact = ContactForm::default();
        let start = Instant::now();

        apply(&mut surface, contact.submit(start));
        apply(&mut surface, contact.submit(start + Duration::from_secs(2)));
        assert_eq!(messages(&surface), 2);
        assert_eq!(contact.next_due(), Some(start + ACK_LIFETIME));

        apply(&mut surface, contact.tick(start + Duration::from_secs(6)));
        assert_eq!(messages(&surface), 1);

        apply(&mut surface, contact.tick(start + Duration::from_secs(7)));
        assert_eq!(messages(&surface), 0);
    }

    #[test]
    fn test_removal_after_teardown_is_tolerated() {
        let mut surface = surface_with_filled_form();
        let mut contact = ContactForm::default();
        let start = Instant::now();

        apply(&mut surface, contact.submit(start));
        surface.remove_form(&ElementId::ContactForm);

        let effects = contact.tick(start + ACK_LIFETIME);
        assert_eq!(effects.len(), 1);
        assert_eq!(apply(&mut surface, effects), 0);
        assert_eq!(contact.pending(), 0);
    }
}
