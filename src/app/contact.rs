//! Contact form - field values and the simulated "message sent" acknowledgment
//!
//! Nothing is delivered anywhere. Submitting flips the acknowledgment on and
//! hands back a ticket; whoever owns the clock calls `complete` with that
//! ticket once the reset delay has passed.

/// Fields on the contact form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// Current values of the three form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Identifies one submission so a late reset for an earlier one can be told
/// apart from the current one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubmissionTicket(pub u64);

/// Contact form state: Idle while `acknowledged` is false, Acknowledged
/// between a submit and its reset.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    acknowledged: bool,
    last_submission: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Replace a field's value. Any text is accepted, including while the
    /// acknowledgment is showing.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Simulate sending the message. Always succeeds.
    pub fn submit(&mut self) -> SubmissionTicket {
        self.last_submission += 1;
        self.acknowledged = true;
        tracing::info!(
            submission = self.last_submission,
            name_len = self.fields.name.len(),
            email_len = self.fields.email.len(),
            message_len = self.fields.message.len(),
            "Contact form submitted"
        );
        SubmissionTicket(self.last_submission)
    }

    /// Apply the delayed reset for `ticket`. Returns false for a ticket that a
    /// newer submission has superseded.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> bool {
        if ticket.0 != self.last_submission {
            tracing::debug!(
                submission = ticket.0,
                latest = self.last_submission,
                "Stale reset ignored"
            );
            return false;
        }
        self.reset();
        true
    }

    /// Back to Idle with every field empty
    pub fn reset(&mut self) {
        if self.acknowledged || !self.fields.is_empty() {
            tracing::info!(submission = self.last_submission, "Contact form reset");
        }
        self.acknowledged = false;
        self.fields = ContactFields::default();
    }
}
