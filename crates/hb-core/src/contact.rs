//! Contact form model
//!
//! Nothing here performs I/O. Submitting only records the fixed
//! acknowledgment and clears the fields.

use tracing::debug;

/// Message shown after every submission
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! We will get back to you soon.";

/// The four required inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    /// HTML input type; the message body renders as a textarea
    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Local state of the contact page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPageState {
    form: ContactForm,
    acknowledgment: Option<&'static str>,
}

impl ContactPageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn acknowledgment(&self) -> Option<&'static str> {
        self.acknowledgment
    }

    /// Acknowledge the message and clear the inputs. Field contents are not
    /// inspected; presence is left to the browser's `required` check. The
    /// acknowledgment is kept until this state is dropped.
    pub fn submit(&mut self) -> &'static str {
        self.acknowledgment = Some(ACKNOWLEDGMENT);
        self.form.clear();
        debug!("contact submission acknowledged");
        ACKNOWLEDGMENT
    }
}
