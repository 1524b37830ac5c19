use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    Company,
    Email,
    Phone,
    State,
    Budget,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 7] = [
        ContactField::FullName,
        ContactField::Company,
        ContactField::Email,
        ContactField::Phone,
        ContactField::State,
        ContactField::Budget,
        ContactField::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::State => "state",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "FULL NAME",
            Self::Company => "COMPANY",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::State => "STATE",
            Self::Budget => "BUDGET",
            Self::Message => "MESSAGE",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "John Doe",
            Self::Company => "Company Name",
            Self::Email => "john.doe@email.com",
            Self::Phone => "+234",
            Self::State => "Nigeria",
            Self::Budget => "State your budget",
            Self::Message => "Could you describe what you'd like to do?",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Editable contact form contents. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    full_name: String,
    company: String,
    email: String,
    phone: String,
    state: String,
    budget: String,
    message: String,
}

/// A validated enquiry, ready to hand off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub budget: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Company => &self.company,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::State => &self.state,
            ContactField::Budget => &self.budget,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::Company => &mut self.company,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::State => &mut self.state,
            ContactField::Budget => &mut self.budget,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).trim().is_empty())
    }

    pub fn validate(&self) -> Result<ContactInquiry, DomainError> {
        if let Some(missing) = ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(DomainError::MissingContactField(missing.name()));
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(DomainError::InvalidEmail(email.to_string()));
        }

        Ok(ContactInquiry {
            full_name: self.full_name.trim().to_string(),
            company: self.company.trim().to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            state: self.state.trim().to_string(),
            budget: self.budget.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
