use anyhow::Result;

use crate::model::{ContactPayload, LinkDetail, LinkKind, ShortUrlResponse};
use crate::remote::LinksApi;

use super::fields::{has_http_scheme, is_blank, optional};
use super::{FieldValues, FormField, LinkForm, SubmitMode, ValidationResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
    Email,
    Company,
    Title,
    Website,
    Notes,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Company,
        ContactField::Title,
        ContactField::Website,
        ContactField::Notes,
    ];
}

impl FormField for ContactField {
    fn name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Title => "title",
            ContactField::Website => "website",
            ContactField::Notes => "notes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Phone => "Phone/Mobile (Personal)",
            ContactField::Email => "Email",
            ContactField::Company => "Company Name",
            ContactField::Title => "Job Title",
            ContactField::Website => "Website",
            ContactField::Notes => "Notes",
        }
    }

    fn multiline(self) -> bool {
        self == ContactField::Notes
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub website: String,
    pub notes: String,
}

impl ContactForm {
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            company: optional(&self.company),
            title: optional(&self.title),
            website: optional(&self.website),
            notes: optional(&self.notes),
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Title => &mut self.title,
            ContactField::Website => &mut self.website,
            ContactField::Notes => &mut self.notes,
        }
    }
}

impl FieldValues for ContactForm {
    type Field = ContactField;

    fn fields(&self) -> Vec<ContactField> {
        ContactField::ALL.to_vec()
    }

    fn value(&self, field: ContactField) -> String {
        let v = match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Title => &self.title,
            ContactField::Website => &self.website,
            ContactField::Notes => &self.notes,
        };
        v.clone()
    }

    fn set_value(&mut self, field: ContactField, value: &str) -> Result<()> {
        *self.slot(field) = value.to_string();
        Ok(())
    }
}

impl LinkForm for ContactForm {
    const KIND: LinkKind = LinkKind::Contact;
    const NOT_FOUND: &'static str = "Contact link not found.";

    fn validate(&self) -> ValidationResult<ContactField> {
        let mut errors = ValidationResult::default();
        if is_blank(&self.first_name) {
            errors.push(ContactField::FirstName, "First name is required.");
        }
        if is_blank(&self.last_name) {
            errors.push(ContactField::LastName, "Last name is required.");
        }
        if is_blank(&self.phone) {
            errors.push(ContactField::Phone, "Phone is required.");
        }
        if is_blank(&self.email) {
            errors.push(ContactField::Email, "Email is required.");
        }
        let website = self.website.trim();
        if !website.is_empty() && !has_http_scheme(website) {
            errors.push(
                ContactField::Website,
                "Website must start with http:// or https://.",
            );
        }
        errors
    }

    fn send(&self, api: &dyn LinksApi, mode: SubmitMode) -> Result<ShortUrlResponse> {
        let payload = self.payload();
        match mode {
            SubmitMode::Create => api.create_contact(&payload),
            SubmitMode::Edit(id) => api.update_contact(id, &payload),
        }
    }

    fn from_detail(detail: &LinkDetail) -> Option<Self> {
        if detail.kind != LinkKind::Contact.tag() {
            return None;
        }
        let c = detail.contact.as_ref()?;
        Some(Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            company: c.company.clone().unwrap_or_default(),
            title: c.title.clone().unwrap_or_default(),
            website: c.website.clone().unwrap_or_default(),
            notes: c.notes.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/forms/contact_tests.rs"]
mod tests;
