//! Local form models, their pure validation rules, and the shared
//! validate → submit → render-result sequence.

mod contact;
mod fields;
mod login;
mod pdf;
mod submit;
mod url;

pub use self::contact::{ContactField, ContactForm};
pub use self::fields::{FieldValues, FormField, ValidationResult};
pub use self::login::{LoginField, LoginForm};
pub use self::pdf::{PdfField, PdfForm};
pub use self::submit::{
    FormController, LinkForm, SubmitMode, SubmitPhase, SubmitState, UNEXPECTED_ERROR,
    failure_message,
};
pub use self::url::{UrlField, UrlForm};
