mod contact_email;
mod course;
mod person_name;
mod phone_number;
mod referral_field;
mod referral_form;
mod referral_payload;

// expose chosen features on a sub-crate level
pub use contact_email::ContactEmail;
pub use course::Course;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use referral_field::{KeyStyle, ReferralField};
pub use referral_form::{ReferralForm, ReferralSchema, StyledValidationErrors, ValidationErrors};
pub use referral_payload::{Party, ReferralPayload};
