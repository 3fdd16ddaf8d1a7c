use crate::domain::contact_email::ContactEmail;
use crate::domain::course::Course;
use crate::domain::person_name::PersonName;
use crate::domain::phone_number::PhoneNumber;

/// One side of a referral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub name: PersonName,
    pub email: ContactEmail,
    pub phone: Option<PhoneNumber>,
}

/// A referral that passed every field check.
///
/// Only validated newtypes go in, so holding one means it is fit to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralPayload {
    pub referrer: Party,
    pub referee: Party,
    pub course: Course,
    pub message: Option<String>,
}
