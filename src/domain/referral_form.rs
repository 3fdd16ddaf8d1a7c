use std::collections::BTreeMap;

use crate::domain::contact_email::ContactEmail;
use crate::domain::course::Course;
use crate::domain::person_name::PersonName;
use crate::domain::phone_number::PhoneNumber;
use crate::domain::referral_field::{KeyStyle, ReferralField};
use crate::domain::referral_payload::{Party, ReferralPayload};

/// Which optional parts of the referral form a deployment collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ReferralSchema {
    #[serde(default)]
    pub collect_phone_numbers: bool,
}

/// Raw field values as the form hands them over. Any of them may be missing.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralForm {
    pub referrer_name: Option<String>,
    pub referrer_email: Option<String>,
    pub referrer_phone: Option<String>,
    #[serde(alias = "referredName")]
    pub referee_name: Option<String>,
    #[serde(alias = "referredEmail")]
    pub referee_email: Option<String>,
    #[serde(alias = "referredPhone")]
    pub referee_phone: Option<String>,
    pub course: Option<String>,
    pub message: Option<String>,
}

/// Every violated field with its messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ReferralField, Vec<String>>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ReferralField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = ReferralField> + '_ {
        self.0.keys().copied()
    }

    /// Messages keyed by the wire name of each field.
    pub fn field_messages(&self, style: KeyStyle) -> BTreeMap<&'static str, Vec<String>> {
        self.0
            .iter()
            .map(|(field, messages)| (field.key(style), messages.clone()))
            .collect()
    }

    pub fn styled(&self, style: KeyStyle) -> StyledValidationErrors<'_> {
        StyledValidationErrors {
            errors: self,
            style,
        }
    }

    fn add(&mut self, field: ReferralField, message: String) {
        self.0.entry(field).or_default().push(message);
    }

    fn check<T>(
        &mut self,
        field: ReferralField,
        parsed: Result<T, String>,
    ) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.styled(KeyStyle::default()))
    }
}

/// Violations rendered with the wire names of a given [`KeyStyle`].
pub struct StyledValidationErrors<'a> {
    errors: &'a ValidationErrors,
    style: KeyStyle,
}

impl std::fmt::Display for StyledValidationErrors<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field.key(self.style), message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ReferralForm {
    /// Checks every field, collecting all violations before giving up.
    ///
    /// A missing field is validated as if it were left blank.
    pub fn validate(self, schema: &ReferralSchema) -> Result<ReferralPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let referrer_name = errors.check(
            ReferralField::ReferrerName,
            PersonName::parse(self.referrer_name.unwrap_or_default()),
        );
        let referrer_email = errors.check(
            ReferralField::ReferrerEmail,
            ContactEmail::parse(self.referrer_email.unwrap_or_default()),
        );
        let referee_name = errors.check(
            ReferralField::RefereeName,
            PersonName::parse(self.referee_name.unwrap_or_default()),
        );
        let referee_email = errors.check(
            ReferralField::RefereeEmail,
            ContactEmail::parse(self.referee_email.unwrap_or_default()),
        );
        let course = errors.check(
            ReferralField::Course,
            Course::parse(self.course.unwrap_or_default()),
        );

        let (referrer_phone, referee_phone) = if schema.collect_phone_numbers {
            let referrer_phone = errors.check(
                ReferralField::ReferrerPhone,
                PhoneNumber::parse(self.referrer_phone.unwrap_or_default()),
            );
            let referee_phone = errors.check(
                ReferralField::RefereePhone,
                PhoneNumber::parse(self.referee_phone.unwrap_or_default()),
            );
            (referrer_phone, referee_phone)
        } else {
            (None, None)
        };

        match (referrer_name, referrer_email, referee_name, referee_email, course) {
            (Some(referrer_name), Some(referrer_email), Some(referee_name), Some(referee_email), Some(course))
                if errors.is_empty() =>
            {
                Ok(ReferralPayload {
                    referrer: Party {
                        name: referrer_name,
                        email: referrer_email,
                        phone: referrer_phone,
                    },
                    referee: Party {
                        name: referee_name,
                        email: referee_email,
                        phone: referee_phone,
                    },
                    course,
                    message: self.message,
                })
            }
            _ => Err(errors),
        }
    }
}
