pub const PHONE_TOO_SHORT: &str = "Phone number must be at least 10 digits";
pub const PHONE_INVALID_CHARACTERS: &str =
    "Phone number may only contain digits, spaces and + - ( ) .";

const MIN_DIGITS: usize = 10;

/// A phone number as typed by the user, e.g. `+1 (555) 000-0000`.
///
/// Formatting characters are kept; only the digit count is constrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(phone: String) -> Result<PhoneNumber, String> {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.');
        if !phone.chars().all(allowed) {
            return Err(PHONE_INVALID_CHARACTERS.to_string());
        }
        if phone.chars().filter(char::is_ascii_digit).count() < MIN_DIGITS {
            return Err(PHONE_TOO_SHORT.to_string());
        }
        Ok(Self(phone))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
