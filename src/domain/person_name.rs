use unicode_segmentation::UnicodeSegmentation;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";

/// A referrer's or referee's name, at least two graphemes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(name: String) -> Result<PersonName, String> {
        // "é" written as e + combining accent is a single character to the user
        if name.graphemes(true).count() < 2 {
            return Err(NAME_TOO_SHORT.to_string());
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
