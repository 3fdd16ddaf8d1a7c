use validator::validate_email;

pub const INVALID_EMAIL: &str = "Invalid email address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(email: String) -> Result<ContactEmail, String> {
        if validate_email(&email) && has_top_level_domain(&email) {
            Ok(Self(email))
        } else {
            Err(INVALID_EMAIL.to_string())
        }
    }
}

// `validate_email` also accepts dotless domains such as `localhost`
fn has_top_level_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain
            .rsplit_once('.')
            .map_or(false, |(host, tld)| {
                !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
            }),
        None => false,
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
