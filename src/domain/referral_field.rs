/// How the friend's keys are spelled on the wire.
///
/// Receiving services disagree on `refereeName` versus `referredName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStyle {
    #[default]
    Referee,
    Referred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReferralField {
    ReferrerName,
    ReferrerEmail,
    ReferrerPhone,
    RefereeName,
    RefereeEmail,
    RefereePhone,
    Course,
    Message,
}

impl ReferralField {
    pub fn key(&self, style: KeyStyle) -> &'static str {
        match (self, style) {
            (ReferralField::ReferrerName, _) => "referrerName",
            (ReferralField::ReferrerEmail, _) => "referrerEmail",
            (ReferralField::ReferrerPhone, _) => "referrerPhone",
            (ReferralField::RefereeName, KeyStyle::Referee) => "refereeName",
            (ReferralField::RefereeName, KeyStyle::Referred) => "referredName",
            (ReferralField::RefereeEmail, KeyStyle::Referee) => "refereeEmail",
            (ReferralField::RefereeEmail, KeyStyle::Referred) => "referredEmail",
            (ReferralField::RefereePhone, KeyStyle::Referee) => "refereePhone",
            (ReferralField::RefereePhone, KeyStyle::Referred) => "referredPhone",
            (ReferralField::Course, _) => "course",
            (ReferralField::Message, _) => "message",
        }
    }
}

impl std::fmt::Display for ReferralField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key(KeyStyle::default()))
    }
}
