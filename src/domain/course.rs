pub const COURSE_MISSING: &str = "Please select a course";
pub const COURSE_UNKNOWN: &str = "Please select a valid course";

/// The courses a friend can be referred to.
///
/// Web development is listed under two ids depending on the form that posts
/// it. Each id is kept as selected so the endpoint receives what was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    WebDevelopment,
    WebDev,
    DataScience,
    MobileDevelopment,
    UiUxDesign,
    AiMachineLearning,
}

impl Course {
    pub const ALL: [Course; 6] = [
        Course::WebDevelopment,
        Course::WebDev,
        Course::DataScience,
        Course::MobileDevelopment,
        Course::UiUxDesign,
        Course::AiMachineLearning,
    ];

    pub fn parse(id: String) -> Result<Course, String> {
        if id.is_empty() {
            return Err(COURSE_MISSING.to_string());
        }
        match id.as_str() {
            "web-development" => Ok(Course::WebDevelopment),
            "web-dev" => Ok(Course::WebDev),
            "data-science" => Ok(Course::DataScience),
            "mobile-dev" => Ok(Course::MobileDevelopment),
            "ui-ux" => Ok(Course::UiUxDesign),
            "ai-ml" => Ok(Course::AiMachineLearning),
            _ => Err(COURSE_UNKNOWN.to_string()),
        }
    }

    /// Identifier sent to the referral endpoint.
    pub fn id(&self) -> &'static str {
        match self {
            Course::WebDevelopment => "web-development",
            Course::WebDev => "web-dev",
            Course::DataScience => "data-science",
            Course::MobileDevelopment => "mobile-dev",
            Course::UiUxDesign => "ui-ux",
            Course::AiMachineLearning => "ai-ml",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Course::WebDevelopment | Course::WebDev => "Web Development",
            Course::DataScience => "Data Science",
            Course::MobileDevelopment => "Mobile Development",
            Course::UiUxDesign => "UI/UX Design",
            Course::AiMachineLearning => "AI & Machine Learning",
        }
    }
}

impl AsRef<str> for Course {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
