use serde::{Deserialize, Serialize};

/// Headcount bracket offered in the demo request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompanySize {
    #[default]
    #[serde(rename = "1-10")]
    Small,
    #[serde(rename = "11-50")]
    Medium,
    #[serde(rename = "50+")]
    Large,
}

impl CompanySize {
    pub const ALL: [CompanySize; 3] = [CompanySize::Small, CompanySize::Medium, CompanySize::Large];

    pub fn code(self) -> &'static str {
        match self {
            CompanySize::Small => "1-10",
            CompanySize::Medium => "11-50",
            CompanySize::Large => "50+",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.code() == code.trim())
    }
}

/// A demo request as typed into the lead-capture form.
///
/// Only lives while the demo view is mounted; it is sent once to the relay
/// and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub company: String,
    pub company_size: CompanySize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl LeadDraft {
    /// Names of required fields that are blank. `message` is optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("company", &self.company),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Flat key/value payload handed to the relay template.
    pub fn template_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("company", self.company.trim().to_string()),
            ("company_size", self.company_size.code().to_string()),
            ("firstname", self.first_name.trim().to_string()),
            ("lastname", self.last_name.trim().to_string()),
            ("email", self.email.trim().to_string()),
            ("phone", self.phone.trim().to_string()),
            ("message", self.message.trim().to_string()),
        ]
    }
}
