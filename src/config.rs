/// Site-wide copy and constants, provided once at the app root.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub tagline: String,
    pub contact_email: String,
    pub career_start_year: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Amol".to_string(),
            tagline: "Web developer building fast, friendly interfaces.".to_string(),
            contact_email: "amol.dev@proton.me".to_string(),
            career_start_year: 2022,
        }
    }
}
