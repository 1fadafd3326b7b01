use super::models::OutputFormat;
use checkup::core::models::sex::Sex;

pub struct DefaultsConfig {
    pub sex: Sex,
    pub format: OutputFormat,
    pub show_notes: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sex: Sex::Female,
            format: OutputFormat::Text,
            show_notes: true,
        }
    }
}
