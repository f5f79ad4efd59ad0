//! WhatsApp deep link offered when the form cannot reach the backend.

use crate::config::Config;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Pre-filled WhatsApp chat link, independent of the HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChannel {
    number: String,
    greeting: String,
}

impl FallbackChannel {
    pub fn new(number: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            greeting: greeting.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.whatsapp_number, &config.whatsapp_greeting)
    }

    /// `https://wa.me/{number}?text={greeting}` with the greeting percent-encoded.
    pub fn link(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE,
            self.number,
            urlencoding::encode(&self.greeting)
        )
    }
}

impl Default for FallbackChannel {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
