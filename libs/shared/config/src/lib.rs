use std::env;
use chrono::NaiveTime;
use tracing::warn;

pub const DEFAULT_CHAT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3000;

/// Candidate hours offered on a bookable day when `BOOKING_SLOT_HOURS` is unset.
pub const DEFAULT_SLOT_HOURS: [&str; 8] = [
    "08:00", "09:30", "11:00", "13:00", "14:30", "15:00", "16:00", "16:30",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
    pub chat_completion_url: String,
    pub chat_model: String,
    pub chat_timeout_secs: u64,
    pub slot_hours: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            openai_api_key: String::new(),
            chat_completion_url: DEFAULT_CHAT_COMPLETION_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            chat_timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
            slot_hours: DEFAULT_SLOT_HOURS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            port: env::var("PORT")
                .ok()
                .and_then(|raw| {
                    raw.parse().map_err(|_| warn!("PORT is not a valid port: {}", raw)).ok()
                })
                .unwrap_or(defaults.port),
            openai_api_key: env::var("OPENAI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("OPENAI_API_KEY not set, chat replies will use the fallback message");
                    String::new()
                }),
            chat_completion_url: env::var("CHAT_COMPLETION_URL")
                .unwrap_or(defaults.chat_completion_url),
            chat_model: env::var("CHAT_MODEL")
                .unwrap_or(defaults.chat_model),
            chat_timeout_secs: env::var("CHAT_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| {
                    raw.parse()
                        .map_err(|_| warn!("CHAT_TIMEOUT_SECS is not a number: {}, using default", raw))
                        .ok()
                })
                .unwrap_or(defaults.chat_timeout_secs),
            slot_hours: env::var("BOOKING_SLOT_HOURS")
                .map(|raw| slot_hours_or_default(&raw))
                .unwrap_or(defaults.slot_hours),
        };

        if !config.is_chat_configured() {
            warn!("Chat relay not configured - missing OPENAI_API_KEY or CHAT_COMPLETION_URL");
        }

        config
    }

    pub fn is_chat_configured(&self) -> bool {
        !self.openai_api_key.is_empty() && !self.chat_completion_url.is_empty()
    }
}

fn parse_slot_hours(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|hour| !hour.is_empty())
        .map(str::to_string)
        .collect()
}

/// Falls back to `DEFAULT_SLOT_HOURS` when the list is empty or any entry is
/// not `HH:MM`.
fn slot_hours_or_default(raw: &str) -> Vec<String> {
    let hours = parse_slot_hours(raw);

    if hours.is_empty() {
        warn!("BOOKING_SLOT_HOURS is empty, using default slot hours");
        return AppConfig::default().slot_hours;
    }

    if let Some(bad) = hours
        .iter()
        .find(|hour| NaiveTime::parse_from_str(hour, "%H:%M").is_err())
    {
        warn!("BOOKING_SLOT_HOURS has invalid hour '{}', using default slot hours", bad);
        return AppConfig::default().slot_hours;
    }

    hours
}
