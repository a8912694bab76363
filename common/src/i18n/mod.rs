//! Locale handling for the site: the supported locales, browser language
//! negotiation, path-prefix routing and the message catalog.

mod messages;
mod routing;

pub use messages::Message;
pub use routing::{localized_path, resolve_route, switch_locale, Page, RouteResolution};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ko, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "ko" => Some(Locale::Ko),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Picks the first supported locale from a browser preference list
    /// (`navigator.languages`, e.g. `["en-US", "ko"]`), matching on the primary
    /// language subtag. Falls back to the default locale.
    pub fn negotiate<S: AsRef<str>>(preferred: &[S]) -> Locale {
        preferred
            .iter()
            .filter_map(|tag| {
                let primary = tag.as_ref().split(['-', '_']).next()?;
                Locale::from_code(&primary.to_ascii_lowercase())
            })
            .next()
            .unwrap_or_default()
    }
}
