//! Localized strings for replies the bot sends on its own behalf.

/// Language of bot-authored replies, selected with `BOT_LOCALE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fi,
}

impl Locale {
    /// Parses a locale tag such as `en`, `en-US` or `fi`, ignoring case.
    pub fn parse(tag: &str) -> Option<Self> {
        let language = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Self::En),
            "fi" => Some(Self::Fi),
            _ => None,
        }
    }

    /// Reply for a context-menu action that has no registered handler.
    pub fn not_implemented(&self) -> &'static str {
        match self {
            Self::En => {
                "This action has not been implemented (no interaction handler is registered under that name)."
            }
            Self::Fi => {
                "Virhe contextissa. Tuollaista nappulaa ei ole koodattu (ei löytynyt interaction kansiosta oikealla nimellä)"
            }
        }
    }

    /// Generic reply for a handler that failed, carrying the interaction id and type.
    pub fn interaction_failed(&self, id: u64, kind: &str) -> String {
        match self {
            Self::En => format!("Something went wrong with interaction: {} {}", id, kind),
            Self::Fi => format!("Virhe interactionissa: {} {}", id, kind),
        }
    }
}
