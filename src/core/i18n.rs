// Author: Cinnamon Screensaver contributors
// License: MIT

//! User-facing message lookup.
//!
//! Messages are addressed by a stable [`MessageId`] rather than by their
//! English text. A [`Catalog`] owns its plural rule, so adding a language
//! never touches call sites.

/// Stable identifiers for every translatable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    ScreensaverActive,
    ScreensaverInactive,
    NotCurrentlyActive,
    /// Plural: takes a count, `{n}` is substituted.
    ActiveForSeconds,
}

impl MessageId {
    /// Source-language forms: `[singular]` or `[singular, plural]`.
    fn source(self) -> &'static [&'static str] {
        match self {
            MessageId::ScreensaverActive => &["The screensaver is active"],
            MessageId::ScreensaverInactive => &["The screensaver is inactive"],
            MessageId::NotCurrentlyActive => &["The screensaver is not currently active."],
            MessageId::ActiveForSeconds => &[
                "The screensaver has been active for {n} second.",
                "The screensaver has been active for {n} seconds.",
            ],
        }
    }
}

/// Selects the plural form index for a count.
pub type PluralRule = fn(u64) -> usize;

pub struct Catalog {
    /// Plural rule of this catalog's language.
    pub plural: PluralRule,
    /// Translated forms; `None` falls back to the source text.
    pub lookup: fn(MessageId) -> Option<&'static [&'static str]>,
}

impl Catalog {
    fn forms(&self, id: MessageId) -> &'static [&'static str] {
        (self.lookup)(id).unwrap_or_else(|| id.source())
    }

    pub fn text(&self, id: MessageId) -> &'static str {
        self.forms(id).first().copied().unwrap_or("")
    }

    pub fn plural(&self, id: MessageId, n: u64) -> String {
        let forms = self.forms(id);
        let idx = (self.plural)(n).min(forms.len().saturating_sub(1));
        forms
            .get(idx)
            .copied()
            .unwrap_or("")
            .replace("{n}", &n.to_string())
    }
}

fn source_plural(n: u64) -> usize {
    usize::from(n != 1)
}

fn source_lookup(_: MessageId) -> Option<&'static [&'static str]> {
    None
}

/// The untranslated catalog.
pub static SOURCE: Catalog = Catalog {
    plural: source_plural,
    lookup: source_lookup,
};

pub fn catalog() -> &'static Catalog {
    &SOURCE
}
