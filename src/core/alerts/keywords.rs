// Keyword matching for disaster-alert classification.
//
// A message is an alert when any configured keyword occurs in its body.
// Matching is case-sensitive substring containment over UTF-8 text, so a
// keyword can never match half of a multi-byte character.

/// Keywords used when no configuration overrides them.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "재난",
    "긴급",
    "대피",
    "지진",
    "경보",
    "호우",
    "폭우",
    "화재",
    "[행안부]",
    "[안전안내]",
    "특보",
    "대응요령",
];

/// Ordered, immutable set of alert keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Build a matcher from `keywords`, keeping their order.
    /// An empty keyword is kept and matches every text.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .inspect(|keyword: &String| {
                if keyword.is_empty() {
                    log::warn!("Empty alert keyword configured, every message will alert");
                }
            })
            .collect();
        Self { keywords }
    }

    /// Returns true if at least one keyword occurs in `text`.
    pub fn is_alert(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }

    /// First keyword, in configured order, found in `text`.
    pub fn matched_keyword(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| text.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
