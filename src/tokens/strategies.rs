use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};
use scraper::{Html, Node};

use super::TokenExtractionStrategy;
use crate::core::AuthTokens;

static ENCPARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"encparam: '(.+?)'")
        .case_insensitive(true)
        .build()
        .expect("encparam pattern is valid")
});

static ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"id: '([A-Za-z0-9]+)' ?")
        .case_insensitive(true)
        .build()
        .expect("id pattern is valid")
});

/// Scans the raw page text for `encparam: '...'` and `id: '...'`.
///
/// Each pattern is matched independently and the first occurrence in document order wins.
#[derive(Debug, Clone)]
pub struct RegexStrategy {
    encparam: Regex,
    id: Regex,
}

impl Default for RegexStrategy {
    fn default() -> Self {
        Self {
            encparam: ENCPARAM_RE.clone(),
            id: ID_RE.clone(),
        }
    }
}

impl RegexStrategy {
    /// Custom patterns; each must have one capture group holding the token.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for an invalid pattern.
    pub fn with_patterns(encparam: &str, id: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            encparam: RegexBuilder::new(encparam).case_insensitive(true).build()?,
            id: RegexBuilder::new(id).case_insensitive(true).build()?,
        })
    }
}

impl TokenExtractionStrategy for RegexStrategy {
    fn name(&self) -> &str {
        "regex"
    }

    fn extract(&self, html: &str) -> Option<AuthTokens> {
        let encparam = self.encparam.captures(html)?.get(1)?.as_str();
        let id = self.id.captures(html)?.get(1)?.as_str();
        Some(AuthTokens {
            encparam: encparam.to_string(),
            id: id.to_string(),
        })
    }
}

/// Parses the page and reads `key: 'value'` assignments from `<script>` bodies only.
///
/// More forgiving than [`RegexStrategy`] about spacing, `=` versus `:` and quote style, and
/// it ignores text outside scripts. Keys must stand alone, so `cmp_id` never matches `id`.
#[derive(Debug, Clone, Default)]
pub struct ScriptTagStrategy;

impl TokenExtractionStrategy for ScriptTagStrategy {
    fn name(&self) -> &str {
        "script-tag"
    }

    fn extract(&self, html: &str) -> Option<AuthTokens> {
        let document = Html::parse_document(html);
        let scripts: Vec<String> = document
            .root_element()
            .descendants()
            .filter(|n| matches!(n.value(), Node::Element(e) if e.name() == "script"))
            .map(|n| {
                n.children()
                    .filter_map(|c| c.value().as_text().map(|t| String::from(&**t)))
                    .collect::<String>()
            })
            .collect();

        let encparam = scripts
            .iter()
            .find_map(|s| find_assignment(s, "encparam", |v| !v.is_empty()))?;
        let id = scripts.iter().find_map(|s| {
            find_assignment(s, "id", |v| {
                !v.is_empty() && v.chars().all(|c| c.is_ascii_alphanumeric())
            })
        })?;

        Some(AuthTokens {
            encparam: encparam.to_string(),
            id: id.to_string(),
        })
    }
}

/// Finds the first quoted value assigned to `key` (case-insensitive) in `text` that
/// satisfies `accept`.
fn find_assignment<'a>(
    text: &'a str,
    key: &str,
    accept: impl Fn(&str) -> bool,
) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets identical
    let lower = text.to_ascii_lowercase();
    let key = key.to_ascii_lowercase();
    let bytes = text.as_bytes();

    let mut from = 0;
    while let Some(rel) = lower[from..].find(&key) {
        let start = from + rel;
        let end = start + key.len();
        from = end;

        let standalone_before = start == 0 || !is_ident_byte(bytes[start - 1]);
        let standalone_after = end >= bytes.len() || !is_ident_byte(bytes[end]);
        if !standalone_before || !standalone_after {
            continue;
        }

        let rest = text[end..].trim_start();
        let Some(rest) = rest.strip_prefix(':').or_else(|| rest.strip_prefix('=')) else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(quote) = rest.chars().next().filter(|c| *c == '\'' || *c == '"') else {
            continue;
        };
        let value = &rest[1..];
        if let Some(close) = value.find(quote)
            && accept(&value[..close])
        {
            return Some(&value[..close]);
        }
    }
    None
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Tries each strategy in order and returns the first complete hit.
#[derive(Debug, Clone)]
pub struct FallbackStrategy {
    strategies: Vec<Arc<dyn TokenExtractionStrategy>>,
}

impl Default for FallbackStrategy {
    fn default() -> Self {
        Self::new()
            .then(RegexStrategy::default())
            .then(ScriptTagStrategy)
    }
}

impl FallbackStrategy {
    /// An empty chain; it finds nothing until strategies are added.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy to the chain.
    pub fn then(mut self, strategy: impl TokenExtractionStrategy + 'static) -> Self {
        self.strategies.push(Arc::new(strategy));
        self
    }
}

impl TokenExtractionStrategy for FallbackStrategy {
    fn name(&self) -> &str {
        "fallback"
    }

    fn extract(&self, html: &str) -> Option<AuthTokens> {
        self.strategies.iter().find_map(|s| {
            let hit = s.extract(html);
            #[cfg(feature = "tracing")]
            tracing::trace!(strategy = s.name(), hit = hit.is_some(), "token strategy tried");
            hit
        })
    }
}
