use crate::core::QuoteStats;
use crate::utils::error::Result;
use std::path::Path;

pub const DEFAULT_TARGET: &str = "rep/add-new-customer.html";

/// Applied in order.
pub const QUOTE_SUBSTITUTIONS: [(char, char); 4] = [
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub stats: QuoteStats,
}

impl Normalized {
    pub fn changed(&self) -> bool {
        self.stats.total() > 0
    }
}

pub fn normalize_text(content: &str) -> Normalized {
    let mut text = content.to_string();
    let mut stats = QuoteStats::default();

    for (curly, straight) in QUOTE_SUBSTITUTIONS {
        let count = text.matches(curly).count();
        if count == 0 {
            continue;
        }
        if straight == '"' {
            stats.double_quotes += count;
        } else {
            stats.single_quotes += count;
        }
        text = text.replace(curly, &straight.to_string());
    }

    Normalized { text, stats }
}

/// Rewrites the file in place. Missing files and invalid UTF-8 surface as
/// `IoError`; there is no backup and no partial-write protection.
pub fn normalize_file(path: impl AsRef<Path>) -> Result<QuoteStats> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let normalized = normalize_text(&content);

    std::fs::write(path, normalized.text)?;
    tracing::debug!(
        "Replaced {} quotes in {}",
        normalized.stats.total(),
        path.display()
    );
    Ok(normalized.stats)
}
