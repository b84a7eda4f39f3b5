/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent with every page fetch.
pub const FETCH_USER_AGENT: &str = "Mozilla/5.0 (FactCheckerFusion)";

/// Confidence reported for answers served from the verdict cache.
pub const CACHE_HIT_CONFIDENCE: u8 = 85;

/// Maximum characters of a source title shown on a card.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum characters of a source snippet shown on a card.
pub const MAX_SNIPPET_CHARS: usize = 400;

/// Maximum evidence sentences attached to a single source card.
pub const MAX_CARD_SENTENCES: usize = 5;

/// Maximum sentences quoted verbatim inside an explanation.
pub const MAX_QUOTED_SENTENCES: usize = 2;

/// Minimum input length before a rewriter will touch the text.
pub const MIN_REWRITE_CHARS: usize = 15;
