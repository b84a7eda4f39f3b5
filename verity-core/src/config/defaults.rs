// Single source of truth for all default values.

// --- Search ---
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const SEARCH_RESULTS_HARD_CAP: usize = 10; // provider maximum per request
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 12;

// --- Oracle ---
pub const DEFAULT_ORACLE_PROVIDER: &str = "remote";
pub const DEFAULT_ORACLE_FALLBACK: &str = "none";
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBED_CACHE_SIZE: u64 = 10_000;

// --- Evidence ---
pub const DEFAULT_MAX_URLS: usize = 10;
pub const DEFAULT_PER_URL_CANDIDATES: usize = 8;
pub const DEFAULT_ENTAIL_THRESHOLD: f64 = 0.72;
pub const DEFAULT_CONTRA_THRESHOLD: f64 = 0.72;
pub const DEFAULT_MAX_ENTAILING: usize = 6;
pub const DEFAULT_MAX_CONTRADICTING: usize = 2;
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 400;
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 40;
pub const DEFAULT_MAX_SENTENCE_CHARS: usize = 300;
pub const DEFAULT_MAX_SENTENCES_PER_PAGE: usize = 800;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 12;

// --- Heuristic ---
pub const DEFAULT_DECISIVE_RATIO: f64 = 2.0;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_DB_FILENAME: &str = "verity.db";
pub const DEFAULT_CACHE_L1_SIZE: u64 = 1_000;
pub const DEFAULT_CACHE_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Rewriter ---
pub const DEFAULT_REWRITER_TIMEOUT_SECS: u64 = 20;
