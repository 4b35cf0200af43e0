// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: &str = "emojis.json";

// --- Matcher ---
pub const DEFAULT_FACE_CANDIDATE_CAP: usize = 71;
pub const DEFAULT_MEMO_ENABLED: bool = true;
pub const DEFAULT_MEMO_CAPACITY: u64 = 512;
pub const DEFAULT_MEMO_TTL_SECS: u64 = 600; // 10 minutes

// --- Cache ---
pub const DEFAULT_LIFESPAN_MS: u64 = 5_000;

// --- Gate ---
pub const DEFAULT_CLASSIFY_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_DISPLAY_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_NARRATION_DISPLAY_INTERVAL_MS: u64 = 2_000; // time for the screen reader

// --- Feed ---
pub const DEFAULT_FEED_CAPACITY: usize = 64;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
