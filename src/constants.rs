//! Application constants for the station reviews library
//!
//! This module contains configuration constants, default values,
//! and the external field names used throughout the crate.

// =============================================================================
// Data Source Defaults
// =============================================================================

/// Default dataset location (static JSON resource served next to the dashboard)
pub const DEFAULT_DATA_SOURCE: &str = "public/raizen_places_cleaned.json";

/// URL schemes treated as HTTP sources
pub const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

/// Prefix stripped from explicit file sources
pub const FILE_SCHEME: &str = "file://";

/// Default request timeout for the one-shot fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with dataset requests
pub const DEFAULT_USER_AGENT: &str = concat!("station-reviews/", env!("CARGO_PKG_VERSION"));

/// Application directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "station-reviews";

/// Config file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Geographic Bounds
// =============================================================================

/// Inclusive latitude range in WGS84 decimal degrees
pub mod bounds {
    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;
}

// =============================================================================
// Statistics
// =============================================================================

/// Decimal places kept on the average rating
pub const RATING_DECIMALS: i32 = 2;

/// Upper bound of the rating scale
pub const MAX_RATING: f64 = 5.0;

/// Business status recorded when a station has none
pub const UNKNOWN_BUSINESS_STATUS: &str = "UNKNOWN";

/// Business status counted as operational
pub const OPERATIONAL_STATUS: &str = "OPERATIONAL";

/// Language recorded for reviews without a language tag
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Review-count bucket labels, in display order
pub const REVIEW_COUNT_BUCKETS: &[&str] = &["0", "1-5", "6-10", "11-20", "20+"];

/// Thresholds for the coarse data-quality assessment (good, moderate)
pub mod quality_thresholds {
    /// Share of stations with at least one review
    pub const REVIEW_COVERAGE: (f64, f64) = (0.3, 0.15);

    /// Embedded reviews per station
    pub const REVIEWS_PER_STATION: (f64, f64) = (5.0, 2.0);

    /// Share of stations reported as operational
    pub const OPERATIONAL_RATE: (f64, f64) = (0.8, 0.6);
}

// =============================================================================
// Review Sentiment
// =============================================================================

/// Review ratings at or above this are positive
pub const POSITIVE_REVIEW_RATING: f64 = 4.0;

/// Review ratings at or below this are negative
pub const NEGATIVE_REVIEW_RATING: f64 = 2.0;

/// Reviews need more than this many characters of text to be analysed
pub const MIN_REVIEW_TEXT_CHARS: usize = 5;

/// Minimum analysable reviews for a station to be ranked
pub const DEFAULT_MIN_STATION_REVIEWS: usize = 3;

/// Number of key topics extracted per sentiment
pub const DEFAULT_TOPIC_COUNT: usize = 15;

/// Stations shown at each end of the sentiment ranking
pub const RANKED_STATIONS_SHOWN: usize = 5;

/// Words of this length or shorter are never topics
pub const MAX_IGNORED_WORD_CHARS: usize = 2;

/// Portuguese and English filler words plus domain words too common to be topics
pub const TOPIC_STOP_WORDS: &[&str] = &[
    // Portuguese articles, prepositions and conjunctions
    "o", "a", "os", "as", "um", "uma", "de", "do", "da", "dos", "das", "em", "no", "na", "nos",
    "nas", "para", "por", "com", "sem", "sobre", "até", "após", "antes", "durante", "entre",
    "contra", "e", "ou", "mas", "porém", "contudo", "todavia", "entretanto", "que", "se",
    "quando", "onde", "como", "porque", "qual", "quem", "quanto",
    // Portuguese pronouns and determiners
    "eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "meu", "minha", "meus", "minhas",
    "teu", "tua", "teus", "tuas", "seu", "sua", "seus", "suas", "este", "esta", "estes",
    "estas", "esse", "essa", "esses", "essas", "aquele", "aquela", "aqueles", "aquelas",
    // English
    "the", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "was", "are", "were",
    // Domain
    "posto", "shell", "gas", "station", "gasolina", "combustível", "top",
];

// =============================================================================
// Search and Display
// =============================================================================

/// Default number of search results printed by the CLI
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Default number of reviews printed per station
pub const DEFAULT_REVIEWS_SHOWN: usize = 5;

/// Date format used when printing review timestamps
pub const REVIEW_DATE_FORMAT: &str = "%b %-d, %Y";

// =============================================================================
// External Field Names
// =============================================================================

/// Raw payload fields read by the validator before any typed conversion
pub mod fields {
    pub const PLACE_ID: &str = "place_id";
    pub const NAME: &str = "name";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
}
