/// Settings file and environment naming shared across crates
pub const CONFIG_FILE_STEM: &str = "kairos";
pub const CONFIG_FILE: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

pub const ENV_PREFIX: &str = "KAIROS";
pub const ENV_SEPARATOR: &str = "__";

/// Symbolic date keywords accepted wherever a date-like value is expected
pub const EPOCH_KEYWORD: &str = "epoch";
pub const TODAY_KEYWORD: &str = "today";

/// 1970-01-01 as a `(year, month, day)` triple.
pub const EPOCH_YMD: (i32, u32, u32) = (1970, 1, 1);

/// Accepted textual date layouts, tried in order.
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LISTING_COUNT: u32 = 10;
