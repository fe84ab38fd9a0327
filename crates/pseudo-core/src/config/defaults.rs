use crate::constants;

pub const DEFAULT_FUZZY_THRESHOLD: usize = constants::DEFAULT_FUZZY_THRESHOLD;
pub const DEFAULT_CASE_INSENSITIVE: bool = true;

pub const DEFAULT_POOL_SHUFFLE: bool = true;

pub const DEFAULT_ESCAPE_MARKUP: bool = true;
pub const DEFAULT_SENTENCE_SEPARATOR: &str = constants::DEFAULT_SENTENCE_SEPARATOR;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
