/// Edit-distance bound for fuzzy identity merging. Pairs merge when
/// `0 < distance < DEFAULT_FUZZY_THRESHOLD`.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

/// Suffix appended to every replacement token.
pub const TOKEN_SUFFIX: &str = "...";

/// Alphabet the replacement pool is built from.
pub const TOKEN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Pool size: 26 single letters plus C(26, 2) unordered letter pairs.
pub const DEFAULT_POOL_SIZE: usize = 26 + 325;

/// Separator placed between rendered sentences of a document.
pub const DEFAULT_SENTENCE_SEPARATOR: &str = "\n";

/// Markup envelopes of the tagged rendering.
pub const TEXT_OPEN: &str = "<text>";
pub const TEXT_CLOSE: &str = "</text>";
pub const SENTENCE_OPEN: &str = "<sentence>";
pub const SENTENCE_CLOSE: &str = "</sentence>";
