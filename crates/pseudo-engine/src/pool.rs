//! Replacement token pool.
//!
//! Tokens are `A...` through `Z...` followed by every unordered letter pair
//! (`AB...`, `AC...`, ..., `YZ...`). The pool is shuffled at most once per
//! document and consumed by a monotonically increasing index modulo its
//! length: it never runs dry, but past `len()` allocations tokens repeat and
//! a [`PoolExhaustionNotice`] is reported.

use std::collections::HashSet;

use pseudo_core::constants::{TOKEN_ALPHABET, TOKEN_SUFFIX};
use pseudo_core::errors::{PseudoError, PseudoResult};
use pseudo_core::models::{PoolExhaustionNotice, SentenceInput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An ordered, non-repeating token sequence plus an allocation counter.
#[derive(Debug, Clone)]
pub struct ReplacementPool {
    tokens: Vec<String>,
    allocated: usize,
}

impl ReplacementPool {
    /// Standard pool in alphabetical order.
    pub fn ordered() -> Self {
        Self {
            tokens: standard_tokens(),
            allocated: 0,
        }
    }

    /// Standard pool shuffled with a seeded RNG. Same seed, same order.
    pub fn shuffled(seed: u64) -> Self {
        let mut tokens = standard_tokens();
        let mut rng = StdRng::seed_from_u64(seed);
        tokens.shuffle(&mut rng);
        Self {
            tokens,
            allocated: 0,
        }
    }

    /// Pool over caller-supplied tokens, consumed in the given order. Tokens
    /// must be non-empty and distinct.
    pub fn from_tokens<I, S>(tokens: I) -> PseudoResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(PseudoError::ConfigError(
                "replacement pool must hold at least one token".into(),
            ));
        }
        let mut seen = HashSet::with_capacity(tokens.len());
        if let Some(duplicate) = tokens.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(PseudoError::ConfigError(format!(
                "replacement pool token '{duplicate}' appears more than once"
            )));
        }
        Ok(Self {
            tokens,
            allocated: 0,
        })
    }

    /// Hand out the next token. Wraps around after `len()` allocations.
    pub fn next_token(&mut self) -> String {
        let token = self.tokens[self.allocated % self.tokens.len()].clone();
        self.allocated += 1;
        token
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens handed out so far.
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    pub fn has_wrapped(&self) -> bool {
        self.allocated > self.tokens.len()
    }

    /// Wraparound report, if allocation went past the end of the pool.
    pub fn exhaustion_notice(&self) -> Option<PoolExhaustionNotice> {
        self.has_wrapped().then(|| PoolExhaustionNotice {
            pool_size: self.tokens.len(),
            allocated: self.allocated,
        })
    }

    /// Tokens in consumption order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Single letters then unordered letter pairs, each with the `...` suffix.
pub fn standard_tokens() -> Vec<String> {
    let letters: Vec<char> = TOKEN_ALPHABET.chars().collect();
    let singles = letters.iter().map(|a| format!("{a}{TOKEN_SUFFIX}"));
    let pairs = letters.iter().enumerate().flat_map(|(i, a)| {
        letters[i + 1..]
            .iter()
            .map(move |b| format!("{a}{b}{TOKEN_SUFFIX}"))
    });
    singles.chain(pairs).collect()
}

/// Shuffle seed derived from document content: the same document always
/// gets the same pool order.
pub fn content_seed(sentences: &[SentenceInput]) -> u64 {
    let mut hasher = blake3::Hasher::new();
    for sentence in sentences {
        hasher.update(sentence.plain_text.as_bytes());
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(seed)
}
