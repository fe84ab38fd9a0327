//! Entity identity resolver.
//!
//! Two steps over a document's mentions, in document order:
//!
//! 1. **Exact**: mentions with the same category and the same (case-folded)
//!    surface are one identity. Distance 0 always merges.
//! 2. **Fuzzy**: for every pair of distinct identities `(i, j)`, `i < j`, same
//!    category, with `0 < levenshtein(i, j) < threshold`, `j` points at `i`.
//!    The first qualifying `i` wins.
//!
//! The fuzzy step is first-match and NOT transitive: with `A~B`, `B~C` and
//! not `A~C`, `C` points at `B`, never directly at `A`. It is not a
//! union-find and must not become one.

use std::collections::{BTreeMap, HashMap};

use pseudo_core::config::ResolverConfig;
use pseudo_core::models::{EntityCategory, EntitySpan};
use pseudo_observability::tracing_setup::events;
use serde::Serialize;

/// Exact-match identity of a mention: category plus (optionally case-folded)
/// surface text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct IdentityKey {
    pub category: EntityCategory,
    pub surface: String,
}

impl IdentityKey {
    pub fn new(surface: &str, category: EntityCategory, case_insensitive: bool) -> Self {
        let surface = if case_insensitive {
            surface.to_lowercase()
        } else {
            surface.to_string()
        };
        Self { category, surface }
    }
}

/// One distinct identity: its key, the first raw surface seen for it, and
/// every raw spelling that exact-matched it.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub key: IdentityKey,
    pub representative: String,
    pub variants: Vec<String>,
    pub mentions: usize,
}

/// Resolver settings.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    threshold: usize,
    case_insensitive: bool,
}

impl IdentityResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            threshold: config.fuzzy_threshold,
            case_insensitive: config.case_insensitive,
        }
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn key_for(&self, surface: &str, category: EntityCategory) -> IdentityKey {
        IdentityKey::new(surface, category, self.case_insensitive)
    }

    /// Resolve a flat mention list `(surface, category)` in document order.
    pub fn resolve<'a, I>(&self, mentions: I) -> Resolution
    where
        I: IntoIterator<Item = (&'a str, EntityCategory)>,
    {
        let mut identities: Vec<Identity> = Vec::new();
        let mut index: HashMap<IdentityKey, usize> = HashMap::new();

        for (surface, category) in mentions {
            let key = self.key_for(surface, category);
            match index.get(&key) {
                Some(&i) => {
                    let identity = &mut identities[i];
                    identity.mentions += 1;
                    if !identity.variants.iter().any(|v| v == surface) {
                        identity.variants.push(surface.to_string());
                    }
                }
                None => {
                    index.insert(key.clone(), identities.len());
                    identities.push(Identity {
                        key,
                        representative: surface.to_string(),
                        variants: vec![surface.to_string()],
                        mentions: 1,
                    });
                }
            }
        }

        let canonical = self.fuzzy_links(&identities);
        Resolution {
            identities,
            index,
            canonical,
        }
    }

    /// Resolve the mentions of already-normalized sentences.
    pub fn resolve_spans<'a, I>(&self, spans: I) -> Resolution
    where
        I: IntoIterator<Item = &'a EntitySpan>,
    {
        self.resolve(spans.into_iter().map(|s| (s.text.as_str(), s.category)))
    }

    fn fuzzy_links(&self, identities: &[Identity]) -> Vec<Option<usize>> {
        let mut canonical = vec![None; identities.len()];
        if self.threshold <= 1 {
            return canonical;
        }
        let chars: Vec<Vec<char>> = identities
            .iter()
            .map(|id| id.key.surface.chars().collect())
            .collect();

        for j in 1..identities.len() {
            for i in 0..j {
                if identities[i].key.category != identities[j].key.category {
                    continue;
                }
                // Length difference is a lower bound on the distance.
                if chars[i].len().abs_diff(chars[j].len()) >= self.threshold {
                    continue;
                }
                let distance = levenshtein(&chars[i], &chars[j]);
                if distance > 0 && distance < self.threshold {
                    events::identity_merged(
                        &identities[j].representative,
                        &identities[i].representative,
                        distance,
                    );
                    canonical[j] = Some(i);
                    break;
                }
            }
        }
        canonical
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

/// Document-scoped result of identity resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    identities: Vec<Identity>,
    index: HashMap<IdentityKey, usize>,
    /// Direct fuzzy link of each identity; `None` means canonical to self.
    canonical: Vec<Option<usize>>,
}

impl Resolution {
    /// Distinct identities in first-seen order.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn index_of(&self, key: &IdentityKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Index of the identity `i` was fuzzily linked to, if any. Always `< i`.
    pub fn canonical_link(&self, i: usize) -> Option<usize> {
        self.canonical.get(i).copied().flatten()
    }

    /// Canonical identity for a key: the direct link target, or the
    /// identity itself when unlinked.
    pub fn canonical_of(&self, key: &IdentityKey) -> Option<&Identity> {
        let i = self.index_of(key)?;
        let c = self.canonical_link(i).unwrap_or(i);
        self.identities.get(c)
    }

    /// Number of fuzzy links made.
    pub fn merged_count(&self) -> usize {
        self.canonical.iter().filter(|c| c.is_some()).count()
    }

    /// Raw surface → canonical surface, for every observed spelling that is
    /// not its own canonical representative. Absence means canonical to self.
    pub fn surface_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for (i, identity) in self.identities.iter().enumerate() {
            let canonical = &self.identities[self.canonical_link(i).unwrap_or(i)].representative;
            for variant in &identity.variants {
                if variant != canonical {
                    map.insert(variant.clone(), canonical.clone());
                }
            }
        }
        map
    }
}

/// Levenshtein distance over chars (two-row DP).
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Convenience wrapper over `&str`.
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}
