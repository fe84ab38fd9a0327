//! Substitution planner: one token per canonical identity.
//!
//! Identities are visited in first-seen order with a single counter for the
//! whole document. A fuzzily linked identity reuses the token of the identity
//! it points at, which is always earlier and therefore already assigned.

use std::collections::HashMap;

use pseudo_core::errors::{PseudoError, PseudoResult};
use pseudo_core::models::{EntitySpan, PoolExhaustionNotice};

use crate::pool::ReplacementPool;
use crate::resolver::{IdentityKey, IdentityResolver, Resolution};

/// Identity → replacement token, for one document.
#[derive(Debug, Clone, Default)]
pub struct PseudoMapping {
    case_insensitive: bool,
    tokens: HashMap<IdentityKey, String>,
}

impl PseudoMapping {
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            tokens: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: IdentityKey, token: String) {
        self.tokens.insert(key, token);
    }

    pub fn get(&self, key: &IdentityKey) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }

    /// Token for a normalized span.
    pub fn token_for(&self, span: &EntitySpan) -> PseudoResult<&str> {
        let key = IdentityKey::new(&span.text, span.category, self.case_insensitive);
        self.get(&key).ok_or_else(|| PseudoError::UnplannedEntity {
            surface: span.text.clone(),
            category: span.category.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Distinct tokens in use.
    pub fn distinct_tokens(&self) -> usize {
        let mut tokens: Vec<&String> = self.tokens.values().collect();
        tokens.sort();
        tokens.dedup();
        tokens.len()
    }
}

/// Planner output.
#[derive(Debug, Clone)]
pub struct SubstitutionPlan {
    pub mapping: PseudoMapping,
    /// Tokens allocated from the pool (linked identities allocate none).
    pub allocated: usize,
    pub notice: Option<PoolExhaustionNotice>,
}

/// Assign tokens to every identity of `resolution`.
pub fn plan(
    resolver: &IdentityResolver,
    resolution: &Resolution,
    pool: &mut ReplacementPool,
) -> SubstitutionPlan {
    let start = pool.allocated();
    let mut assigned: Vec<String> = Vec::with_capacity(resolution.len());
    let mut mapping = PseudoMapping::new(resolver.case_insensitive());

    for (i, identity) in resolution.identities().iter().enumerate() {
        let token = match resolution.canonical_link(i) {
            Some(c) => assigned[c].clone(),
            None => pool.next_token(),
        };
        mapping.insert(identity.key.clone(), token.clone());
        assigned.push(token);
    }

    SubstitutionPlan {
        mapping,
        allocated: pool.allocated() - start,
        notice: pool.exhaustion_notice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudo_core::models::EntityCategory::*;

    fn pool(tokens: &[&str]) -> ReplacementPool {
        ReplacementPool::from_tokens(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn tokens_follow_first_encounter_order() {
        let resolver = IdentityResolver::default();
        let r = resolver.resolve([("Lyon", Location), ("Marie", Person), ("Lyon", Location)]);
        let plan = plan(&resolver, &r, &mut pool(&["A...", "B...", "C..."]));
        assert_eq!(plan.mapping.get(&resolver.key_for("Lyon", Location)), Some("A..."));
        assert_eq!(plan.mapping.get(&resolver.key_for("Marie", Person)), Some("B..."));
        assert_eq!(plan.allocated, 2);
        assert!(plan.notice.is_none());
    }

    #[test]
    fn linked_identity_reuses_canonical_token() {
        let resolver = IdentityResolver::default();
        let r = resolver.resolve([("Dupont", Person), ("Paris", Location), ("Dupond", Person)]);
        let plan = plan(&resolver, &r, &mut pool(&["A...", "B...", "C..."]));
        assert_eq!(plan.mapping.get(&resolver.key_for("Dupond", Person)), Some("A..."));
        assert_eq!(plan.allocated, 2);
        assert_eq!(plan.mapping.distinct_tokens(), 2);
    }

    #[test]
    fn chained_links_inherit_through_the_direct_target() {
        let resolver = IdentityResolver::default();
        let r = resolver.resolve([("Martin", Person), ("Martins", Person), ("Martinsa", Person)]);
        let plan = plan(&resolver, &r, &mut pool(&["A...", "B..."]));
        // "Martinsa" points at "Martins", which holds "Martin"'s token.
        assert_eq!(plan.mapping.get(&resolver.key_for("Martinsa", Person)), Some("A..."));
        assert_eq!(plan.allocated, 1);
    }

    #[test]
    fn same_surface_in_other_category_gets_its_own_token() {
        let resolver = IdentityResolver::default();
        let r = resolver.resolve([("Orange", Organization), ("Orange", Location)]);
        let plan = plan(&resolver, &r, &mut pool(&["A...", "B..."]));
        assert_eq!(plan.mapping.get(&resolver.key_for("Orange", Organization)), Some("A..."));
        assert_eq!(plan.mapping.get(&resolver.key_for("Orange", Location)), Some("B..."));
    }

    #[test]
    fn wraparound_is_reported_not_fatal() {
        let resolver = IdentityResolver::default();
        let r = resolver.resolve([("Ana", Person), ("Lille", Location), ("Total", Organization)]);
        let plan = plan(&resolver, &r, &mut pool(&["A...", "B..."]));
        assert_eq!(plan.mapping.get(&resolver.key_for("Total", Organization)), Some("A..."));
        let notice = plan.notice.unwrap();
        assert_eq!(notice.allocated, 3);
        assert_eq!(notice.pool_size, 2);
    }

    #[test]
    fn unplanned_span_is_an_error() {
        let mapping = PseudoMapping::new(true);
        let span = EntitySpan {
            start: 0,
            end: 3,
            byte_start: 0,
            byte_end: 3,
            category: Person,
            text: "Ana".into(),
        };
        assert!(matches!(
            mapping.token_for(&span),
            Err(PseudoError::UnplannedEntity { .. })
        ));
    }
}
