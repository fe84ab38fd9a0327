//! Document-scoped context: the first of the two passes.
//!
//! Every sentence is normalized and every mention resolved and planned
//! before any sentence is rendered, so identity decisions always see the
//! whole document.

use std::collections::BTreeMap;

use pseudo_core::errors::PseudoResult;
use pseudo_core::models::{DocSummary, PoolExhaustionNotice, SentenceInput, SentenceRecord};

use crate::normalizer::normalize_sentence;
use crate::planner::{self, PseudoMapping, SubstitutionPlan};
use crate::pool::ReplacementPool;
use crate::resolver::{IdentityResolver, Resolution};

/// A normalized sentence and its index in the input.
#[derive(Debug, Clone)]
pub struct IndexedRecord<'a> {
    pub index: usize,
    pub record: SentenceRecord<'a>,
}

/// Everything the renderer needs for one document.
#[derive(Debug, Clone)]
pub struct DocumentContext<'a> {
    records: Vec<IndexedRecord<'a>>,
    resolution: Resolution,
    plan: SubstitutionPlan,
}

impl<'a> DocumentContext<'a> {
    /// Collect, resolve and plan. Blank sentences are skipped; the first
    /// malformed span aborts the whole document.
    pub fn build(
        sentences: &'a [SentenceInput],
        resolver: &IdentityResolver,
        pool: &mut ReplacementPool,
    ) -> PseudoResult<Self> {
        let records = sentences
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_blank())
            .map(|(index, s)| {
                normalize_sentence(index, &s.plain_text, &s.spans)
                    .map(|record| IndexedRecord { index, record })
            })
            .collect::<PseudoResult<Vec<_>>>()?;

        let resolution = {
            let _span = pseudo_observability::resolve_span!(records.len()).entered();
            resolver.resolve_spans(records.iter().flat_map(|r| r.record.spans.iter()))
        };
        let plan = planner::plan(resolver, &resolution, pool);

        Ok(Self {
            records,
            resolution,
            plan,
        })
    }

    pub fn records(&self) -> &[IndexedRecord<'a>] {
        &self.records
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn mapping(&self) -> &PseudoMapping {
        &self.plan.mapping
    }

    pub fn notice(&self) -> Option<&PoolExhaustionNotice> {
        self.plan.notice.as_ref()
    }

    pub fn sentence_count(&self) -> usize {
        self.records.len()
    }

    pub fn entity_count(&self) -> usize {
        self.records.iter().map(|r| r.record.spans.len()).sum()
    }

    /// Raw surface → canonical surface for merged spellings.
    pub fn canonical_map(&self) -> BTreeMap<String, String> {
        self.resolution.surface_map()
    }

    /// Counts for statistics. `elapsed_ms` is left for the caller to fill.
    pub fn summary(&self) -> DocSummary {
        let mut summary = DocSummary {
            sentence_count: self.records.len() as u64,
            pool_wrapped: self.plan.notice.is_some(),
            ..Default::default()
        };
        for span in self.records.iter().flat_map(|r| r.record.spans.iter()) {
            summary.count_entity(span.category);
        }
        summary
    }
}
