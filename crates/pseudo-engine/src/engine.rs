//! [`PseudoEngine`]: `process_document` over recognizer output.

use std::collections::BTreeMap;
use std::time::Instant;

use pseudo_core::config::PseudoConfig;
use pseudo_core::errors::PseudoResult;
use pseudo_core::models::{DocSummary, PoolExhaustionNotice, SentenceInput};
use pseudo_observability::tracing_setup::events;
use rayon::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::context::DocumentContext;
use crate::pool::{content_seed, ReplacementPool};
use crate::renderer;
use crate::resolver::IdentityResolver;

/// Both renderings of one document plus what was learned producing them.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutput {
    pub doc_id: Uuid,
    /// `<text>…</text>` markup rendering.
    pub tagged: String,
    /// Pseudonymized rendering.
    pub pseudo: String,
    pub summary: DocSummary,
    pub notice: Option<PoolExhaustionNotice>,
    /// Raw surface → canonical surface for merged spellings.
    pub canonical: BTreeMap<String, String>,
}

/// Stateless pseudonymization engine. Safe to share across threads; every
/// call works on call-local data only.
#[derive(Debug, Clone)]
pub struct PseudoEngine {
    config: PseudoConfig,
    resolver: IdentityResolver,
}

impl PseudoEngine {
    pub fn new(config: PseudoConfig) -> Self {
        let resolver = IdentityResolver::new(&config.resolver);
        Self { config, resolver }
    }

    pub fn config(&self) -> &PseudoConfig {
        &self.config
    }

    /// The pool a document would be pseudonymized with.
    pub fn pool_for(&self, sentences: &[SentenceInput]) -> ReplacementPool {
        if !self.config.pool.shuffle {
            return ReplacementPool::ordered();
        }
        let seed = self
            .config
            .pool
            .seed
            .unwrap_or_else(|| content_seed(sentences));
        ReplacementPool::shuffled(seed)
    }

    /// Pseudonymize and tag one document.
    ///
    /// A document with no non-blank sentences is a no-op: `pseudo` is empty
    /// and `tagged` is `<text></text>`.
    pub fn process_document(&self, sentences: &[SentenceInput]) -> PseudoResult<DocumentOutput> {
        let mut pool = self.pool_for(sentences);
        self.process_document_with_pool(sentences, &mut pool)
    }

    /// Same as [`process_document`](Self::process_document) with a
    /// caller-supplied pool.
    pub fn process_document_with_pool(
        &self,
        sentences: &[SentenceInput],
        pool: &mut ReplacementPool,
    ) -> PseudoResult<DocumentOutput> {
        let started = Instant::now();
        let doc_id = Uuid::new_v4();
        let _span = pseudo_observability::document_span!(doc_id, sentences.len()).entered();

        let ctx = DocumentContext::build(sentences, &self.resolver, pool)?;
        if let Some(notice) = ctx.notice() {
            events::pool_wrapped(notice);
        }

        let escape = self.config.render.escape_markup;
        let rendered = ctx
            .records()
            .par_iter()
            .map(|r| {
                let _span = pseudo_observability::render_span!(r.index, r.record.spans.len()).entered();
                let pseudo = renderer::render_pseudo(r.index, &r.record, ctx.mapping())?;
                let tagged = renderer::tagged_fragment(r.index, &r.record, escape)?;
                Ok((pseudo, tagged))
            })
            .collect::<PseudoResult<Vec<(String, String)>>>()?;

        let separator = self.config.render.sentence_separator.as_str();
        let (pseudo_parts, tagged_parts): (Vec<String>, Vec<String>) = rendered.into_iter().unzip();
        let pseudo = pseudo_parts.join(separator);
        let tagged = renderer::assemble_tagged_document(&tagged_parts, separator);

        let mut summary = ctx.summary();
        summary.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        events::document_processed(
            ctx.sentence_count(),
            ctx.entity_count(),
            ctx.resolution().len(),
            summary.elapsed_ms,
        );

        Ok(DocumentOutput {
            doc_id,
            tagged,
            pseudo,
            summary,
            notice: ctx.notice().cloned(),
            canonical: ctx.canonical_map(),
        })
    }

    /// Process independent documents in parallel. Results keep input order.
    pub fn process_documents(&self, documents: &[Vec<SentenceInput>]) -> Vec<PseudoResult<DocumentOutput>> {
        documents
            .par_iter()
            .map(|sentences| self.process_document(sentences))
            .collect()
    }
}

impl Default for PseudoEngine {
    fn default() -> Self {
        Self::new(PseudoConfig::default())
    }
}
