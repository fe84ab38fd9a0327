//! Text pipeline: split → tag → process → record statistics.
//!
//! Splitting is the line split the service has always used: one sentence per
//! non-blank line, trimmed. Everything finer belongs to the tagger.

use std::sync::Arc;
use std::time::Instant;

use pseudo_core::errors::{PseudoError, PseudoResult};
use pseudo_core::models::{DocSummary, OutputType, PoolExhaustionNotice, SentenceInput};
use pseudo_core::traits::IEntityTagger;
use pseudo_observability::StatsRecorder;
use rayon::prelude::*;
use serde::Serialize;

use crate::conll::render_conll;
use crate::engine::PseudoEngine;

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub output_type: OutputType,
    pub pseudo: String,
    pub tagged: String,
    /// Only rendered when CoNLL output was requested.
    pub conll: Option<String>,
    pub summary: DocSummary,
    pub notice: Option<PoolExhaustionNotice>,
}

impl PipelineOutput {
    /// The rendering that was asked for.
    pub fn primary(&self) -> &str {
        match self.output_type {
            OutputType::Pseudonymized => &self.pseudo,
            OutputType::Tagged => &self.tagged,
            OutputType::Conll => self.conll.as_deref().unwrap_or_default(),
        }
    }
}

/// Engine plus tagger plus shared statistics.
pub struct Pipeline {
    engine: PseudoEngine,
    tagger: Arc<dyn IEntityTagger>,
    recorder: Arc<StatsRecorder>,
}

impl Pipeline {
    pub fn new(engine: PseudoEngine, tagger: Arc<dyn IEntityTagger>, recorder: Arc<StatsRecorder>) -> Self {
        Self {
            engine,
            tagger,
            recorder,
        }
    }

    pub fn engine(&self) -> &PseudoEngine {
        &self.engine
    }

    pub fn recorder(&self) -> &Arc<StatsRecorder> {
        &self.recorder
    }

    /// Tag the non-blank lines of `text`.
    pub fn tag_text(&self, text: &str) -> PseudoResult<Vec<SentenceInput>> {
        split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(i, sentence)| {
                let spans = self.tagger.tag(sentence).map_err(|e| match e {
                    PseudoError::Tagger { .. } => e,
                    other => PseudoError::Tagger {
                        sentence: i,
                        reason: other.to_string(),
                    },
                })?;
                Ok(SentenceInput::new(sentence, spans))
            })
            .collect()
    }

    /// Run one text end to end and fold its figures into the statistics.
    ///
    /// Statistics failures are logged and discarded; only tagging and span
    /// errors fail the call.
    pub fn run(&self, text: &str, output_type: OutputType) -> PseudoResult<PipelineOutput> {
        let started = Instant::now();
        let _span = pseudo_observability::pipeline_span!(output_type).entered();

        let sentences = self.tag_text(text)?;
        let output = self.engine.process_document(&sentences)?;
        let conll = match output_type {
            OutputType::Conll => Some(render_conll(&sentences)?),
            _ => None,
        };

        let mut summary = output.summary;
        summary.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.recorder.record(&summary, output_type);

        Ok(PipelineOutput {
            output_type,
            pseudo: output.pseudo,
            tagged: output.tagged,
            conll,
            summary,
            notice: output.notice,
        })
    }

    /// Run several texts in parallel. Results keep input order.
    pub fn run_batch(&self, texts: &[&str], output_type: OutputType) -> Vec<PseudoResult<PipelineOutput>> {
        texts
            .par_iter()
            .map(|text| self.run(text, output_type))
            .collect()
    }
}

/// One sentence per non-blank line, trimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
