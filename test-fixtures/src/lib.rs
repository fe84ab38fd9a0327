//! Test fixture loader for golden documents, plus a dictionary tagger that
//! stands in for the external recognizer in tests.

use std::path::PathBuf;

use pseudo_core::errors::{PseudoError, PseudoResult};
use pseudo_core::models::{EntityCategory, RawSpan, SentenceInput};
use pseudo_core::traits::IEntityTagger;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A golden document: recognizer output in, both renderings out.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenDocument {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Tokens consumed in order instead of the shuffled standard pool.
    pub pool_tokens: Vec<String>,
    #[serde(default)]
    pub fuzzy_threshold: Option<usize>,
    pub sentences: Vec<SentenceInput>,
    pub expected: GoldenExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpected {
    pub pseudo: String,
    pub tagged: String,
    #[serde(default)]
    pub pool_wrapped: bool,
}

/// Load every golden document under `golden/documents`.
pub fn load_golden_documents() -> Vec<GoldenDocument> {
    list_fixtures("golden/documents")
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}

/// Dictionary tagger: reports every occurrence of a known surface string.
///
/// Longer entries win over shorter ones they overlap; offsets are in chars,
/// as a real recognizer reports them.
#[derive(Debug, Clone, Default)]
pub struct GazetteerTagger {
    entries: Vec<(String, EntityCategory)>,
}

impl GazetteerTagger {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, EntityCategory)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, EntityCategory)> =
            entries.into_iter().map(|(s, c)| (s.into(), c)).collect();
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Self { entries }
    }
}

impl IEntityTagger for GazetteerTagger {
    fn tag(&self, sentence: &str) -> PseudoResult<Vec<RawSpan>> {
        let mut taken: Vec<(usize, usize)> = Vec::new();
        let mut spans = Vec::new();
        for (surface, category) in &self.entries {
            if surface.is_empty() {
                continue;
            }
            for (byte_start, _) in sentence.match_indices(surface.as_str()) {
                let byte_end = byte_start + surface.len();
                if taken.iter().any(|&(s, e)| byte_start < e && byte_end > s) {
                    continue;
                }
                taken.push((byte_start, byte_end));
                let start = sentence[..byte_start].chars().count();
                let end = start + surface.chars().count();
                spans.push(RawSpan::new(start, end, *category, surface.clone()));
            }
        }
        spans.sort_by_key(|s| s.start);
        Ok(spans)
    }
}

/// Tagger that always fails, for error-path tests.
#[derive(Debug, Clone, Default)]
pub struct FailingTagger;

impl IEntityTagger for FailingTagger {
    fn tag(&self, _sentence: &str) -> PseudoResult<Vec<RawSpan>> {
        Err(PseudoError::Tagger {
            sentence: 0,
            reason: "model not loaded".into(),
        })
    }
}
