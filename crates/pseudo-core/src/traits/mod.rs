mod tagger;

pub use tagger::IEntityTagger;
