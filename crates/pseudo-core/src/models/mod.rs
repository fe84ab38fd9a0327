mod category;
mod notice;
mod output_type;
mod sentence;
mod span;
mod stats;

pub use category::EntityCategory;
pub use notice::PoolExhaustionNotice;
pub use output_type::OutputType;
pub use sentence::{SentenceInput, SentenceRecord};
pub use span::{EntitySpan, RawSpan};
pub use stats::{DocSummary, RunningStats};
