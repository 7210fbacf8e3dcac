//! Topic aggregation for a chapter view
//!
//! - `index`: topic to verse / topic to tag mappings, rebuilt per chapter
//! - `visibility`: filter topics by the verses currently on screen

mod index;
mod visibility;

pub use index::{build, TopicIndex};
pub use visibility::project;
