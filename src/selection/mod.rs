//! Word selection and tag creation
//!
//! - `machine`: press / enter / release transitions over word references
//! - `commit`: turn the released span into a stored tag

mod commit;
mod machine;

pub use commit::{commit, CommitError, TopicChoice};
pub use machine::{
    begin, end, extend, Selection, SelectionMachine, SelectionState, WordRef, WordSpan,
};
