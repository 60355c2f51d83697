//! Word data collaborators
//!
//! The assistant itself never touches the filesystem; these loaders turn plain text files
//! into the validated word list and frequency table a session is built from.

mod frequency;
pub mod loader;

pub use frequency::FrequencyTable;
