//! Reference genome metadata: the contig dictionary and name resolution.

pub mod dict;
pub mod names;

pub use dict::{Contig, ContigDictionary, DictionaryError};
pub use names::ContigNameResolver;
