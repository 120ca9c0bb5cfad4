//! Repository Implementations
//!
//! JSON persistence for the manifest and lock, plus dictionary loading.

mod dictionary;
mod index;
mod index_lock;

pub use dictionary::load_dictionaries;
pub use index::JsonIndexRepository;
pub use index_lock::JsonIndexLockRepository;
