//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod json_collection_store;

pub use json_collection_store::JsonCollectionStore;
