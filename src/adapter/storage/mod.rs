//! Storage Backends
//!
//! コレクションのバイト列を保存先へ読み書きする層

pub mod backend;
pub mod file_backend;

pub use backend::StorageBackend;
pub use file_backend::FileBackend;
