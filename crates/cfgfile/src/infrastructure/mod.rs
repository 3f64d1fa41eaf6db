//! Infrastructure layer: where configuration documents physically live.
//!
//! - **`storage`** – The [`storage::ConfigStorage`] trait plus a file-system
//!   implementation and an in-memory one for tests and embedding.

pub mod storage;
