//! In-memory storage for live OTP records.

mod code_store;

pub use code_store::{CodeStore, DEFAULT_SHARD_COUNT};
