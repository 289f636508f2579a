//! # dexkeys-store
//!
//! The sorted, byte-keyed store the key layout is designed against.
//!
//! - [`KvStore`]: get / set / delete / ordered prefix iteration
//! - [`MemKvStore`]: `BTreeMap` backend (committed state in tests and tools)
//! - [`PrefixStore`]: a view scoped to one key prefix
//! - [`TransientStore`]: the `mem_dex` namespace, cleared per processing unit
//! - [`prefix_end_bytes`]: upper bound of a prefix range

pub mod kv;
pub mod memory;
pub mod prefix;
pub mod transient;

pub use kv::{KvIter, KvStore, prefix_end_bytes};
pub use memory::MemKvStore;
pub use prefix::PrefixStore;
pub use transient::TransientStore;
