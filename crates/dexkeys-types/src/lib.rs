//! # dexkeys-types
//!
//! Shared types, errors, and configuration for the **dexkeys** key space.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`SettlementId`], [`TradingPair`]
//! - **Side selector**: [`Side`]
//! - **Configuration**: [`AddressConfig`]
//! - **Errors**: [`DexKeyError`] with `DK_ERR_` prefix codes
//! - **Constants**: layout widths, module store keys, defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod side;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use side::*;

// Constants are accessed via `dexkeys_types::constants::FOO`
// (not re-exported to avoid name collisions).
