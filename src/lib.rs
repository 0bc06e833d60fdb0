//! Domain-agnostic multi-criteria decision engine.
//!
//! Implements the SMART method (Simple Multi-Attribute Rating Technique):
//! given weighted benefit/cost criteria and candidates with raw scores,
//! compute a utility in `[0, 1]` per candidate and a dense ranking.
//!
//! - [`smart`]: weight normalization, min-max scaling, weighted
//!   aggregation, and deterministic ranking.
//! - [`calculate`]: one-call entry point with the default configuration.
//!
//! # Architecture
//!
//! The engine is a pure function of its explicit inputs. Loading criteria
//! and scores, persisting results, authentication, and presentation are the
//! caller's concern; this crate holds no state between calls.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on all data types
//! - `parallel`: rayon-backed aggregation (see [`smart::SmartConfig::parallel`])
//! - `wasm`: a `wasm-bindgen` entry point taking and returning JS values

pub mod error;
pub mod smart;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigError, InvalidInputError, SmartError, SmartResult};
pub use smart::calculate;
