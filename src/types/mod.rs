//! Backend-agnostic Data Model
//!
//! Keys, typed values, database metadata and server status descriptions that
//! the translators and the surrounding client share.
//!
//! ## Overview
//!
//! ```text
//! NDbKValue ──> NKey ──> Key (opaque bytes)
//!     │           └────> KeyInfo (ttl)
//!     └───────> Value (typed)
//!
//! DataBaseInfo ──> [NDbKValue]   (refreshed in place)
//! ServerInfoSnapshot ──> dyn ServerInfo
//! ```

pub mod database;
pub mod field;
pub mod key;
pub mod server;
pub mod value;

pub use database::DataBaseInfo;
pub use field::Field;
pub use key::{Key, KeyInfo, NDbKValue, NKey, Ttl, EXPIRED_TTL, NO_TTL};
pub use server::{HostAndPort, ServerDiscoveryInfo, ServerInfo, ServerInfoSnapshot, ServerType};
pub use value::{Value, ValueType};
