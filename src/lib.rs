//! # PolyKV - Command Translation for Multi-Backend Key-Value Clients
//!
//! PolyKV is the core of a database client that speaks to several key-value
//! stores. It knows how each backend names its key operations, turns
//! backend-agnostic requests into backend command text, and dispatches
//! console command lines through a table of named, arity-checked handlers.
//!
//! ## Features
//!
//! - **Many Backends**: Redis, Memcached, SSDB, LevelDB, RocksDB, UnQLite and
//!   LMDB, each behind its own Cargo feature
//! - **Typed Translation**: Redis containers map to their own verbs
//! - **Table Dispatch**: Case-insensitive lookup with `[min, max]` arity checks
//! - **Async Console**: A Tokio driven read-execute-print loop
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                               PolyKV                                    │
//! │                                                                         │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐                  │
//! │  │  Console    │───>│  Tokenizer  │───>│  Command    │                  │
//! │  │  Session    │    │             │    │  Handler    │                  │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘                  │
//! │                                               │                         │
//! │                                               ▼                         │
//! │  ┌─────────────┐    ┌──────────────────────────────────────────────┐    │
//! │  │  Backend    │───>│            CommandTranslator                 │    │
//! │  │  Traits     │    │  ┌────────┐ ┌─────────┐ ┌──────┐ ┌────────┐  │    │
//! │  │  Registry   │    │  │ Redis  │ │Memcached│ │ SSDB │ │Embedded│  │    │
//! │  └─────────────┘    │  └────────┘ └─────────┘ └──────┘ └────────┘  │    │
//! │                     └──────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use polykv::backend::ConnectionType;
//! use polykv::console::ConsoleSession;
//! use polykv::commands::Reply;
//!
//! let mut session = ConsoleSession::new(ConnectionType::Memcached).unwrap();
//! let replies = session.execute_line("set name Ariz");
//! assert_eq!(replies, vec![Reply::bulk("set name Ariz")]);
//! ```
//!
//! ## Module Overview
//!
//! - [`commands`]: Command metadata, table entries and the dispatcher
//! - [`translator`]: Per-backend command builders
//! - [`backend`]: Connection types and their capability tables
//! - [`types`]: Keys, values, databases and server snapshots
//! - [`console`]: Tokenizer and interactive session

pub mod backend;
pub mod commands;
pub mod console;
pub mod translator;
pub mod types;

// Re-export commonly used types for convenience
pub use backend::{lookup, BackendError, BackendTraits, ConnectionType};
pub use commands::{CommandError, CommandHandler, CommandHolder, CommandInfo, Reply};
pub use console::{run_session, ConsoleSession};
pub use translator::{translator_for, CommandTranslator, TranslatorError};

/// The backend the console opens when none is given
pub const DEFAULT_BACKEND: ConnectionType = ConnectionType::Redis;

/// Version of PolyKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
