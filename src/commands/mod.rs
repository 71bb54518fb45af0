//! Command Dispatch Module
//!
//! This module implements the console command layer: command metadata, the
//! table entries that bind metadata to handlers, and the dispatcher that
//! routes a tokenized command line to its handler.
//!
//! ## Architecture
//!
//! ```text
//! Tokenized input (argv)
//!       │
//!       ▼
//! ┌─────────────────┐
//! │ CommandHandler  │  (handler.rs)
//! │                 │
//! │  - Resolve name │
//! │  - Check arity  │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CommandHolder   │  (holder.rs)
//! │  CommandInfo +  │  (info.rs)
//! │  handler fn     │
//! └────────┬────────┘
//!          │
//!          ▼
//!     Vec<Reply>        (reply.rs)
//! ```

pub mod handler;
pub mod holder;
pub mod info;
pub mod reply;

pub use handler::{CommandError, CommandHandler};
pub use holder::{CommandFn, CommandHolder};
pub use info::{version, version_to_string, CommandInfo, UNDEFINED_SINCE, UNDEFINED_SINCE_STR};
pub use reply::Reply;
