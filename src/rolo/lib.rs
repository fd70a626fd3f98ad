//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact and note management library**. The
//! interactive shell in `main.rs` is one client of it, not the other way
//! around.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Reads commands, formats output, handles terminal I/O     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the in-memory books, saves after every mutation     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Expected conditions (duplicate phone, contact not found, empty search
//! term) are outcomes carried in `CmdResult` messages, not errors. Errors are
//! reserved for invalid field values and storage failures.
//!
//! ## Testing Strategy
//!
//! 1. **Fields and books** (`fields.rs`, `record.rs`, `book.rs`, `notes.rs`):
//!    unit tests of validation, normalization, and collection behavior.
//!    This is where the lion's share of testing lives.
//!
//! 2. **Commands** (`commands/*.rs`): unit tests of the outcome messages
//!    each operation produces.
//!
//! 3. **API** (`api.rs`): tests against `InMemoryStore` verifying that
//!    mutations persist and display operations do not.
//!
//! 4. **Storage + CLI** (`tests/`): `FileStore` round-trips on temp dirs and
//!    end-to-end shell sessions driven through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`fields`]: Validated field types (`Name`, `Phone`, `BirthDay`, ...)
//! - [`record`]: A single contact and its operations
//! - [`book`]: The address book collection, search, and pagination
//! - [`notes`]: Notes, tags, and the note book collection
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod notes;
pub mod record;
pub mod store;
