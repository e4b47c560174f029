//! bangbang - Kanban Board Library
//!
//! This library provides the core functionality for the bangbang CLI tool:
//! a single kanban board persisted as YAML front matter in a plain-text
//! file, mutated through whole-file load-validate-mutate-save cycles.
//!
//! # Core Concepts
//!
//! - **Board file**: `.bangbang.md`, a text file whose front matter holds
//!   the board title, optional rules, and columns with nested cards
//! - **Store**: owns the file path, bootstraps the default board, and
//!   performs locked atomic rewrites
//! - **Engine**: the validated mutation operations, the sole way board
//!   state changes
//!
//! # Module Organization
//!
//! - `board`: entity shapes (Board, Column, Task, Comment)
//! - `frontmatter`: delimited-block codec between file text and the board
//! - `store`: file-backed board store with default bootstrap
//! - `engine`: load-validate-mutate-save operations
//! - `ident`: ULID card/comment ids and column slugs
//! - `lock`: file locking and atomic writes for concurrency safety
//! - `error`: error types and result aliases
//! - `cli`: command-line interface using clap
//! - `output`: shared CLI output formatting

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod frontmatter;
pub mod ident;
pub mod lock;
pub mod output;
pub mod store;

pub use error::{Error, Result};
