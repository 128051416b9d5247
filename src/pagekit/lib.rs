//! # PageKit Architecture
//!
//! PageKit is a **UI-agnostic page-management library** for scaffolded web
//! sites, with a CLI client in front of it. A page is three artifacts kept
//! in sync inside one target project: a handler function in the handler
//! registry, a template file, and a route entry in the route registry. The
//! filesystem is the database; the page set is recovered by scanning the
//! template directory, never cached.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs, args.rs)   argument parsing, interactive menu,
//!                          terminal output; the only place that knows
//!                          about stdout/stderr/exit codes
//! API (api.rs)             thin facade: normalizes input, dispatches,
//!                          re-renders navigation after mutations
//! Commands (commands/)     business logic per operation, structured
//!                          CmdResult out, no I/O assumptions
//! Core (page, selector,    pure functions: id normalization, selector
//!       textedit, nav)     parsing, line editing, nav rendering
//! Storage (store/)         FileSystem trait; DiskStore in production,
//!                          InMemoryStore in tests
//! ```
//!
//! ## Invariants worth knowing
//!
//! - Every artifact name is a pure function of the page id ([`page`]).
//! - Every mutation is check-then-act and individually skippable, so
//!   re-running a batch over existing state is a reported no-op. There is
//!   no rollback: multi-artifact operations apply independently per
//!   artifact and report each outcome separately.
//! - The nav block between the two marker lines is fully owned by the
//!   renderer; everything outside is preserved verbatim ([`nav`]).
//! - Protected pages (`home`, `nav`, `footer`, `sidebar`) are never
//!   listed, deleted, or renamed.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`store`]: storage abstraction and implementations
//! - [`page`]: page ids and the names derived from them
//! - [`selector`]: name/index/range selection tokens
//! - [`textedit`]: line-oriented registry editing primitives
//! - [`nav`]: navigation rendering and the marker-region update
//! - [`stubs`]: literal text of the generated artifacts
//! - [`config`]: per-site configuration
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod nav;
pub mod page;
pub mod selector;
pub mod store;
pub mod stubs;
pub mod textedit;
