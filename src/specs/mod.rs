// src/specs/mod.rs
//! Page/endpoint-specific extraction.
//!
//! Each spec here covers one remote surface and nothing else:
//! - `collection` — the collection HTML page: which anchors are mod links,
//!   and how to pull the identifier out of one.
//! - `project` — the metadata API's two JSON bodies, and the pure
//!   derivation of a flat record from them.
//!
//! Specs parse; they do not decide when to fetch, pause, or retry — that
//! is the pipeline's job (`scrape`). Keeping the parse paths pure means
//! every one of them is testable offline against fixture strings.

pub mod collection;
pub mod project;
