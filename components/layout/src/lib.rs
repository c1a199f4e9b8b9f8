#![no_std]
//! Batch helpers on top of the `waterui-anchor` constraint DSL.
//!
//! This crate contains the combinators that produce or edit several
//! constraints at once:
//!
//! - [`EdgeInsets`], the inward distances used when pinning,
//! - [`pin_edges()`] and [`pin_margins()`], which pin a region to its parent,
//! - [`without()`], which drops one pinned edge so it can be overridden.
//!
//! # Example
//!
//! ```rust,ignore
//! use waterui_anchor_layout::{EdgeInsets, pin_edges, without};
//!
//! // Pin to every edge except the top, which follows the header instead.
//! let mut constraints = without(pin_edges(&content, EdgeInsets::all(8.0))?, &content.top());
//! constraints.push(content.top().equal_to(header.bottom() + 8.0));
//! ```

extern crate alloc;

pub use waterui_anchor_core::*;

pub mod insets;
pub mod pin;
pub mod remove;

pub use insets::EdgeInsets;
pub use pin::{fill, fill_margins, pin_edges, pin_margins};
pub use remove::without;
