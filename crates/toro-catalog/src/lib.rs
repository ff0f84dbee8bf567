//! # toro-catalog
//!
//! Single source of truth for the tools listed on the ToroGold-Ai site.
//!
//! The catalog page and the per-tool detail page both read from the one
//! ordered table in [`catalog`]: the home page iterates it to render cards,
//! and the detail page resolves its route parameter against it. Keeping one
//! table means a card's link can never point at an identifier the detail
//! page resolves differently.

pub mod catalog;

pub use catalog::{DEFAULT_TOOL_NAME, ToolEntry, display_name, tool_name, tools};
