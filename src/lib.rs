//! Deck list manager: a small collection of tagged, colored deck lists kept in one JSON document.

#![warn(
    unused_qualifications,
    single_use_lifetimes,
    trivial_casts,
    clippy::unnecessary_wraps,
    clippy::uninlined_format_args,
    clippy::semicolon_if_nothing_returned,
    clippy::doc_markdown,
    clippy::missing_panics_doc,
    clippy::explicit_iter_loop,
    clippy::redundant_closure_for_method_calls,
    clippy::cast_lossless,
    clippy::cloned_instead_of_copied
)]

pub mod application;
pub mod clipboard;
pub mod color;
pub mod deck;
pub mod filter;
pub mod paths;
mod serialization;
pub mod share;
pub mod store;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
