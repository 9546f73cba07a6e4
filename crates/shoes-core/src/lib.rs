//! Core domain logic for the ShoesTracker bot.
//!
//! Reconciles reports of removed braking shoes against the fixed shelf
//! catalog. This crate is framework-agnostic; the Telegram front end lives in
//! `shoes-telegram`.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod normalize;
pub mod ranges;
pub mod reconcile;

pub use catalog::Catalog;
pub use errors::{Error, Result};
pub use reconcile::{reconcile, Reconciliation, ShelfRemainder};
