// src/specs/mod.rs
//! # Catalog page specs
//!
//! Each spec knows where the ground truth lives on one kind of catalog page
//! and how to pull it out. Specs are pure: they take a page body and return
//! the extracted value or a short reason why the page didn't have the
//! expected shape.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), URL building and set lookups (`lookup`).
//! - Turning results into card updates (`resolve`).
//!
//! ## Current specs
//! - `promo` – a single promo card page; the pack category sits in the
//!   `card-prints-current` block.
//! - `set_page` – a set listing page; its `<title>` names the set.
//!
//! Specs are tested offline against small HTML fixtures in `tests/`.
pub mod promo;
pub mod set_page;

/// Why a page didn't yield a value.
pub type Mismatch = &'static str;
