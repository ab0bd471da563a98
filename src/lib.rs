//! Client UI for a post summarization backend: search a topic, read the
//! summary and its top posts, then ask follow-up questions about it.

// Interdiction stricte de pratiques dangereuses ou non idiomatiques
#![deny(unsafe_code)] // Le code unsafe est interdit
#![deny(missing_docs)] // Toute fonction, struct, enum ou module public doit être documenté
#![deny(unused_must_use)] // Oblige à gérer explicitement les Result et Option
#![deny(nonstandard_style)] // Empêche tout style de code non standard

// Clippy pour stricte discipline
#![deny(clippy::all)] // Active toutes les lints Clippy standard
#![deny(clippy::unwrap_used)] // Interdit unwrap()
#![deny(clippy::expect_used)] // Interdit expect()
#![deny(clippy::panic)] // Interdit panic!()
#![deny(clippy::print_stdout)] // Interdit println!() en production
#![deny(clippy::todo)] // Interdit les TODO dans le code
#![deny(clippy::redundant_clone)] // Interdit les clones inutiles
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

/// Backend client: wire types, errors and the HTTP implementation.
pub mod api;
/// Runtime configuration loaded from the environment.
pub mod config;
/// Posts and chat turns shown on the pages.
pub mod model;
/// HTML rendering of pages and sections.
pub mod render;
/// HTTP server and page routes.
pub mod server;
/// Entry helpers to start the trendlens server.
pub mod start_trendlens;
/// Per-page view state and request flow.
pub mod views;

#[cfg(test)]
mod testing;
