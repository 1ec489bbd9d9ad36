//! GPaulT — Axum + Leptos chat UI shell
//!
//! A single-page chat interface for the GPaulT model: a message transcript,
//! a chat input box, and a model selector, rendered server-side and served
//! as static HTML with local assets only.
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`server`]: Axum router and HTTP entry point
//! - [`ui`]: Leptos SSR page and components

#![allow(clippy::unused_async)]

pub mod config;
pub mod server;
pub mod ui;
