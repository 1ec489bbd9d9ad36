//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the GPaulT page,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Full-page document and the `Home` composition root
//! - [`components`]: Reusable UI primitives (button, textarea, select)
//! - [`chat`]: Chat-specific leaf components

pub mod app;
pub mod chat;
pub mod components;
