//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the application
//! pages, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Full-document page components
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat-specific layout components

pub mod app;
pub mod chat;
pub mod components;
