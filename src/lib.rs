//! registro-tui: a terminal CRUD client for the school registry REST API.
//!
//! Two record kinds (Escuela, Estudiante), each with a create/edit form and
//! a list table, backed by four REST endpoints per kind. The UI is a
//! fullscreen terminal application: widgets draw into a cell frame buffer,
//! a differential renderer emits only the changed cells, and flexbox layout
//! carves the screen into panels.
//!
//! Layering, bottom up:
//! - [`types`], [`theme`]: cells, colors, rects, semantic palette
//! - [`renderer`], [`layout`]: frame buffer, ANSI diff output, screen regions
//! - [`state`]: keyboard/mouse event conversion and focus traversal
//! - [`model`], [`api`]: record types, field descriptors, REST client
//! - [`controller`]: per-entity list state and mutation orchestration
//! - [`ui`], [`app`]: generic form/table widgets and the application shell

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
