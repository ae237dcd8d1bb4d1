//! Pixelpad - sprite grid engine for a two-state pixel editor
//!
//! This library provides:
//! - A grid of lit/unlit cells with line-preview states
//! - Pixel and line tools driven by abstract pointer events
//! - Rotate, invert and resize transforms
//! - JSON sprite records for export, duplicate and import
//! - PNG and terminal rendering, a CLI, and optional browser bindings

pub mod cell;
pub mod cli;
pub mod color;
pub mod config;
pub mod controller;
pub mod editor;
pub mod emoji;
pub mod grid;
pub mod naming;
pub mod output;
pub mod record;
pub mod renderer;
pub mod shapes;
pub mod widget;

#[cfg(feature = "wasm")]
pub mod wasm;
