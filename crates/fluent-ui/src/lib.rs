//! # fluent-ui
//!
//! Graphics backend agnostic core for Fluent Design components.
//!
//! This crate provides the node tree, layout, theming and animation
//! primitives that components build on. Rendering the collected shapes
//! (including backdrop blur for materials) is left to a backend.
//!
//! ## Core Types
//!
//! - [`Node`] - The fundamental building block of the UI tree
//! - [`UiContext`] - Central coordinator for the UI system
//! - [`Component`] - Trait for reusable UI widgets
//!
//! ## Input & State
//!
//! - [`InputState`] - Tracks mouse and keyboard input
//! - [`WidgetMemory`] - Stores state that outlives a frame
//!
//! ## Theming & Motion
//!
//! - [`FluentTheme`] - Colors, corner shapes and material switches
//! - [`MaterialSpec`] - Opaque, Acrylic and Mica backgrounds
//! - [`AnimatedValue`] - Retargetable eased values driving transitions
//! - [`ContentMeasurer`] - Trait for text measurement

mod color;
mod component;
mod content;
mod context;
mod error;
mod input;
mod layout;
mod material;
mod measure;
mod memory;
mod node;
mod primitives;
mod theme;
pub mod transition;

// Core types
pub use color::*;
pub use component::*;
pub use content::*;
pub use context::*;
pub use error::*;
pub use layout::*;
pub use measure::*;
pub use node::*;
pub use primitives::*;
pub use transition::*;

// Theming
pub use material::*;
pub use theme::*;

// Input & State
pub use input::*;
pub use memory::*;
