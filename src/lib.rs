//! # gilt-toolkit
//!
//! A retained element tree for CSS-styled terminal user interfaces.
//!
//! Applications describe their screen as a tree of [`Element`]s: containers
//! such as [`Stack`] and [`Panel`], leaves such as [`Text`] and wrapped
//! [`Widget`]s, and [`Lazy`] nodes that rebuild a subtree from application
//! state on every frame. Each frame renders the whole tree into a buffer,
//! resolving every element's style from an explicit override, the
//! stylesheet cascade, or a default, and records where each element landed
//! so that keyboard and mouse events can be routed back to it.
//!
//! ## Core Systems
//!
//! - **[`element`]**: the `Element` contract, containers, `Lazy`, the render context and registry
//! - **[`style`]**: style values, CSS property converters and the style resolver
//! - **[`css`]**: tokenizer, parser, specificity and the compiled cascade
//! - **[`layout`]**: constraints and the taffy-backed splitter
//! - **[`render`]**: frame, buffer diffing and the crossterm driver
//! - **[`event`]**: input events, handlers, focus and routing
//! - **[`app`]**: the application loop
//! - **[`testing`]**: headless pilot and snapshot helpers
//!
//! ## Example
//!
//! ```
//! use gilt_toolkit::element::dsl::*;
//! use gilt_toolkit::testing::render_element_to_string;
//!
//! let mut tree = column([boxed(text("Title")), boxed(panel(text("body")))]).spacing(1);
//! let out = render_element_to_string(&mut tree, 8, 5).unwrap();
//! assert!(out.starts_with("Title"));
//! assert!(out.contains("┌──────┐"));
//! ```

// Foundation
pub mod error;
pub mod geometry;

// Styling and layout
pub mod css;
pub mod layout;
pub mod style;

// Drawing
pub mod render;
pub mod widget;
pub mod widgets;

// Tree and events
pub mod element;
pub mod event;

// Application
pub mod app;
pub mod testing;

pub use app::{App, AppConfig};
pub use element::{Element, Lazy, Panel, Stack, Styled, Text};
pub use error::{Result, ToolkitError};
pub use widget::Widget;
