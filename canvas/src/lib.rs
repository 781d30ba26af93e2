//! Hex grid engine for the cube-coordinate canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser; it also
//! builds natively so the host binary and the tests can drive it without a
//! drawing surface. It owns the whole interaction loop: resolving pointer
//! positions to cells, the selection and shape-building state machine,
//! zoom quantization, and deriving the scene to paint. The host layer wires
//! DOM events to the engine, paints on [`engine::Action::RenderNeeded`], and
//! forwards queued shape events to the persistence backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`hex`] | Cube coordinates, projection, corners, distance |
//! | [`grid`] | Ordered enumeration of cells within a radius |
//! | [`viewport`] | Viewport dimensions and cell-size fitting |
//! | [`zoom`] | Display radius and ring quantization |
//! | [`session`] | Selection, committed shapes, shape-building state machine |
//! | [`color`] | Random highlight colors |
//! | [`input`] | Gestures, shape kinds, modes, radius parsing |
//! | [`hit`] | Pointer position to cell |
//! | [`outbox`] | Outbound shape notifications and backend paths |
//! | [`render`] | Scene derivation and Canvas2D painting |
//! | [`consts`] | Shared numeric constants (zoom rings, tints, fit factors) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod grid;
pub mod hex;
pub mod hit;
pub mod input;
pub mod outbox;
pub mod render;
pub mod session;
pub mod viewport;
pub mod zoom;
