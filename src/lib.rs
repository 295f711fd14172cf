//! QR Studio core library.
//!
//! This library turns user-supplied input (a URL, free text, or a contact
//! record) into a scannable QR image with visual customization, and
//! produces file and clipboard export artifacts. The pipeline: the
//! [`payload`] module encodes form state into one canonical string, the
//! [`render`] module paints it through a primary renderer with a tiered
//! remote fallback chain (compositing a center logo on the primary path),
//! and the [`export`] module writes PNG files and clipboard entries with
//! deterministic naming. A [`session::Session`] ties the pieces together
//! for a view layer.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod labels;
pub mod models;
pub mod payload;
pub mod render;
pub mod session;

pub use session::Session;
