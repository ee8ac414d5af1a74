//! # Enrichment Core
//!
//! The reusable logic behind the world enrichment review UI. The panels that
//! queue, inspect and accept generated content call into this crate; queues,
//! persistence and network calls stay outside it.
//!
//! ## Core Components
//!
//! - **style_resolver**: Turns a user's style selection into concrete style records
//! - **margin_notes**: Splices historian margin notes into prose at their anchor phrases
//! - **image_prompt**: Renders a resolved style as an image-prompt section
//!
//! Both core routines are pure and never fail: missing references degrade to
//! a random pick, `None`, or an unmatched note.

pub mod image_prompt;
pub mod margin_notes;
pub mod style_resolver;

pub use image_prompt::*;
pub use margin_notes::*;
pub use style_resolver::*;
