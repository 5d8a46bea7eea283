//! Callscribe Domain Layer
//!
//! Core types for the call-transcript extraction engine. This crate defines
//! the value objects shared by every other layer: extracted events, the
//! aggregate extraction result, industry tags, and confidence arithmetic.
//!
//! ## Key Concepts
//!
//! - **ExtractedEvent**: one candidate calendar event pulled from a call,
//!   with a confidence score in [0, 1]
//! - **ExtractionResult**: the ordered set of events for a single call plus
//!   call-level summary fields
//! - **Industry**: closed set of supported business verticals; unrecognized
//!   tags fall back to universal handling rather than failing
//! - **Urgency**: four-level priority driving scheduling and review policy
//!
//! The event and result types double as the serialized output contract, so
//! they carry serde derives. Everything here is pure data; providers,
//! prompts, and rules live in the other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod context;
pub mod event;
pub mod industry;
pub mod result;
pub mod urgency;

// Re-exports for convenience
pub use context::{CallerInfo, ExtractionContext};
pub use event::{EventId, EventType, ExtractedEvent};
pub use industry::Industry;
pub use result::ExtractionResult;
pub use urgency::Urgency;
