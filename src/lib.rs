//! # deckprint – HTML slide deck → PDF
//!
//! Turns a presentation made of standalone HTML slide fragments into one
//! print-ready HTML document and exports it to PDF through a headless
//! browser. The pipeline stages are:
//!
//! 1. **Locate** – find `slides/<name>.html` and `slides/<name>/` ([`pipeline`])
//! 2. **Order** – read the `categorySlides` declaration ([`metadata`])
//! 3. **Collect** – load each referenced fragment, skipping missing ones ([`collect`])
//! 4. **Assemble** – wrap fragments in the print document ([`document`])
//! 5. **Render** – print the document to PDF via Chrome ([`render`])
//!
//! Rendering options come from [`config`]; browser discovery lives in
//! [`browser`].

pub mod browser;
pub mod collect;
pub mod config;
pub mod document;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod render;
pub mod templates;

// Re-exports for convenience
pub use config::{load_config, Config};
pub use error::GenerateError;
pub use pipeline::{assemble, run, Outcome, Presentation, Request};
