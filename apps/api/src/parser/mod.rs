//! Resume extraction pipeline: uploaded PDF bytes → validated `ParsedResumeData`.
//!
//! Stages: embedded-link scan (`links`) and text extraction (`text`) over the
//! raw document, heuristic social-link resolution (`social`), LLM structuring
//! (`structuring`), then normalization into the canonical record
//! (`normalize`). `pipeline` sequences them; `handlers` is the HTTP boundary.

pub mod error;
pub mod handlers;
pub mod links;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod social;
pub mod structuring;
pub mod text;

#[cfg(test)]
pub(crate) mod fixtures;
