//! Proposal composition.
//!
//! Turns a `ProposalData` snapshot into priced category sections, a
//! consolidated price summary and a printable HTML document. Everything here
//! is synchronous and works on an immutable snapshot.

pub mod aggregate;
pub mod composer;
pub mod models;
pub mod pages;
pub mod render;
pub mod summary;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use composer::{compose, plan_sections, ProposalDocument, Section, SectionKind};
pub use models::ProposalData;
pub use render::render_html;
pub use summary::{summarize, ProposalSummary};
pub use validate::validate_proposal;
