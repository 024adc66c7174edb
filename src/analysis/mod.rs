//! Analysis and report assembly modules
//!
//! Combines all estimator outputs into the final report:
//! - Frame analyzer (decode, estimate, assemble)
//! - Report types

pub mod analyzer;
pub mod result;
