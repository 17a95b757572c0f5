//! pressdoc-export
//!
//! Press document formatting, DOCX rendering and PDF conversion.

pub mod advisory;
pub mod blocks;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod run_of_show;
pub mod styles;
