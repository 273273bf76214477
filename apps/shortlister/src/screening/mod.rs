//! Screening: prompt construction, reply parsing and filing of the shortlist.

pub mod filer;
pub mod prompt_builder;
pub mod prompts;
pub mod response_parser;
