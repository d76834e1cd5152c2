//! LLM prompt construction

pub mod prompt_builder;
