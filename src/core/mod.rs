pub mod counter;
pub mod engine;
pub mod report;
pub mod tokenizer;
pub mod types;
