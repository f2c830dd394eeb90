pub mod bank_writer;
pub mod llm_service;
pub mod warn_writer;

pub use bank_writer::BankWriter;
pub use llm_service::{GeneratedDraft, LlmService};
pub use warn_writer::WarnWriter;
