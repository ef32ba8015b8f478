pub mod prompts;
pub mod variants;
