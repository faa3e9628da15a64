pub mod geocoding;
pub mod llm;
