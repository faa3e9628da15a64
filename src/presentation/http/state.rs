use crate::{
    application::generate_map::use_case::GenerateMapUseCase, config::Config,
    infrastructure::llm::traits::LanguageModel,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub model: Arc<dyn LanguageModel>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn LanguageModel>) -> Self {
        Self { config, model }
    }

    pub fn generate_map_use_case(&self) -> GenerateMapUseCase {
        GenerateMapUseCase::new(self.model.clone(), self.config.upstream_timeout())
    }
}
