use async_trait::async_trait;

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send `prompt` in streaming mode and return the reply chunks concatenated
    /// in arrival order.
    async fn stream_text(&self, prompt: &str) -> anyhow::Result<String>;

    /// Model identifier reported by the health endpoint.
    fn model_name(&self) -> &str;
}
