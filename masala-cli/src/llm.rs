use anyhow::{anyhow, Result};
use async_openai::{
    config::OpenAIConfig, types::ChatCompletionRequestMessage,
    types::ChatCompletionRequestUserMessage, types::CreateChatCompletionRequestArgs,
};

/// One-shot chat client for a locally hosted model.
///
/// Ollama's OpenAI-compatible endpoint ignores the API key, but the client
/// requires one, so `OLLAMA_API_KEY` is read from the environment with a
/// placeholder fallback.
pub struct RecipeModel {
    client: async_openai::Client<OpenAIConfig>,
    model: String,
}

impl RecipeModel {
    pub fn new(api_base: &str, model: &str) -> Self {
        let api_key = dotenvy::var("OLLAMA_API_KEY").unwrap_or_else(|_| "ollama".to_string());
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(api_key);
        Self {
            client: async_openai::Client::with_config(config),
            model: model.to_string(),
        }
    }

    /// Fill the recipe prompt template with the user's ingredient list.
    pub fn recipe_prompt(ingredients: &str) -> String {
        let prompt_template = include_str!("prompts/recipe.md");
        prompt_template.replace("{ingredients}", ingredients)
    }

    /// Sends one user-role message and returns the reply text.
    ///
    /// A transport failure or an empty reply is fatal for the invocation;
    /// there is no retry here.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Prompt: {}", prompt);
        let req_args = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: prompt.into(),
                    name: None,
                },
            )])
            .build()?;
        let text = self
            .client
            .chat()
            .create(req_args)
            .await?
            .choices
            .first()
            .ok_or(anyhow!("No response from LLM"))?
            .clone()
            .message
            .content
            .ok_or(anyhow!("No response from LLM"))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_splices_the_ingredient_list() {
        let prompt = RecipeModel::recipe_prompt("paneer, spinach, and onion");
        assert!(prompt.contains("ingredients: paneer, spinach, and onion."));
        assert!(!prompt.contains("{ingredients}"));
        // The format contract the aggregator depends on.
        assert!(prompt.contains("[JSON-START]"));
        assert!(prompt.contains("[JSON-END]"));
        assert!(prompt.contains("\"ingredient_name\""));
        assert!(prompt.contains("\"quantity_grams\""));
    }
}
