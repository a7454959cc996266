//! Application state shared by all handlers.

use std::sync::Arc;

use crate::{
    cli::types::TeamIndex,
    completion::{CompletionProvider, OpenAiClient},
    config::Config,
    espn::{http::EspnClient, LeagueProvider},
    prompt::ChatContextMode,
    templates::{FileTemplates, TemplateRenderer},
    Result,
};

/// Immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub team_index: TeamIndex,
    pub chat_context: ChatContextMode,
    pub league: Arc<dyn LeagueProvider>,
    pub completion: Arc<dyn CompletionProvider>,
    pub templates: Arc<dyn TemplateRenderer>,
}

impl AppState {
    pub fn new(
        team_index: TeamIndex,
        chat_context: ChatContextMode,
        league: Arc<dyn LeagueProvider>,
        completion: Arc<dyn CompletionProvider>,
        templates: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            team_index,
            chat_context,
            league,
            completion,
            templates,
        }
    }

    /// Wire the ESPN, completion and template providers from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let league = EspnClient::with_base_url(
            &config.league.espn_base_url,
            config.league.league_id,
            config.league.season,
            config.league.credentials.as_ref(),
        )?;
        let completion = OpenAiClient::new(&config.completion)?;
        let templates = FileTemplates::new(&config.server.template_dir);

        Ok(Self::new(
            config.league.team_index,
            config.server.chat_context,
            Arc::new(league),
            Arc::new(completion),
            Arc::new(templates),
        ))
    }
}
