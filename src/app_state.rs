use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{GoogleSheetsLeadSink, LeadSink},
    services::{
        completion_service::{CompletionClient, OpenAiCompletionClient},
        http_helpers::build_http_client,
        lead_service::LeadService,
        variant_registry::VariantRegistry,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub lead_service: Arc<LeadService>,
    pub variants: Arc<VariantRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let variants = Arc::new(VariantRegistry::from_config(&config)?);

        let http = build_http_client(config.http_timeout_secs)?;
        let sink: Arc<dyn LeadSink> =
            Arc::new(GoogleSheetsLeadSink::from_config(&config, http.clone())?);
        let completion = OpenAiCompletionClient::from_config(&config, http)
            .map(|client| Arc::new(client) as Arc<dyn CompletionClient>);

        Ok(Self::with_services(config, variants, sink, completion))
    }

    /// Builds state around caller-supplied collaborators.
    pub fn with_services(
        config: Config,
        variants: Arc<VariantRegistry>,
        sink: Arc<dyn LeadSink>,
        completion: Option<Arc<dyn CompletionClient>>,
    ) -> Self {
        let lead_service = Arc::new(LeadService::new(variants.clone(), sink, completion));

        Self {
            lead_service,
            variants,
            config: Arc::new(config),
        }
    }
}
