//! One form submission: normalize, build, fetch, deliver, notify.
//!
//! Stages run strictly in order; the first failure skips the rest and is
//! reported as a single error notification. Nothing escapes `submit`.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ScrapegenConfig;
use crate::delivery::{self, DeliveryError};
use crate::input::{FormInput, InputError};
use crate::notify::{Notification, Notifier, FALLBACK_ERROR_DESCRIPTION};
use crate::request::RequestBuilder;
use crate::state::UiState;
use crate::transport::{self, FetchError};

/// Result of one submission, after the user has been notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The artifact was saved at this path.
    Delivered(PathBuf),
    /// The submission failed; carries the message shown to the user.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered(_))
    }
}

/// Message shown for a failed submission: the error's own text when it is one
/// of the pipeline's error types, a generic message otherwise.
pub fn user_message(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<FetchError>() {
        return e.to_string();
    }
    if let Some(e) = err.downcast_ref::<DeliveryError>() {
        return e.to_string();
    }
    if let Some(e) = err.downcast_ref::<InputError>() {
        return e.to_string();
    }
    FALLBACK_ERROR_DESCRIPTION.to_string()
}

/// Form controller state: request builder, download target, loading flag and
/// notification sink. Cheap to share; every `submit` call is independent.
pub struct Pipeline {
    builder: RequestBuilder,
    download_dir: PathBuf,
    ui: Arc<UiState>,
    notifier: Arc<dyn Notifier>,
}

impl Pipeline {
    pub fn new(
        cfg: &ScrapegenConfig,
        download_dir: PathBuf,
        ui: Arc<UiState>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            builder: RequestBuilder::from_config(cfg),
            download_dir,
            ui,
            notifier,
        }
    }

    /// Runs one submission of already-validated form values.
    pub async fn submit(&self, input: &FormInput) -> SubmitOutcome {
        let _loading = self.ui.begin();
        let result = self.run(input).await;
        self.finish(result)
    }

    /// Runs one submission from raw field values; an empty URL is reported
    /// like any other failure.
    pub async fn submit_fields(
        &self,
        website_url: &str,
        api_key: Option<&str>,
        full_version: bool,
    ) -> SubmitOutcome {
        let _loading = self.ui.begin();
        let result = match FormInput::new(website_url, api_key, full_version) {
            Ok(input) => self.run(&input).await,
            Err(e) => Err(e.into()),
        };
        self.finish(result)
    }

    async fn run(&self, input: &FormInput) -> Result<PathBuf> {
        let request = self.builder.build(input);
        tracing::info!(
            domain = %request.domain,
            full = input.full_version,
            authenticated = input.has_api_key(),
            "requesting"
        );
        if !input.has_api_key() {
            tracing::debug!(relay = %request.relay, "relay url");
        }

        let artifact = transport::fetch_text(&request.relay).await?;
        let path = tokio::task::spawn_blocking({
            let dir = self.download_dir.clone();
            move || delivery::deliver(&artifact, &dir)
        })
        .await
        .context("delivery task join")??;
        Ok(path)
    }

    fn finish(&self, result: Result<PathBuf>) -> SubmitOutcome {
        match result {
            Ok(path) => {
                self.notifier.notify(Notification::success());
                SubmitOutcome::Delivered(path)
            }
            Err(err) => {
                tracing::error!("generation failed: {:#}", err);
                let message = user_message(&err);
                self.notifier.notify(Notification::failure(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
