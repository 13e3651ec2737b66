use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{StatusCode, multipart};
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::errors::AppError;
use crate::models::season::{Season, SeasonStatus};
use crate::models::team::TeamSubmission;

/// Error payload the backend attaches to 403s and other failures. Both fields
/// are optional in practice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMessage {
    message: Option<String>,
    next_open: Option<DateTime<Utc>>,
}

/// Boundary to the registration backend, kept as a trait so tests can feed the
/// controller simulated outcomes.
#[async_trait]
pub trait RegistrationApi {
    async fn current_season(&self) -> Result<SeasonStatus, AppError>;

    async fn submit_team(&self, team: &TeamSubmission) -> Result<(), AppError>;
}

#[async_trait]
impl<T: RegistrationApi + Send + Sync> RegistrationApi for std::sync::Arc<T> {
    async fn current_season(&self) -> Result<SeasonStatus, AppError> {
        (**self).current_season().await
    }

    async fn submit_team(&self, team: &TeamSubmission) -> Result<(), AppError> {
        (**self).submit_team(team).await
    }
}

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpApi {
    async fn current_season(&self) -> Result<SeasonStatus, AppError> {
        let url = format!("{}/seasons/current", self.base_url);

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to check season: {}", e)))?;

        let status = res.status();
        if status.is_success() {
            // 200 with a null or empty body also means no open window.
            let body = res
                .text()
                .await
                .map_err(|e| AppError::Transport(format!("Failed to read season: {}", e)))?;
            let season: Option<Season> = serde_json::from_str(&body).unwrap_or(None);

            return match season {
                Some(season) => Ok(SeasonStatus::Open(season)),
                None => Ok(SeasonStatus::Closed { next_open: None }),
            };
        }

        // 403 and 404 both read as closed; the body may still carry nextOpen.
        tracing::debug!("season check returned {}", status);
        let body: ApiMessage = res.json().await.unwrap_or_default();

        Ok(SeasonStatus::Closed {
            next_open: body.next_open,
        })
    }

    async fn submit_team(&self, team: &TeamSubmission) -> Result<(), AppError> {
        let url = format!("{}/teams", self.base_url);

        let players = serde_json::to_string(&team.players)
            .map_err(|e| AppError::Deserialization(format!("Failed to encode players: {}", e)))?;

        let logo = multipart::Part::bytes(team.logo.bytes.clone())
            .file_name(team.logo.file_name.clone())
            .mime_str(&team.logo.content_type)
            .map_err(|e| AppError::Transport(format!("Invalid logo content type: {}", e)))?;

        let mut form = multipart::Form::new()
            .part("logo", logo)
            .text("name", team.name.clone())
            .text("owner", team.owner.clone())
            .text("captain", team.captain.clone())
            .text("coach", team.coach.clone())
            .text("players", players);

        if let Some(season_id) = &team.season_id {
            form = form.text("seasonId", season_id.clone());
        }

        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to submit team: {}", e)))?;

        let status = res.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        let body: ApiMessage = res.json().await.unwrap_or_default();

        if status == StatusCode::FORBIDDEN {
            tracing::warn!("team submission rejected: registration closed");
            return Err(AppError::RegistrationClosed {
                message: body
                    .message
                    .unwrap_or_else(|| "Inscrições fechadas.".to_string()),
                next_open: body.next_open,
            });
        }

        tracing::error!("team submission failed with status {}", status);
        Err(AppError::Server {
            status: status.as_u16(),
            message: body
                .message
                .unwrap_or_else(|| format!("Erro: {}", status.as_u16())),
        })
    }
}
