#[cfg(test)]
#[path = "brandcraft_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::Backend;
use crate::domain::models::BackendResponse;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::Event;

/// The BrandCraft generation service. Every request is a single JSON
/// exchange against `/api/chat`.
pub struct BrandCraft {
    url: String,
    timeout: String,
    health_check_timeout: String,
}

impl BrandCraft {
    pub fn new(url: &str) -> BrandCraft {
        return BrandCraft {
            url: url.trim_end_matches('/').to_string(),
            timeout: Config::get(ConfigKey::BackendTimeout),
            health_check_timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

fn parse_millis(value: &str, fallback: u64) -> Result<Duration> {
    if value.is_empty() {
        return Ok(Duration::from_millis(fallback));
    }

    return Ok(Duration::from_millis(value.parse::<u64>()?));
}

#[async_trait]
impl Backend for BrandCraft {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(format!("{url}/openapi.json", url = self.url))
            .timeout(parse_millis(&self.health_check_timeout, 1000)?)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "BrandCraft backend is not running");
                bail!("BrandCraft backend is not running at {}", self.url);
            }
        };

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "BrandCraft backend health check failed"
            );
            bail!("BrandCraft backend health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn get_completion<'a>(
        &self,
        request: ChatRequest,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        let res = reqwest::Client::new()
            .post(format!("{url}/api/chat", url = self.url))
            .timeout(parse_millis(&self.timeout, 30000)?)
            .json(&request)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                session_id = %request.session_id,
                "Failed to make chat request to BrandCraft"
            );
            bail!("Backend error: {}", res.status().as_u16());
        }

        let body = res.json::<ChatResponse>().await?;
        tracing::debug!(body = ?body, session_id = %request.session_id, "Chat response");

        tx.send(Event::BackendPromptResponse(BackendResponse {
            author: Author::BrandCraft,
            text: body.reply_text(request.is_guided()),
            done: true,
            session_id: request.session_id,
        }))?;

        return Ok(());
    }
}
