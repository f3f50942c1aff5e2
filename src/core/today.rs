use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;

use crate::domain::model::{DateSource, ResolvedDate};
use crate::domain::ports::{Clock, DateResolver};
use crate::utils::error::{AppError, Result};

pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://worldtimeapi.org/api/ip",
    "https://worldtimeapi.org/api/timezone/Etc/UTC",
];

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 3;

/// Years a machine clock can reasonably claim. Anything outside means the
/// clock is unset or broken and an online source is consulted.
pub fn plausible_year(year: i32) -> bool {
    (1970..=2100).contains(&year)
}

fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("fixed fallback date")
}

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Resolves "today", preferring the local clock, then the configured online
/// endpoints in order, then a fixed fallback. Never fails; the source tag
/// tells the caller how trustworthy the date is.
pub struct CurrentDateResolver<C: Clock> {
    clock: C,
    client: Client,
    endpoints: Vec<String>,
    offline: bool,
}

impl<C: Clock> CurrentDateResolver<C> {
    pub fn new(
        clock: C,
        endpoints: Vec<String>,
        timeout: Duration,
        offline: bool,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            clock,
            client,
            endpoints,
            offline,
        })
    }

    async fn fetch_date(&self, endpoint: &str) -> Result<NaiveDate> {
        tracing::debug!("querying time endpoint {}", endpoint);
        let response = self.client.get(endpoint).send().await?;

        if !response.status().is_success() {
            return Err(AppError::TimeSourceUnavailable {
                reason: format!("{} returned {}", endpoint, response.status()),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let datetime = body
            .get("datetime")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::TimeSourceUnavailable {
                reason: format!("{} response has no datetime field", endpoint),
            })?;

        // "2025-10-18T12:34:56.789+00:00" -> "2025-10-18"
        let date_part = datetime
            .get(..10)
            .ok_or_else(|| AppError::TimeSourceUnavailable {
                reason: format!("datetime field too short: {:?}", datetime),
            })?;
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| {
            AppError::TimeSourceUnavailable {
                reason: format!("unparsable datetime field: {:?}", datetime),
            }
        })?;

        if !plausible_year(date.year()) {
            return Err(AppError::TimeSourceUnavailable {
                reason: format!("online year {} is implausible", date.year()),
            });
        }

        Ok(date)
    }
}

#[async_trait]
impl<C: Clock> DateResolver for CurrentDateResolver<C> {
    async fn resolve(&self) -> ResolvedDate {
        let local = self.clock.today();
        if plausible_year(local.year()) {
            return ResolvedDate {
                date: local,
                source: DateSource::Local,
            };
        }
        tracing::debug!("local clock year {} is implausible", local.year());

        if !self.offline {
            for endpoint in &self.endpoints {
                match self.fetch_date(endpoint).await {
                    Ok(date) => {
                        tracing::debug!("using online date {} from {}", date, endpoint);
                        return ResolvedDate {
                            date,
                            source: DateSource::Online,
                        };
                    }
                    Err(e) => {
                        tracing::debug!("time endpoint {} failed: {}", endpoint, e);
                    }
                }
            }
        }

        tracing::warn!(
            "no usable time source, falling back to {}",
            fallback_date()
        );
        ResolvedDate {
            date: fallback_date(),
            source: DateSource::Fallback,
        }
    }
}
