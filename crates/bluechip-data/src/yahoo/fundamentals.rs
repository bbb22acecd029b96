//! Fundamental data fetching from Yahoo Finance.

use super::dividends::DividendHistoryFetcher;
use super::parse::{MODULES, parse_quote_summary};
use crate::error::{DataError, Result};
use crate::provider::FundamentalsProvider;
use crate::record::TickerRecord;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};

/// Yahoo Finance query host.
const YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Page that hands out the consent cookie the crumb endpoint requires.
const COOKIE_URL: &str = "https://fc.yahoo.com";

/// Default spacing between requests.
const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(500);

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Yahoo rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Rate limiter to keep request spacing polite.
#[derive(Debug)]
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            last_request: now.checked_sub(min_interval).unwrap_or(now),
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// Yahoo Finance fundamentals provider.
///
/// Reads the `quoteSummary` endpoint for point-in-time fundamentals and the
/// chart endpoint for dividend history. A failed dividend history fetch is
/// logged and leaves the history empty; it does not fail the ticker.
#[derive(Debug)]
pub struct YahooFundamentalsProvider {
    client: reqwest::Client,
    dividends: DividendHistoryFetcher,
    crumb: Mutex<Option<String>>,
    rate_limiter: Mutex<RateLimiter>,
    base_url: String,
    cookie_url: String,
}

impl YahooFundamentalsProvider {
    /// Create a new provider with default rate limiting.
    pub fn new() -> Result<Self> {
        Self::with_rate_limit(DEFAULT_RATE_LIMIT)
    }

    /// Create a new provider with custom rate limiting.
    pub fn with_rate_limit(min_interval: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            dividends: DividendHistoryFetcher::new()?,
            crumb: Mutex::new(None),
            rate_limiter: Mutex::new(RateLimiter::new(min_interval)),
            base_url: YAHOO_BASE_URL.to_string(),
            cookie_url: COOKIE_URL.to_string(),
        })
    }

    /// Look back `years` calendar years of dividend history.
    pub fn with_dividend_years(mut self, years: u32) -> Self {
        self.dividends.set_years(years);
        self
    }

    /// Dividend history lookback in calendar years.
    pub const fn dividend_years(&self) -> u32 {
        self.dividends.years()
    }

    #[cfg(test)]
    fn with_host(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self.cookie_url = format!("{base_url}/cookie");
        self
    }

    /// Get the cached crumb, performing the cookie/crumb handshake if needed.
    async fn crumb(&self) -> Result<String> {
        let mut cached = self.crumb.lock().await;
        if let Some(crumb) = cached.as_ref() {
            return Ok(crumb.clone());
        }

        // fc.yahoo.com answers 404 but still sets the cookie
        if let Err(e) = self.client.get(&self.cookie_url).send().await {
            tracing::debug!(error = %e, "cookie request failed");
        }

        let url = format!("{}/v1/test/getcrumb", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimit {
                retry_after_ms: DEFAULT_RATE_LIMIT.as_millis() as u64 * 10,
            });
        }
        if !status.is_success() {
            return Err(DataError::Http(format!("crumb request failed: HTTP {status}")));
        }

        let crumb = response.text().await?.trim().to_string();
        if crumb.is_empty() || crumb.contains('<') || crumb.len() > 64 {
            return Err(DataError::YahooApi("invalid crumb".to_string()));
        }

        tracing::debug!("obtained Yahoo crumb");
        *cached = Some(crumb.clone());
        Ok(crumb)
    }

    async fn invalidate_crumb(&self) {
        *self.crumb.lock().await = None;
    }

    /// Fetch the `quoteSummary` for one symbol.
    ///
    /// A 401 means the cached crumb expired; the crumb is refreshed and the
    /// request is sent once more.
    async fn fetch_summary(&self, symbol: &str) -> Result<TickerRecord> {
        let url = format!("{}/v10/finance/quoteSummary/{}", self.base_url, symbol);

        for attempt in 0..2 {
            let crumb = self.crumb().await?;

            self.rate_limiter.lock().await.wait().await;

            let response = self
                .client
                .get(&url)
                .query(&[("modules", MODULES), ("crumb", crumb.as_str())])
                .send()
                .await?;

            match response.status() {
                StatusCode::NOT_FOUND => return Err(DataError::SymbolNotFound(symbol.to_string())),
                StatusCode::UNAUTHORIZED => {
                    tracing::debug!(symbol, attempt, "crumb rejected, refreshing");
                    self.invalidate_crumb().await;
                    continue;
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    return Err(DataError::RateLimit {
                        retry_after_ms: DEFAULT_RATE_LIMIT.as_millis() as u64 * 10,
                    });
                }
                status if !status.is_success() => {
                    return Err(DataError::Http(format!(
                        "quoteSummary for {symbol}: HTTP {status}"
                    )));
                }
                _ => {}
            }

            let body: serde_json::Value = response.json().await?;
            return parse_quote_summary(symbol, &body);
        }

        Err(DataError::YahooApi("unauthorized (stale crumb)".to_string()))
    }
}

impl FundamentalsProvider for YahooFundamentalsProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch(&self, symbol: &str) -> Result<TickerRecord> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let mut record = self.fetch_summary(symbol).await?;

        self.rate_limiter.lock().await.wait().await;
        match self.dividends.fetch(symbol).await {
            Ok(history) => record.dividend_history = history,
            Err(e) => {
                tracing::warn!(symbol, error = %e, "dividend history unavailable");
            }
        }

        Ok(record)
    }
}
