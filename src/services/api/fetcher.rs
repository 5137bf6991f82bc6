//! Blocking HTTP fetcher for the day's bookings.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

use super::wire::decode_bookings;
use crate::models::booking::Booking;
use crate::services::config::FetchConfig;

/// Fetches the booking list for a selected day (and optional venue filter)
/// from the backend. Retries transient failures with a short delay; the
/// final error propagates to the caller, whose rendering layer shows a
/// retryable error banner.
pub struct BookingFetcher {
    client: Client,
    base_url: String,
    max_response_bytes: usize,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl BookingFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        if !config.base_url.starts_with("https://") {
            return Err(anyhow!("Backend base URL must use HTTPS"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build booking fetch HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_response_bytes: 5 * 1024 * 1024,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }

    /// Fetch and decode the bookings for one day.
    pub fn fetch_day(&self, day: NaiveDate, venue: Option<i64>) -> Result<Vec<Booking>> {
        let url = self.bookings_url(day, venue);
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            match self.fetch_once(&url) {
                Ok(body) => return decode_bookings(&body),
                Err(err) => {
                    let is_last_attempt = attempt == self.max_retries;
                    if is_last_attempt {
                        last_error = Some(err.context(format!(
                            "Failed to fetch bookings for {} after {} attempts",
                            day,
                            attempt + 1
                        )));
                    } else {
                        log::warn!(
                            "Booking fetch attempt {} failed for {}: {}",
                            attempt + 1,
                            day,
                            err
                        );
                        thread::sleep(Duration::from_millis(self.retry_delay_ms));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unknown booking fetch error")))
    }

    fn bookings_url(&self, day: NaiveDate, venue: Option<i64>) -> String {
        let mut url = format!("{}/bookings?date={}", self.base_url, day.format("%Y-%m-%d"));
        if let Some(venue_id) = venue {
            url.push_str(&format!("&venue={}", venue_id));
        }
        url
    }

    fn fetch_once(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .context("Network error during booking fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Booking fetch failed with HTTP status {}", status));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(anyhow!(
                    "Bookings response too large ({} bytes > {} bytes)",
                    content_length,
                    self.max_response_bytes
                ));
            }
        }

        let bytes = response
            .bytes()
            .context("Failed to read bookings response body")?;

        if bytes.len() > self.max_response_bytes {
            return Err(anyhow!(
                "Bookings response too large ({} bytes > {} bytes)",
                bytes.len(),
                self.max_response_bytes
            ));
        }

        String::from_utf8(bytes.to_vec()).context("Bookings response is not valid UTF-8")
    }
}
