//! Spreadsheet publishing over the Sheets v4 REST surface.
//!
//! Publishing is a clear-then-overwrite: the target sheet's rows are deleted
//! with a row-shift, then the full row set is written in one values update
//! with the `USER_ENTERED` input mode.

use tracing::info;

use linkdigest_shared::{ClassifiedLink, LinkDigestError, Result, SheetsConfig};

/// Default API endpoint; overridable via config for tests.
const DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com";

/// Publishes classified rows to the configured spreadsheet.
pub struct SheetsPublisher {
    client: reqwest::Client,
    config: SheetsConfig,
    token: String,
    endpoint: String,
}

impl SheetsPublisher {
    /// Build a publisher for the configured spreadsheet with a bearer token.
    pub fn new(config: SheetsConfig, token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LinkDigestError::Network(format!("failed to build HTTP client: {e}")))?;

        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            client,
            config,
            token,
            endpoint,
        })
    }

    /// Clear the sheet and overwrite it with the full row set.
    pub async fn publish(&self, links: &[ClassifiedLink]) -> Result<()> {
        self.clear_sheet().await?;
        self.write_rows(links).await?;
        info!(
            spreadsheet = %self.config.spreadsheet_id,
            rows = links.len(),
            "rows published"
        );
        Ok(())
    }

    /// Delete the sheet's populated range with a row shift.
    async fn clear_sheet(&self) -> Result<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}:batchUpdate",
            self.endpoint, self.config.spreadsheet_id
        );

        let body = serde_json::json!({
            "requests": [
                {
                    "deleteRange": {
                        "range": { "sheetId": self.config.sheet_id },
                        "shiftDimension": "ROWS"
                    }
                }
            ]
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| LinkDigestError::Network(format!("batchUpdate: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LinkDigestError::Export(format!(
                "range clear failed: HTTP {status}"
            )));
        }
        Ok(())
    }

    /// Bulk-write all rows with the `USER_ENTERED` value input mode.
    async fn write_rows(&self, links: &[ClassifiedLink]) -> Result<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.endpoint, self.config.spreadsheet_id, self.config.sheet_name
        );

        let values: Vec<[String; 6]> = links.iter().map(|l| l.clone().into_row()).collect();
        let body = serde_json::json!({ "values": values });

        let response = self
            .client
            .put(&url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| LinkDigestError::Network(format!("values update: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LinkDigestError::Export(format!(
                "values update failed: HTTP {status}"
            )));
        }
        Ok(())
    }
}
