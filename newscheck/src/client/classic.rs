// Copyright 2024 Felix Engl
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crate::client::{FetchError, FetchedPage, PageFetcher};
use crate::config::FetchConfig;
use reqwest::Client;

/// Fetches the pages with a configured [reqwest] client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
    user_agent: String,
}

impl ReqwestFetcher {
    pub fn new(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    /// Builds the client with the timeout, user agent and redirect limit from [config].
    pub fn with_config(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        log::trace!(
            "Timeout: {}s, Redirects: {}",
            config.timeout,
            config.redirect_limit
        );
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout_duration())
            .redirect(reqwest::redirect::Policy::limited(config.redirect_limit))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self::new(client, config.user_agent.as_str()))
    }
}

fn convert_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request(err)
    }
}

impl PageFetcher for ReqwestFetcher {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        log::debug!("Fetching {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| convert_error(url, err))?;
        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response
            .text()
            .await
            .map_err(|err| convert_error(url, err))?;
        log::debug!("Fetched {} bytes from {url} ({status})", body.len());
        Ok(FetchedPage::new(status, body))
    }
}
