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


use crate::client::FetchError;
use reqwest::StatusCode;

/// A downloaded page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Downloads the html of a normalized url.
pub trait PageFetcher {
    fn user_agent(&self) -> &str;

    /// Retrieves the body of [url] as text. Only 2xx and 3xx are answered with a page.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
