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
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Answers with prepared pages in the order they were pushed and
/// records the requested urls.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    value: Arc<Mutex<VecDeque<Result<FetchedPage, FetchError>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: Result<FetchedPage, FetchError>) {
        self.value.lock().unwrap().push_back(value);
    }

    pub fn push_html(&self, html: &str) {
        self.push(Ok(FetchedPage::new(StatusCode::OK, html)));
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    fn user_agent(&self) -> &str {
        "FakeFetcher"
    }

    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.value.lock().unwrap().pop_front() {
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
            Some(value) => value,
        }
    }
}
