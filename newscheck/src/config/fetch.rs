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


use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Config of the client used to download the pages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename(serialize = "Fetch"))]
pub struct FetchConfig {
    /// The timeout of a single request in seconds. (default: 10)
    #[serde(default = "_default_timeout")]
    pub timeout: u64,
    /// The user agent sent with every request
    #[serde(default = "_default_user_agent")]
    pub user_agent: String,
    /// The maximum number of redirects followed. (default: 10)
    #[serde(default = "_default_redirect_limit")]
    pub redirect_limit: usize,
    /// Accept invalid certificates. Only use this in trusted environments.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

const fn _default_timeout() -> u64 {
    10
}

fn _default_user_agent() -> String {
    concat!("newscheck/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn _default_redirect_limit() -> usize {
    10
}

impl FetchConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: _default_timeout(),
            user_agent: _default_user_agent(),
            redirect_limit: _default_redirect_limit(),
            accept_invalid_certs: false,
        }
    }
}
