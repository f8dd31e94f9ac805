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


use crate::config::{FeatureConfig, FetchConfig, ResourcesConfig, SystemConfig};
use camino::Utf8Path;
use config::Config;
use serde::{Deserialize, Serialize};

/// The environment prefix, `NEWSCHECK.FETCH.TIMEOUT=5` sets the fetch timeout.
pub const ENV_PREFIX: &str = "NEWSCHECK";

/// A collection of all configs used by the application.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename(serialize = "Config"))]
pub struct Configs {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Configs {
    /// Loads the configs from the working directory and [folder], the files in
    /// [folder] take precedence. Environment variables override everything.
    pub fn load_from<P: AsRef<Utf8Path>>(folder: P) -> Result<Self, config::ConfigError> {
        let folder = folder.as_ref();
        Config::builder()
            .add_source(config::File::with_name("./config").required(false))
            .add_source(config::File::with_name("./newscheck").required(false))
            .add_source(config::File::with_name(folder.join("config").as_str()).required(false))
            .add_source(
                config::File::with_name(folder.join("newscheck").as_str()).required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("."))
            .build()?
            .try_deserialize()
    }

    /// Searches the usual places for a config and falls back to the defaults
    /// if nothing can be read.
    pub fn discover_or_default() -> Result<Self, config::ConfigError> {
        match Config::builder()
            .add_source(config::File::with_name("./config").required(false))
            .add_source(config::File::with_name("./newscheck").required(false))
            .add_source(config::File::with_name("./newscheck_data/config").required(false))
            .add_source(config::File::with_name("./newscheck_data/newscheck").required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("."))
            .build()
        {
            Ok(value) => value.try_deserialize(),
            Err(err) => {
                log::warn!("Failed to read the configs, falling back to the defaults: {err}");
                Ok(Default::default())
            }
        }
    }
}
