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


use crate::config::Configs;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Checks if a news page looks real or fake
pub struct NewsCheckArgs {
    /// The folder containing the configs.
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Overrides the log level from the config.
    #[arg(long, global = true)]
    pub log_level: Option<log::LevelFilter>,
    /// Log to file
    #[arg(long, global = true)]
    pub log_to_file: bool,

    #[command(subcommand)]
    pub mode: RunMode,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Fetches every input and prints if it is real or fake news.
    Check {
        /// The urls, a missing scheme defaults to http.
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Prints the feature vector of an input as json.
    Features {
        /// The url of the page.
        input: String,
        /// Read the html from this file instead of fetching it.
        #[arg(long)]
        html: Option<Utf8PathBuf>,
    },
    /// Fits a vocabulary on a corpus with one document per line.
    FitVocabulary {
        #[arg(long)]
        corpus: Utf8PathBuf,
        /// The number of terms kept.
        #[arg(long, default_value_t = 300)]
        size: usize,
        #[arg(long)]
        out: Utf8PathBuf,
    },
    /// Writes an example config to the working directory.
    Init,
}

impl NewsCheckArgs {
    /// Loads the configs and applies the overrides from the command line.
    pub fn load_configs(&self) -> Result<Configs, config::ConfigError> {
        let mut configs = match &self.config {
            None => Configs::discover_or_default()?,
            Some(folder) => Configs::load_from(folder)?,
        };
        if let Some(log_level) = self.log_level {
            configs.system.log_level = log_level;
        }
        if self.log_to_file {
            configs.system.log_to_file = true;
        }
        Ok(configs)
    }
}
