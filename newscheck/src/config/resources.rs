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


use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// The locations of the read-only resources loaded at startup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename(serialize = "Resources"))]
pub struct ResourcesConfig {
    /// One term per line, the line is the column.
    #[serde(default = "_default_vocabulary")]
    pub vocabulary: Utf8PathBuf,
    /// Word embeddings in the GloVe or word2vec text format.
    #[serde(default = "_default_embeddings")]
    pub embeddings: Utf8PathBuf,
    /// The trained model, `.json` or bincode.
    #[serde(default = "_default_model")]
    pub model: Utf8PathBuf,
}

fn _default_vocabulary() -> Utf8PathBuf {
    Utf8PathBuf::from("newscheck_data/vocabulary.txt")
}

fn _default_embeddings() -> Utf8PathBuf {
    Utf8PathBuf::from("newscheck_data/embeddings.txt")
}

fn _default_model() -> Utf8PathBuf {
    Utf8PathBuf::from("newscheck_data/model.json")
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            vocabulary: _default_vocabulary(),
            embeddings: _default_embeddings(),
            model: _default_model(),
        }
    }
}
