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
use text_processing::configs::TokenizerConfig;

/// The suffixes checked by the domain featurizer, in column order.
pub const DEFAULT_DOMAIN_SUFFIXES: [&str; 10] = [
    ".com", ".org", ".net", ".info", ".biz", ".ru", ".co.uk", ".co", ".tv", ".news",
];

/// The keywords counted in the raw html, in column order.
pub const DEFAULT_KEYWORDS: [&str; 5] = ["trump", "biden", "clinton", "sports", "finance"];

/// Config of the hand-crafted features.
///
/// Changing the lists changes the width of the feature vector, the model
/// has to be trained with the same lists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename(serialize = "Features"))]
pub struct FeatureConfig {
    #[serde(default = "_default_domain_suffixes")]
    pub domain_suffixes: Vec<String>,
    #[serde(default = "_default_keywords")]
    pub keywords: Vec<String>,
    /// Lowercase the html before counting the keywords.
    /// The trained models expect the html as is. (default: false)
    #[serde(default)]
    pub lowercase_html: bool,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

fn _default_domain_suffixes() -> Vec<String> {
    DEFAULT_DOMAIN_SUFFIXES.map(String::from).to_vec()
}

fn _default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.map(String::from).to_vec()
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            domain_suffixes: _default_domain_suffixes(),
            keywords: _default_keywords(),
            lowercase_html: false,
            tokenizer: TokenizerConfig::default(),
        }
    }
}
