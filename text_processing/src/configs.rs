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

/// The config for the tokenizer used by the bag-of-words encoder.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct TokenizerConfig {
    /// If set to true the text is lowercased before tokenizing
    #[serde(default = "_default_lowercase")]
    pub lowercase: bool,
    /// If set to true the text is NFC normalized
    #[serde(default)]
    pub normalize_text: bool,
    /// Tokens with fewer characters are dropped.
    #[serde(default = "_default_min_token_chars")]
    pub min_token_chars: usize,
}

const fn _default_lowercase() -> bool {
    true
}

const fn _default_min_token_chars() -> usize {
    2
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: _default_lowercase(),
            normalize_text: false,
            min_token_chars: _default_min_token_chars(),
        }
    }
}
