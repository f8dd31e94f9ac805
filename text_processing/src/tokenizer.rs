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


use crate::configs::TokenizerConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static WORD_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// A primitive tokenizer.
///
/// Words are maximal runs of word characters, every run with at least
/// `min_token_chars` characters is a token. With the default config this is
/// the `\b\w\w+\b` pattern of a classic count vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Tokenizer {
    lowercase: bool,
    normalize: bool,
    min_token_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::from_config(&TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(lowercase: bool, normalize: bool, min_token_chars: usize) -> Self {
        Self {
            lowercase,
            normalize,
            min_token_chars,
        }
    }

    pub fn from_config(cfg: &TokenizerConfig) -> Self {
        Self::new(cfg.lowercase, cfg.normalize_text, cfg.min_token_chars)
    }

    /// Preprocesses a text
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.normalize {
            Cow::Owned(text.nfc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };

        let text = if self.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            text
        };

        WORD_CHARACTERS
            .find_iter(&text)
            .map(|found| found.as_str())
            .filter(|value| value.chars().count() >= self.min_token_chars)
            .map(str::to_string)
            .collect()
    }
}
