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


/// One score per keyword, `ln(1 + count)` of the keyword in the raw html.
#[derive(Debug, Clone)]
pub struct KeywordFeaturizer {
    keywords: Vec<String>,
    lowercase_html: bool,
}

impl KeywordFeaturizer {
    /// The keywords are lowercased, the html is only lowercased if [lowercase_html] is set.
    pub fn new<I, S>(keywords: I, lowercase_html: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().to_lowercase())
            .collect();
        if keywords.iter().any(String::is_empty) {
            log::warn!("Empty keywords are always scored with 0.");
        }
        Self {
            keywords,
            lowercase_html,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn width(&self) -> usize {
        self.keywords.len()
    }

    pub fn featurize(&self, html: &str) -> Vec<f64> {
        let lowered;
        let html = if self.lowercase_html {
            lowered = html.to_lowercase();
            lowered.as_str()
        } else {
            html
        };
        self.keywords
            .iter()
            .map(|keyword| {
                // Unlike a plain substring count, which finds `len + 1` empty
                // matches, an empty keyword never matches.
                let count = if keyword.is_empty() {
                    0
                } else {
                    html.matches(keyword.as_str()).count()
                };
                (count as f64).ln_1p()
            })
            .collect()
    }
}
