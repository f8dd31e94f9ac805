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


use itertools::Itertools;

/// One indicator per configured suffix, `1.0` if the url ends with it.
#[derive(Debug, Clone)]
pub struct DomainFeaturizer {
    suffixes: Vec<String>,
}

impl DomainFeaturizer {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes = suffixes.into_iter().map(Into::into).collect_vec();
        let duplicates = suffixes.iter().duplicates().collect_vec();
        if !duplicates.is_empty() {
            log::warn!("The domain suffixes {duplicates:?} are configured more than once.");
        }
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn width(&self) -> usize {
        self.suffixes.len()
    }

    /// The check is case sensitive and purely textual, `example.co.uk` also ends with `.uk`.
    pub fn featurize(&self, url: &str) -> Vec<f64> {
        self.suffixes
            .iter()
            .map(|suffix| if url.ends_with(suffix.as_str()) { 1.0 } else { 0.0 })
            .collect()
    }
}
