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


//! Checks a news page and predicts whether it is real or fake news.
//!
//! The page is turned into a single feature vector made of domain suffix
//! indicators, keyword scores, a bag-of-words of the meta description and
//! the averaged word embedding of that description. A linear model scores the vector.

pub mod app;
pub mod client;
pub mod config;
pub mod extraction;
pub mod features;
pub mod normalize;
pub mod pipeline;
pub mod resources;
pub mod toolkit;

#[cfg(test)]
mod test_impls;
