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


//! Text side of the feature pipeline: tokenizing, the bag-of-words vocabulary,
//! word embeddings and the corpus statistics used to fit a vocabulary.

pub mod configs;
pub mod corpus;
pub mod embeddings;
pub mod error;
pub mod tokenizer;
pub mod vectorizer;
pub mod vocabulary;
