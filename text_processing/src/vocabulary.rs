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


use crate::error::ResourceError;
use camino::Utf8Path;
use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Deref;

/// A fixed mapping from terms to stable column indices.
/// The column of a term is its position in the term list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<CompactString>", into = "Vec<CompactString>")]
pub struct Vocabulary {
    terms: Vec<CompactString>,
    index: HashMap<CompactString, usize>,
}

impl Vocabulary {
    /// Creates a vocabulary, the iteration order defines the columns.
    pub fn from_terms<I, T>(terms: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = T>,
        T: ToCompactString,
    {
        let mut index = HashMap::new();
        let mut collected = Vec::new();
        for term in terms {
            let term = term.to_compact_string();
            match index.entry(term.clone()) {
                Entry::Occupied(_) => return Err(ResourceError::DuplicateTerm(term.to_string())),
                Entry::Vacant(entry) => {
                    entry.insert(collected.len());
                }
            }
            collected.push(term);
        }
        collected.shrink_to_fit();
        index.shrink_to_fit();
        Ok(Self {
            terms: collected,
            index,
        })
    }

    /// Loads a vocabulary with one term per line. Blank lines are skipped.
    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut terms = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let term = line.trim();
            if !term.is_empty() {
                terms.push(term.to_compact_string());
            }
        }
        if terms.is_empty() {
            return Err(ResourceError::Empty(path.to_string()));
        }
        let vocabulary = Self::from_terms(terms)?;
        log::debug!("Loaded {} terms from {}", vocabulary.len(), path);
        Ok(vocabulary)
    }

    /// Writes the vocabulary in the format read by [`Vocabulary::load`].
    pub fn save(&self, path: impl AsRef<Utf8Path>) -> Result<(), ResourceError> {
        let mut out = BufWriter::new(
            File::options()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path.as_ref())?,
        );
        for term in &self.terms {
            writeln!(&mut out, "{term}")?;
        }
        out.flush()?;
        Ok(())
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

impl Deref for Vocabulary {
    type Target = [CompactString];

    fn deref(&self) -> &Self::Target {
        &self.terms
    }
}

impl TryFrom<Vec<CompactString>> for Vocabulary {
    type Error = ResourceError;

    fn try_from(value: Vec<CompactString>) -> Result<Self, Self::Error> {
        Self::from_terms(value)
    }
}

impl From<Vocabulary> for Vec<CompactString> {
    fn from(value: Vocabulary) -> Self {
        value.terms
    }
}
