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
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

/// Pre-trained word vectors, keyed by the lowercase token.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    dimension: usize,
    vectors: HashMap<CompactString, Box<[f32]>>,
}

impl EmbeddingTable {
    /// Creates a table from (token, vector) pairs.
    /// Every vector has to have the length [dimension].
    pub fn from_entries<I, T, V>(dimension: usize, entries: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = (T, V)>,
        T: AsRef<str>,
        V: Into<Vec<f32>>,
    {
        let mut table = Self {
            dimension,
            vectors: HashMap::new(),
        };
        for (line, (token, vector)) in entries.into_iter().enumerate() {
            table.insert(line + 1, token.as_ref(), vector.into())?;
        }
        Ok(table)
    }

    /// Loads a table in the GloVe/word2vec text format, one `token v1 ... vD` per line.
    /// A leading word2vec header (`count dim`) is skipped, the dimension is
    /// defined by the header or by the first row.
    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut table: Option<Self> = None;
        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line?;
            let mut parts = line.split_whitespace();
            let Some(token) = parts.next() else {
                continue;
            };
            let values: Vec<&str> = parts.collect();

            if table.is_none() {
                if let [dimension] = values.as_slice() {
                    if let (Ok(_), Ok(dimension)) = (token.parse::<usize>(), dimension.parse::<usize>()) {
                        log::debug!("Found word2vec header in {path} with dimension {dimension}.");
                        table = Some(Self::with_dimension(dimension));
                        continue;
                    }
                }
            }

            let vector = values
                .iter()
                .map(|value| value.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| ResourceError::Malformed {
                    line: line_number,
                    reason: err.to_string(),
                })?;

            table
                .get_or_insert_with(|| Self::with_dimension(vector.len()))
                .insert(line_number, token, vector)?;
        }

        match table {
            Some(table) if !table.is_empty() => {
                log::debug!(
                    "Loaded {} embeddings with dimension {} from {path}",
                    table.len(),
                    table.dimension
                );
                Ok(table)
            }
            _ => Err(ResourceError::Empty(path.to_string())),
        }
    }

    fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
        }
    }

    fn insert(&mut self, line: usize, token: &str, vector: Vec<f32>) -> Result<(), ResourceError> {
        if vector.len() != self.dimension || self.dimension == 0 {
            return Err(ResourceError::WidthMismatch {
                line,
                expected: self.dimension,
                found: vector.len(),
            });
        }
        match self.vectors.entry(token.to_lowercase().to_compact_string()) {
            Entry::Occupied(entry) => {
                log::trace!("Ignoring the duplicate embedding for {} in line {line}", entry.key());
            }
            Entry::Vacant(entry) => {
                entry.insert(vector.into_boxed_slice());
            }
        }
        Ok(())
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Case-insensitive lookup of [token].
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token.to_lowercase().as_str()).map(|value| &**value)
    }
}

/// Averages the embeddings of the whitespace separated tokens of a document.
#[derive(Debug, Clone)]
pub struct EmbeddingAverager {
    table: Arc<EmbeddingTable>,
}

impl EmbeddingAverager {
    pub fn new(table: Arc<EmbeddingTable>) -> Self {
        Self { table }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.table.dimension()
    }

    /// The mean of the embeddings of all known tokens in [doc].
    /// Unknown tokens are skipped and do not count towards the mean.
    /// Returns the zero vector if no token is known.
    pub fn average(&self, doc: &str) -> Vec<f64> {
        let mut sum = vec![0.0f64; self.width()];
        let mut found = 0usize;
        for token in doc.split_whitespace() {
            if let Some(vector) = self.table.get(token) {
                for (acc, value) in sum.iter_mut().zip(vector) {
                    *acc += f64::from(*value);
                }
                found += 1;
            }
        }
        if found > 0 {
            let found = found as f64;
            for value in &mut sum {
                *value /= found;
            }
        }
        sum
    }
}

#[cfg(test)]
mod test {
    use crate::embeddings::{EmbeddingAverager, EmbeddingTable};
    use crate::error::ResourceError;
    use camino_tempfile::NamedUtf8TempFile;
    use float_cmp::approx_eq;
    use std::io::Write;
    use std::sync::Arc;

    fn averager() -> EmbeddingAverager {
        EmbeddingAverager::new(Arc::new(
            EmbeddingTable::from_entries(
                3,
                [
                    ("news", vec![1.0f32, 0.0, 2.0]),
                    ("fake", vec![0.0f32, 1.0, -1.0]),
                    ("Hoax", vec![0.5f32, 0.5, 0.5]),
                ],
            )
            .unwrap(),
        ))
    }

    #[test]
    fn unknown_tokens_produce_the_zero_vector() {
        assert_eq!(vec![0.0, 0.0, 0.0], averager().average("nothing known here"));
        assert_eq!(vec![0.0, 0.0, 0.0], averager().average(""));
    }

    #[test]
    fn single_known_token_is_returned_exactly() {
        assert_eq!(vec![1.0, 0.0, 2.0], averager().average("unknown NEWS"));
    }

    #[test]
    fn known_tokens_are_averaged() {
        let averaged = averager().average("news fake hoax whatever");
        assert!(approx_eq!(f64, 0.5, averaged[0]));
        assert!(approx_eq!(f64, 0.5, averaged[1]));
        assert!(approx_eq!(f64, 0.5, averaged[2]));
    }

    #[test]
    fn punctuation_stays_part_of_the_token() {
        assert_eq!(vec![0.0, 0.0, 0.0], averager().average("news,"));
    }

    #[test]
    fn can_load_glove_and_word2vec() {
        let mut glove = NamedUtf8TempFile::new().unwrap();
        writeln!(glove, "the 0.1 0.2\nNews 1 2\nnews 3 4").unwrap();
        glove.flush().unwrap();
        let table = EmbeddingTable::load(glove.path()).unwrap();
        assert_eq!(2, table.dimension());
        assert_eq!(2, table.len());
        assert_eq!(Some([1.0f32, 2.0].as_slice()), table.get("NEWS"));

        let mut word2vec = NamedUtf8TempFile::new().unwrap();
        writeln!(word2vec, "2 3\nthe 0.1 0.2 0.3\nnews 1 2 3").unwrap();
        word2vec.flush().unwrap();
        let table = EmbeddingTable::load(word2vec.path()).unwrap();
        assert_eq!(3, table.dimension());
        assert_eq!(2, table.len());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let mut file = NamedUtf8TempFile::new().unwrap();
        writeln!(file, "the 0.1 0.2\nnews 1 2 3").unwrap();
        file.flush().unwrap();
        assert!(matches!(
            EmbeddingTable::load(file.path()),
            Err(ResourceError::WidthMismatch {
                line: 2,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let mut file = NamedUtf8TempFile::new().unwrap();
        writeln!(file, "the 0.1 abc").unwrap();
        file.flush().unwrap();
        assert!(matches!(
            EmbeddingTable::load(file.path()),
            Err(ResourceError::Malformed { line: 1, .. })
        ));
    }
}
