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


use crate::client::{FetchError, PageFetcher};
use crate::config::{Configs, FeatureConfig};
use crate::extraction::{DescriptionExtractor, HtmlDescriptionExtractor};
use crate::features::{AssemblyError, Features, Featurizer};
use crate::normalize::{normalize, NormalizeError, UrlRecord};
use crate::resources::{Resources, StartupError};
use classifier::error::ModelError;
use classifier::{Classifier, Label};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use thiserror::Error;

/// Any error while checking a single input.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidInput(#[from] NormalizeError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Startup(#[from] StartupError),
}

/// The result of checking an input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub display: String,
    pub label: Label,
    pub score: f64,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({:.4})", self.display, self.label, self.score)
    }
}

/// Fetches, featurizes and classifies inputs.
///
/// Every call is independent, the featurizer and the model are only read.
#[derive(Debug)]
pub struct NewsPipeline<F, E = HtmlDescriptionExtractor> {
    fetcher: F,
    featurizer: Featurizer<E>,
    model: Arc<dyn Classifier>,
}

impl<F> NewsPipeline<F>
where
    F: PageFetcher,
{
    /// Loads the resources configured in [configs] and builds the pipeline.
    pub fn load(fetcher: F, configs: &Configs) -> Result<Self, PipelineError> {
        let resources = Resources::load(configs)?;
        Self::from_resources(fetcher, &resources, &configs.features)
    }

    /// Builds the pipeline with the html description extractor.
    pub fn from_resources(
        fetcher: F,
        resources: &Resources,
        config: &FeatureConfig,
    ) -> Result<Self, PipelineError> {
        let featurizer = resources.featurizer(config, HtmlDescriptionExtractor);
        Ok(Self::new(fetcher, featurizer, resources.model.clone())?)
    }
}

impl<F, E> NewsPipeline<F, E>
where
    F: PageFetcher,
    E: DescriptionExtractor,
{
    /// Fails if [model] can not score the vectors of [featurizer].
    pub fn new(
        fetcher: F,
        featurizer: Featurizer<E>,
        model: Arc<dyn Classifier>,
    ) -> Result<Self, AssemblyError> {
        featurizer.assembler().check_model(model.dimension())?;
        Ok(Self {
            fetcher,
            featurizer,
            model,
        })
    }

    pub fn featurizer(&self) -> &Featurizer<E> {
        &self.featurizer
    }

    /// Normalizes [raw] and downloads the page. Empty inputs fail before any request.
    pub async fn fetch(&self, raw: &str) -> Result<(UrlRecord, String), PipelineError> {
        let url = normalize(raw)?;
        let page = self.fetcher.fetch(url.normalized()).await?;
        Ok((url, page.body))
    }

    /// Featurizes [raw] and its downloaded page.
    pub async fn features(&self, raw: &str) -> Result<(UrlRecord, Features), PipelineError> {
        let (url, html) = self.fetch(raw).await?;
        let features = self.featurizer.featurize(url.normalized(), &html)?;
        Ok((url, features))
    }

    /// Classifies an already downloaded page.
    pub fn classify_page(&self, url: &UrlRecord, html: &str) -> Result<Verdict, PipelineError> {
        let features = self.featurizer.featurize(url.normalized(), html)?;
        let (label, score) = self.model.classify(&features.values)?;
        log::debug!("{} scored {score}", url.normalized());
        Ok(Verdict {
            display: url.display().to_string(),
            label,
            score,
        })
    }

    /// Runs the whole pipeline for [raw].
    pub async fn check(&self, raw: &str) -> Result<Verdict, PipelineError> {
        let (url, html) = self.fetch(raw).await?;
        self.classify_page(&url, &html)
    }
}

#[cfg(test)]
mod test {
    use super::{NewsPipeline, PipelineError, Verdict};
    use crate::client::{FetchError, FetchedPage};
    use crate::config::{Configs, FeatureConfig};
    use crate::extraction::HtmlDescriptionExtractor;
    use crate::features::test::{
        golden_vector, toy_embeddings, toy_vocabulary, GOLDEN_PAGE, GOLDEN_URL,
    };
    use crate::features::{AssemblyError, Featurizer};
    use crate::normalize::NormalizeError;
    use crate::resources::{Resources, StartupError, TextResources};
    use camino_tempfile::tempdir;
    use crate::test_impls::FakeFetcher;
    use classifier::linear::{LinearModel, Link};
    use classifier::Label;
    use float_cmp::approx_eq;
    use reqwest::StatusCode;
    use std::sync::Arc;

    fn pipeline(fetcher: FakeFetcher, model: LinearModel) -> NewsPipeline<FakeFetcher> {
        let resources = Resources::new(
            TextResources {
                vocabulary: toy_vocabulary(),
                embeddings: toy_embeddings(),
            },
            Arc::new(model),
            &FeatureConfig::default(),
        )
        .unwrap();
        NewsPipeline::from_resources(fetcher, &resources, &FeatureConfig::default()).unwrap()
    }

    /// Only looks at the `.news` indicator.
    fn news_model() -> LinearModel {
        let mut weights = vec![0.0; 22];
        weights[9] = 1.0;
        LinearModel::new(weights, 0.0, Link::Identity)
    }

    #[tokio::test]
    async fn golden_page_is_fake() {
        let fetcher = FakeFetcher::new();
        fetcher.push_html(GOLDEN_PAGE);
        let pipeline = pipeline(fetcher.clone(), news_model());
        let verdict = pipeline.check("breaking.news").await.unwrap();
        assert_eq!(
            Verdict {
                display: "breaking.news".to_string(),
                label: Label::Fake,
                score: 1.0
            },
            verdict
        );
        assert_eq!(vec![GOLDEN_URL.to_string()], fetcher.requested());
        assert_eq!("breaking.news -> fake (1.0000)", verdict.to_string());
    }

    #[tokio::test]
    async fn other_domains_are_real() {
        let fetcher = FakeFetcher::new();
        fetcher.push_html(GOLDEN_PAGE);
        let pipeline = pipeline(fetcher, news_model());
        let verdict = pipeline.check("https://example.com").await.unwrap();
        assert_eq!(Label::Real, verdict.label);
        assert_eq!("example.com", verdict.display);
    }

    #[tokio::test]
    async fn logistic_model_scores_the_golden_vector() {
        let fetcher = FakeFetcher::new();
        fetcher.push_html(GOLDEN_PAGE);
        let weights = vec![1.0; 22];
        let pipeline = pipeline(fetcher, LinearModel::new(weights, -10.0, Link::Logistic));
        let verdict = pipeline.check(GOLDEN_URL).await.unwrap();
        let decision = golden_vector().iter().sum::<f64>() - 10.0;
        let expected = 1.0 / (1.0 + (-decision).exp());
        assert!(approx_eq!(f64, expected, verdict.score, epsilon = 1e-9));
        assert_eq!(Label::Real, verdict.label);
    }

    #[tokio::test]
    async fn features_of_the_golden_page() {
        let fetcher = FakeFetcher::new();
        fetcher.push_html(GOLDEN_PAGE);
        let pipeline = pipeline(fetcher, news_model());
        let (url, features) = pipeline.features("breaking.news").await.unwrap();
        assert_eq!(GOLDEN_URL, url.normalized());
        for (expected, found) in golden_vector().iter().zip(&features.values) {
            assert!(approx_eq!(f64, *expected, *found, epsilon = 1e-9));
        }
    }

    #[tokio::test]
    async fn empty_input_fails_before_fetching() {
        let fetcher = FakeFetcher::new();
        let pipeline = pipeline(fetcher.clone(), news_model());
        assert!(matches!(
            pipeline.check("   ").await,
            Err(PipelineError::InvalidInput(NormalizeError::Empty))
        ));
        assert!(fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn fetch_errors_are_not_retried() {
        let fetcher = FakeFetcher::new();
        fetcher.push(Err(FetchError::Timeout {
            url: GOLDEN_URL.to_string(),
        }));
        fetcher.push_html(GOLDEN_PAGE);
        let pipeline = pipeline(fetcher.clone(), news_model());
        assert!(matches!(
            pipeline.check("breaking.news").await,
            Err(PipelineError::Fetch(FetchError::Timeout { .. }))
        ));
        assert_eq!(1, fetcher.requested().len());
    }

    #[tokio::test]
    async fn redirect_statuses_are_pages() {
        let fetcher = FakeFetcher::new();
        fetcher.push(Ok(FetchedPage::new(StatusCode::FOUND, GOLDEN_PAGE)));
        let pipeline = pipeline(fetcher, news_model());
        assert_eq!(Label::Fake, pipeline.check("breaking.news").await.unwrap().label);
    }

    #[test]
    fn rejects_a_model_with_the_wrong_dimension() {
        let featurizer = Featurizer::new(
            &FeatureConfig::default(),
            toy_vocabulary(),
            toy_embeddings(),
            HtmlDescriptionExtractor,
        );
        let model = LinearModel::new(vec![1.0; 10], 0.0, Link::Identity);
        assert!(matches!(
            NewsPipeline::new(FakeFetcher::new(), featurizer, Arc::new(model)),
            Err(AssemblyError::ModelMismatch {
                model: 10,
                features: 22
            })
        ));
    }

    #[test]
    fn missing_resources_fail_the_startup() {
        let dir = tempdir().unwrap();
        let mut configs = Configs::default();
        configs.resources.vocabulary = dir.path().join("vocabulary.txt");
        assert!(matches!(
            NewsPipeline::load(FakeFetcher::new(), &configs),
            Err(PipelineError::Startup(StartupError::Vocabulary { .. }))
        ));
    }
}
