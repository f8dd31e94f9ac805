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


use crate::app::args::{NewsCheckArgs, RunMode};
use crate::app::logging::configure_logging;
use crate::app::{create_example_config, EXAMPLE_CONFIG_FILE};
use crate::client::{PageFetcher, ReqwestFetcher};
use crate::config::Configs;
use crate::extraction::HtmlDescriptionExtractor;
use crate::features::{FeatureLayout, Features};
use crate::normalize::normalize;
use crate::pipeline::NewsPipeline;
use crate::resources::TextResources;
use anyhow::{bail, Context};
use camino::Utf8Path;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use text_processing::corpus::CorpusStatisticsCollector;
use text_processing::tokenizer::Tokenizer;

/// The json printed by `features`.
#[derive(Debug, Serialize)]
struct FeatureReport<'a> {
    display: &'a str,
    normalized: &'a str,
    layout: FeatureLayout,
    columns: Vec<String>,
    #[serde(flatten)]
    features: Features,
}

/// Executes the subcommands with the loaded configs.
#[derive(Debug)]
pub struct Application {
    configs: Configs,
}

impl Application {
    pub fn new(configs: Configs) -> Self {
        Self { configs }
    }

    /// Loads the configs and configures the logging.
    pub fn from_args(args: &NewsCheckArgs) -> anyhow::Result<Self> {
        let configs = args.load_configs().context("Failed to load the configs")?;
        configure_logging(&configs).context("Failed to configure the logging")?;
        Ok(Self::new(configs))
    }

    pub fn configs(&self) -> &Configs {
        &self.configs
    }

    pub async fn run(&self, mode: RunMode) -> anyhow::Result<()> {
        match mode {
            RunMode::Check { inputs } => self.check(&inputs).await,
            RunMode::Features { input, html } => {
                let report = self.features(&input, html.as_deref()).await?;
                println!("{report}");
                Ok(())
            }
            RunMode::FitVocabulary { corpus, size, out } => {
                self.fit_vocabulary(&corpus, size, &out)
            }
            RunMode::Init => self.init(Utf8Path::new(".")),
        }
    }

    fn fetcher(&self) -> anyhow::Result<ReqwestFetcher> {
        ReqwestFetcher::with_config(&self.configs.fetch).context("Failed to build the client")
    }

    async fn check(&self, inputs: &[String]) -> anyhow::Result<()> {
        let pipeline = NewsPipeline::load(self.fetcher()?, &self.configs)?;
        let mut failed = 0usize;
        for input in inputs {
            match pipeline.check(input).await {
                Ok(verdict) => println!("{verdict}"),
                Err(err) => {
                    failed += 1;
                    log::error!("Failed to check {input:?}: {err}");
                }
            }
        }
        if failed > 0 {
            bail!("{failed} of {} inputs could not be checked.", inputs.len())
        }
        Ok(())
    }

    /// Creates the pretty printed json of the feature vector of [input].
    /// The html is read from [html] if set, otherwise it is fetched.
    pub async fn features(&self, input: &str, html: Option<&Utf8Path>) -> anyhow::Result<String> {
        let text = TextResources::load(&self.configs.resources)?;
        let featurizer = text.featurizer(&self.configs.features, HtmlDescriptionExtractor);
        let url = normalize(input)?;
        let html = match html {
            Some(path) => {
                std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
            }
            None => self.fetcher()?.fetch(url.normalized()).await?.body,
        };
        let features = featurizer.featurize(url.normalized(), &html)?;
        let report = FeatureReport {
            display: url.display(),
            normalized: url.normalized(),
            layout: *featurizer.layout(),
            columns: featurizer.column_names(),
            features,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Fits a vocabulary with the configured tokenizer and writes it to [out].
    pub fn fit_vocabulary(
        &self,
        corpus: &Utf8Path,
        size: usize,
        out: &Utf8Path,
    ) -> anyhow::Result<()> {
        let reader = BufReader::new(
            File::open(corpus).with_context(|| format!("Failed to open the corpus {corpus}"))?,
        );
        let documents = reader.lines().collect::<Result<Vec<_>, _>>()?;
        let tokenizer = Tokenizer::from_config(&self.configs.features.tokenizer);
        let statistics = CorpusStatisticsCollector::from_documents(&documents, &tokenizer);
        log::info!("Corpus statistics:\n{statistics}");
        let vocabulary = statistics.provide_vocabulary(size)?;
        vocabulary.save(out)?;
        log::info!("Wrote {} terms to {out}", vocabulary.len());
        Ok(())
    }

    /// Writes the example config to [folder] unless it exists.
    pub fn init(&self, folder: &Utf8Path) -> anyhow::Result<()> {
        let path = folder.join(EXAMPLE_CONFIG_FILE);
        if path.exists() {
            println!("The config already exists at {path}.\nDelete it before regenerating.");
            return Ok(());
        }
        let file = File::options()
            .create_new(true)
            .write(true)
            .open(&path)
            .with_context(|| format!("Failed to create {path}"))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &create_example_config())?;
        println!("Created the example config at {path}.");
        Ok(())
    }
}
