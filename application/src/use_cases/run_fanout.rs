//! Run Fan-Out use case
//!
//! Renders a query into every prompt strategy, asks the upstream model to
//! answer each one, then asks it to compare the answers.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::response_cache::ResponseCache;
use fanout_domain::{
    DomainError, FanOutResult, Model, Phase, PromptTemplate, Query, Strategy, StrategyResults,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur during a fan-out run
#[derive(Error, Debug)]
pub enum RunFanOutError {
    #[error(transparent)]
    InvalidQuery(#[from] DomainError),

    #[error("Strategy {strategy} failed: {source}")]
    StrategyFailed {
        strategy: Strategy,
        #[source]
        source: GatewayError,
    },

    #[error("Comparative analysis failed: {0}")]
    ComparisonFailed(#[source] GatewayError),

    #[error("Strategy task aborted: {0}")]
    TaskAborted(String),
}

impl RunFanOutError {
    /// Returns `true` if the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, RunFanOutError::InvalidQuery(_))
    }
}

/// Use case for running a query through all prompt strategies
///
/// The cache is owned by the use case instance. The first failing upstream
/// call aborts the run: nothing is cached and no partial result is returned.
pub struct RunFanOutUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    cache: Arc<dyn ResponseCache>,
    model: Model,
}

impl<G: LlmGateway + 'static> RunFanOutUseCase<G> {
    pub fn new(gateway: Arc<G>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            gateway,
            cache,
            model: Model::default(),
        }
    }

    /// Use a specific upstream model for all seven calls
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn cache(&self) -> &Arc<dyn ResponseCache> {
        &self.cache
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, query: &str) -> Result<FanOutResult, RunFanOutError> {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        query: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<FanOutResult, RunFanOutError> {
        let query = Query::new(query)?;

        if let Some(cached) = self.cache.get(query.content()) {
            debug!("Cache hit for query ({} bytes)", query.content().len());
            return Ok(cached);
        }

        info!(
            "Fanning out query across {} strategies with {}",
            Strategy::ALL.len(),
            self.model
        );

        let results = self.phase_strategies(&query, progress).await?;
        let comparative_analysis = self.phase_comparison(&results, progress).await?;

        let result = FanOutResult::new(results, comparative_analysis);
        self.cache.put(query.into_content(), result.clone());

        Ok(result)
    }

    /// Phase 1: Answer every strategy prompt in parallel
    async fn phase_strategies(
        &self,
        query: &Query,
        progress: &dyn ProgressNotifier,
    ) -> Result<StrategyResults, RunFanOutError> {
        info!("Phase 1: {}", Phase::Strategies);
        progress.on_phase_start(&Phase::Strategies, Strategy::ALL.len());

        let mut join_set = JoinSet::new();

        for strategy in Strategy::ALL {
            let gateway = Arc::clone(&self.gateway);
            let model = self.model.clone();
            let prompt = PromptTemplate::render(strategy, query.content());

            join_set.spawn(async move {
                let result = gateway.complete_prompt(&model, &prompt).await;
                (strategy, result)
            });
        }

        let mut results = StrategyResults::new();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((strategy, Ok(content))) => {
                    debug!("Strategy {} responded ({} bytes)", strategy, content.len());
                    progress.on_task_complete(&Phase::Strategies, strategy.as_str(), true);
                    results.insert(strategy, content);
                }
                Ok((strategy, Err(e))) => {
                    warn!("Strategy {} failed: {}", strategy, e);
                    progress.on_task_complete(&Phase::Strategies, strategy.as_str(), false);
                    join_set.abort_all();
                    return Err(RunFanOutError::StrategyFailed {
                        strategy,
                        source: e,
                    });
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    join_set.abort_all();
                    return Err(RunFanOutError::TaskAborted(e.to_string()));
                }
            }
        }

        if !results.is_complete() {
            return Err(RunFanOutError::TaskAborted(format!(
                "only {} of {} strategies answered",
                results.len(),
                Strategy::ALL.len()
            )));
        }

        progress.on_phase_complete(&Phase::Strategies);
        Ok(results)
    }

    /// Phase 2: Compare and rate the collected answers
    async fn phase_comparison(
        &self,
        results: &StrategyResults,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, RunFanOutError> {
        info!("Phase 2: {}", Phase::Comparison);
        progress.on_phase_start(&Phase::Comparison, 1);

        let prompt = PromptTemplate::comparison_prompt(results);
        let analysis = self
            .gateway
            .complete_prompt(&self.model, &prompt)
            .await
            .map_err(|e| {
                warn!("Comparative analysis failed: {}", e);
                progress.on_task_complete(&Phase::Comparison, self.model.as_str(), false);
                RunFanOutError::ComparisonFailed(e)
            })?;

        progress.on_task_complete(&Phase::Comparison, self.model.as_str(), true);
        progress.on_phase_complete(&Phase::Comparison);
        Ok(analysis)
    }
}
