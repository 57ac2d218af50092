//! Bulk Pitch Execution
//!
//! Runs pitch generation over an ordered list of brands, strictly
//! sequentially, isolating per-row failures and reporting progress after
//! every row. A fixed inter-row delay keeps the run under provider rate
//! limits; it is configuration, not a correctness requirement.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{info, warn};

use vibepitch_core::{BatchResult, BatchRow, BrandTarget, EventContext};
use vibepitch_llm::TextGenerator;

use crate::services::pitch::generator::PitchGenerator;
use crate::utils::error::{EngineError, EngineResult};

/// Configuration for a bulk run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Delay between consecutive rows, in milliseconds
    #[serde(default = "default_row_delay_ms")]
    pub row_delay_ms: u64,
}

fn default_row_delay_ms() -> u64 {
    1000
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            row_delay_ms: default_row_delay_ms(),
        }
    }
}

impl BatchConfig {
    /// A config with the throttle disabled, for tests and local providers.
    pub fn no_delay() -> Self {
        Self { row_delay_ms: 0 }
    }

    /// The inter-row delay as a Duration.
    pub fn row_delay(&self) -> Duration {
        Duration::from_millis(self.row_delay_ms)
    }
}

/// Progress update emitted during a bulk run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BatchEvent {
    /// A row is about to be generated
    RowStarted {
        index: usize,
        total: usize,
        brand: String,
    },
    /// A row finished (success or captured failure)
    RowFinished { completed: usize, total: usize },
    /// The whole run finished
    Finished { total: usize, failed: usize },
}

impl BatchEvent {
    /// Fractional progress in [0, 1], available once a row has finished.
    pub fn fraction(&self) -> Option<f64> {
        match self {
            BatchEvent::RowFinished { completed, total } if *total > 0 => {
                Some(*completed as f64 / *total as f64)
            }
            _ => None,
        }
    }

    /// Human-readable status line for the host UI.
    pub fn status_line(&self) -> String {
        match self {
            BatchEvent::RowStarted { brand, .. } => format!("Processing: {}...", brand),
            BatchEvent::RowFinished { completed, total } => {
                format!("Generated {} of {}", completed, total)
            }
            BatchEvent::Finished { .. } => "Bulk generation complete".to_string(),
        }
    }
}

/// Sequential bulk runner over an injected provider.
pub struct BatchRunner {
    generator: PitchGenerator,
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(provider: Arc<dyn TextGenerator>, config: BatchConfig) -> Self {
        Self {
            generator: PitchGenerator::new(provider),
            config,
        }
    }

    /// Run pitch generation over `brands`, in input order.
    ///
    /// Rows with blank names are dropped first; if nothing remains the run is
    /// rejected before any provider call. A row's failure is captured in that
    /// row's result and every subsequent row is still attempted. `on_event`
    /// receives a progress event before and after each row and once at the
    /// end.
    pub async fn run<F>(
        &self,
        event: &EventContext,
        brands: Vec<BrandTarget>,
        mut on_event: F,
    ) -> EngineResult<BatchResult>
    where
        F: FnMut(BatchEvent),
    {
        event.validate()?;

        let brands: Vec<BrandTarget> = brands.into_iter().filter(BrandTarget::has_name).collect();
        if brands.is_empty() {
            return Err(EngineError::validation(
                "add at least one brand with a name before running",
            ));
        }

        let total = brands.len();
        let mut batch = BatchResult::new();

        for (index, brand) in brands.into_iter().enumerate() {
            on_event(BatchEvent::RowStarted {
                index,
                total,
                brand: brand.name.clone(),
            });

            let result = self.generator.generate(event, &brand).await;
            match result.failure_message() {
                Some(message) => warn!(brand = %brand.name, error = %message, "row failed"),
                None => info!(brand = %brand.name, "row generated"),
            }
            batch.push(BatchRow::new(brand, result));

            on_event(BatchEvent::RowFinished {
                completed: index + 1,
                total,
            });

            if index + 1 < total && self.config.row_delay_ms > 0 {
                sleep(self.config.row_delay()).await;
            }
        }

        on_event(BatchEvent::Finished {
            total,
            failed: batch.failed(),
        });

        Ok(batch)
    }
}
