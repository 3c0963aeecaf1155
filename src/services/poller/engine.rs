use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::modules::homework::{parse_status, validate_response};
use crate::services::notifier::NotificationGate;
use crate::services::poller::{CycleError, CycleOutcome, PollState};
use crate::services::practicum::HomeworkApi;

/// Polls the homework API on a fixed period and reports status changes.
pub struct PollEngine {
    api: Arc<dyn HomeworkApi>,
    gate: NotificationGate,
    retry_period: Duration,
}

impl PollEngine {
    pub fn new(api: Arc<dyn HomeworkApi>, gate: NotificationGate, retry_period: Duration) -> Self {
        Self {
            api,
            gate,
            retry_period,
        }
    }

    /// Run cycles until `shutdown` resolves.
    ///
    /// Shutdown is only observed while sleeping between cycles, so a fetch or
    /// a delivery in flight always completes. Returns the final loop state.
    pub async fn run_until<F>(&self, initial_watermark: i64, shutdown: F) -> PollState
    where
        F: Future<Output = ()>,
    {
        let mut state = PollState::new(initial_watermark);
        tokio::pin!(shutdown);

        tracing::info!(
            "🚀 Homework poller started (every {}s, from_date={})",
            self.retry_period.as_secs(),
            initial_watermark
        );

        loop {
            let outcome = self.run_cycle(&mut state).await;
            tracing::debug!("Cycle finished: {:?}, next from_date={}", outcome, state.watermark);

            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, poller stopped");
                    break;
                }
                _ = tokio::time::sleep(self.retry_period) => {}
            }
        }

        state
    }

    /// Execute one fetch → validate → translate → notify pass.
    ///
    /// Never fails: errors are turned into an operator notification. The
    /// watermark moves to the current time whatever the outcome.
    pub async fn run_cycle(&self, state: &mut PollState) -> CycleOutcome {
        let outcome = match self.check_homeworks(state).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = e.operator_message();
                self.gate.notify(&message).await;
                match &e {
                    CycleError::Api(err) if err.is_transport() => {
                        tracing::warn!("Homework API unreachable: {}", err)
                    }
                    _ => tracing::error!("{}", message),
                }
                CycleOutcome::Failed(message)
            }
        };

        state.watermark = Utc::now().timestamp();
        outcome
    }

    async fn check_homeworks(&self, state: &mut PollState) -> Result<CycleOutcome, CycleError> {
        let response = self.api.fetch(state.watermark).await?;
        let response = validate_response(response)?;

        let Some(latest) = response.latest() else {
            tracing::debug!("No homework updates since {}", state.watermark);
            return Ok(CycleOutcome::Idle);
        };

        let message = parse_status(latest)?;
        if state.last_message.as_deref() == Some(message.as_str()) {
            tracing::debug!("Homework status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        let delivered = self.gate.notify_if_changed(&message, state).await;
        if delivered {
            tracing::info!("✅ Status change delivered: {}", message);
        }
        Ok(CycleOutcome::Notified { delivered })
    }
}
