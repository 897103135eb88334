//! Indicator loader: fetch one series, validate it, and decide whether the
//! result may still be applied.
//!
//! A load goes Requesting -> Validating -> Succeeded | Failed. Requesting and
//! Validating happen in [`fetch_series`]; [`IndicatorLoader::apply`] then
//! draws the result on an injected chart, gated by [`IndicatorLoader::settle`]
//! so that only the most recently issued request ever reaches the chart and
//! status line.

use crate::chart::{ChartController, ChartSurface};
use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::payload::{evaluate_response, LoadOutcome, RawResponse};
use crate::selection::LoadRequest;
use crate::status::StatusLine;

/// Transport used to GET the series endpoint.
///
/// Returns the raw status and body; `Err` is a network-level failure
/// (no response at all).
#[allow(async_fn_in_trait)]
pub trait SeriesSource {
    async fn get(&self, url: &str) -> Result<RawResponse, String>;
}

/// Issue one GET and validate the answer. Never fails: every problem is
/// folded into [`LoadOutcome::Failed`].
pub async fn fetch_series<S: SeriesSource>(source: &S, url: &str) -> LoadOutcome {
    match source.get(url).await {
        Ok(response) => evaluate_response(&response),
        Err(msg) => LoadOutcome::Failed(LoadError::Unexpected(msg)),
    }
}

/// Sequence number of one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic request counter. Only the latest ticket is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadTracker {
    latest: u64,
    discarded: u64,
}

impl LoadTracker {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Number of responses dropped because a newer request was issued.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}

/// A load that has been issued but not yet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub ticket: Ticket,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorLoader {
    config: LoaderConfig,
    tracker: LoadTracker,
}

impl IndicatorLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            tracker: LoadTracker::default(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn tracker(&self) -> &LoadTracker {
        &self.tracker
    }

    /// Enter Requesting: issue a ticket and resolve the URL.
    pub fn begin(&mut self, request: LoadRequest) -> PendingLoad {
        let ticket = self.tracker.issue();
        let url = self.config.endpoint(&request.country, &request.indicator);
        log::info!("Loading {} (request #{})", url, ticket.0);
        PendingLoad { ticket, url }
    }

    /// Accept the outcome of `ticket` if it is still the latest request.
    ///
    /// Stale outcomes return `None` and must not be applied.
    pub fn settle(&mut self, ticket: Ticket, outcome: LoadOutcome) -> Option<LoadOutcome> {
        if !self.tracker.is_current(ticket) {
            self.tracker.discarded += 1;
            log::debug!(
                "Discarding stale response #{} (latest #{})",
                ticket.0,
                self.tracker.latest
            );
            return None;
        }
        if let LoadOutcome::Failed(err) = &outcome {
            log::error!("Error al cargar indicador: {}", err);
        }
        Some(outcome)
    }

    /// Settle `ticket` and draw its outcome.
    ///
    /// Success renders the chart and yields the summary status; failure leaves
    /// the chart showing its last series and yields the error status. Stale
    /// outcomes touch nothing and yield `None`.
    pub fn apply<S: ChartSurface>(
        &mut self,
        ticket: Ticket,
        outcome: LoadOutcome,
        chart: &mut ChartController<S>,
    ) -> Option<StatusLine> {
        let status = match self.settle(ticket, outcome)? {
            LoadOutcome::Succeeded(payload) => {
                chart.render(&payload);
                StatusLine::showing(&payload)
            }
            LoadOutcome::Failed(err) => StatusLine::failed(&err),
        };
        Some(status)
    }
}
