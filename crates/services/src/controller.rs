use std::sync::Arc;

use report_core::{LookupKey, ReportDataset, StudentReport};
use tracing::{debug, error};

use crate::error::LoadError;

/// What the page should show right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Searching,
    Loading,
    NotFound,
    Displaying(Arc<StudentReport>),
}

/// Tag attached to every dataset fetch.
///
/// Only the most recently issued ticket may change the controller. Responses
/// carrying an older ticket are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    key: Option<LookupKey>,
}

impl FetchTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The lookup key that was active when the fetch was issued.
    #[must_use]
    pub fn key(&self) -> Option<&LookupKey> {
        self.key.as_ref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketStatus {
    Current,
    Stale,
}

/// Page-session state for the report lookup flow.
///
/// Owns the active lookup key, the last dataset that arrived and the current
/// view. Callers perform the fetch for each returned `FetchTicket` and report
/// the outcome back through `apply`.
#[derive(Clone, Debug, Default)]
pub struct ReportController {
    key: Option<LookupKey>,
    state: ControllerState,
    dataset: Option<Arc<ReportDataset>>,
    latest_seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
enum ControllerState {
    #[default]
    Searching,
    Resolving,
    NotFound,
    Displaying(Arc<StudentReport>),
}

impl ReportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for the first fetch of the session, issued with no key set.
    pub fn begin_initial_load(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Record `name` as the active key and start resolving it.
    ///
    /// Any name is accepted, including the empty string.
    pub fn submit_name(&mut self, name: impl Into<LookupKey>) -> FetchTicket {
        let key = name.into();
        debug!(key = %key, "lookup submitted");
        self.key = Some(key);
        self.state = ControllerState::Resolving;
        self.issue()
    }

    /// Clear the key and return to the search form.
    ///
    /// Returns the ticket for the refetch that follows the key change, or
    /// `None` if no key was set (nothing changes in that case).
    pub fn go_back(&mut self) -> Option<FetchTicket> {
        self.state = ControllerState::Searching;
        self.key.take()?;
        Some(self.issue())
    }

    /// React to a completed fetch.
    pub fn on_data_loaded(
        &mut self,
        ticket: &FetchTicket,
        dataset: Arc<ReportDataset>,
    ) -> TicketStatus {
        if !self.is_current(ticket) {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "dropping stale report data"
            );
            return TicketStatus::Stale;
        }

        self.state = match &self.key {
            None => ControllerState::Searching,
            // An empty name never opens a report, even if the dataset has one.
            Some(key) if key.is_empty() => ControllerState::NotFound,
            Some(key) => match dataset.resolve(key) {
                Some(report) => ControllerState::Displaying(report),
                None => {
                    debug!(key = %key, "student not found");
                    ControllerState::NotFound
                }
            },
        };
        self.dataset = Some(dataset);
        TicketStatus::Current
    }

    /// React to a failed fetch. The state is left as it is, so a pending
    /// lookup keeps showing the loading indicator.
    pub fn on_load_failed(&mut self, ticket: &FetchTicket, err: &LoadError) -> TicketStatus {
        if !self.is_current(ticket) {
            debug!(seq = ticket.seq, error = %err, "ignoring failure of stale fetch");
            return TicketStatus::Stale;
        }

        error!(
            seq = ticket.seq,
            key = ticket.key.as_ref().map(LookupKey::as_str),
            error = %err,
            "error loading report data"
        );
        TicketStatus::Current
    }

    /// Feed a fetch result back in, whichever way it went.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Arc<ReportDataset>, LoadError>,
    ) -> TicketStatus {
        match result {
            Ok(dataset) => self.on_data_loaded(ticket, dataset),
            Err(err) => self.on_load_failed(ticket, &err),
        }
    }

    /// The view to render.
    ///
    /// Until the first dataset has arrived the search form is replaced by the
    /// loading indicator.
    #[must_use]
    pub fn view(&self) -> ViewState {
        match &self.state {
            ControllerState::Searching if self.dataset.is_none() => ViewState::Loading,
            ControllerState::Searching => ViewState::Searching,
            ControllerState::Resolving => ViewState::Loading,
            ControllerState::NotFound => ViewState::NotFound,
            ControllerState::Displaying(report) => ViewState::Displaying(Arc::clone(report)),
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&LookupKey> {
        self.key.as_ref()
    }

    /// The most recently loaded dataset, if any.
    #[must_use]
    pub fn dataset(&self) -> Option<&Arc<ReportDataset>> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        FetchTicket {
            seq: self.latest_seq,
            key: self.key.clone(),
        }
    }
}
