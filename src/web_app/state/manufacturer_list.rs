// web_app/state/manufacturer_list.rs - View-model of the manufacturer list page
//
// The page keeps one `ManufacturerListState` and feeds it `Command`s.
// `update` mutates the state and hands back the request the page has to
// send, if any. Responses come back as `Command::Loaded` tagged with the
// sequence number of their request; only the newest request may change
// what is on screen.

use super::query_cache::QueryCache;
use crate::web_app::model::{
    like_pattern, FetchPolicy, ManufacturerConnection, ManufacturersQueryVariables,
    RefetchVariables,
};

/// Events the page reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// The page was mounted
    Mount,
    /// The search box was submitted
    Search(String),
    /// A page was picked in the list's paginator
    GoToPage(u32),
    /// The list asked for the current page again
    Refetch,
    /// A request finished
    Loaded {
        seq: u64,
        result: Result<ManufacturerConnection, String>,
    },
}

/// A query the page must run on behalf of the state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub variables: ManufacturersQueryVariables,
    pub policy: FetchPolicy,
}

/// What the page renders
#[derive(Clone, Debug, PartialEq)]
pub enum FetchStatus {
    Loading,
    Error(String),
    /// Ready may still lack data, the list copes with `None`
    Ready(Option<ManufacturerConnection>),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

#[derive(Clone, Debug)]
pub struct ManufacturerListState {
    search_term: String,
    last_variables: Option<ManufacturersQueryVariables>,
    status: FetchStatus,
    next_seq: u64,
    latest_seq: Option<u64>,
    in_flight: bool,
}

impl Default for ManufacturerListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerListState {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            last_variables: None,
            status: FetchStatus::Ready(None),
            next_seq: 1,
            latest_seq: None,
            in_flight: false,
        }
    }

    /// State of a page that is about to send its first query
    ///
    /// Starts in `Loading` so the server render and the first client
    /// render both show the loader until `Command::Mount` is answered.
    pub fn mounting() -> Self {
        Self {
            status: FetchStatus::Loading,
            ..Self::new()
        }
    }

    /// Current search text, empty until the first search
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Whether the newest request has not answered yet
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// Apply one command, returning the request to send if it needs one
    pub fn update(&mut self, command: Command) -> Option<FetchRequest> {
        match command {
            Command::Mount => {
                self.status = FetchStatus::Loading;
                let variables = ManufacturersQueryVariables::initial();
                Some(self.issue(variables, FetchPolicy::NetworkOnly))
            }
            Command::Search(search_text) => {
                let patch = RefetchVariables {
                    text: Some(like_pattern(&search_text)),
                    page: Some(1),
                };
                self.search_term = search_text;
                Some(self.refetch(patch))
            }
            Command::GoToPage(page) => {
                let patch = RefetchVariables {
                    text: Some(like_pattern(&self.search_term)),
                    page: Some(page),
                };
                Some(self.refetch(patch))
            }
            Command::Refetch => {
                let variables = self.base_variables();
                Some(self.issue(variables, FetchPolicy::NetworkOnly))
            }
            Command::Loaded { seq, result } => {
                self.receive(seq, result);
                None
            }
        }
    }

    /// Apply `command` and answer the request it causes from `cache` when
    /// the fetch policy allows it
    ///
    /// Returns the request only when it still has to go over the network.
    pub fn dispatch(&mut self, cache: &QueryCache, command: Command) -> Option<FetchRequest> {
        let request = self.update(command)?;
        match cache.resolve(&request) {
            Some(hit) => {
                tracing::debug!(seq = request.seq, "manufacturers served from cache");
                self.update(hit);
                None
            }
            None => Some(request),
        }
    }

    /// Feed back the network answer to `request`, caching it on success
    pub fn settle(
        &mut self,
        cache: &mut QueryCache,
        request: &FetchRequest,
        result: Result<ManufacturerConnection, String>,
    ) {
        cache.record(request, &result);
        self.update(Command::Loaded {
            seq: request.seq,
            result,
        });
    }

    fn base_variables(&self) -> ManufacturersQueryVariables {
        self.last_variables
            .clone()
            .unwrap_or_else(ManufacturersQueryVariables::initial)
    }

    fn refetch(&mut self, patch: RefetchVariables) -> FetchRequest {
        let variables = self.base_variables().merge(&patch);
        self.issue(variables, FetchPolicy::CacheFirst)
    }

    fn issue(&mut self, variables: ManufacturersQueryVariables, policy: FetchPolicy) -> FetchRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);
        self.in_flight = true;
        self.last_variables = Some(variables.clone());

        tracing::debug!(
            seq,
            page = variables.page,
            text = ?variables.text,
            ?policy,
            "issuing manufacturers query"
        );

        FetchRequest {
            seq,
            variables,
            policy,
        }
    }

    fn receive(&mut self, seq: u64, result: Result<ManufacturerConnection, String>) {
        if self.latest_seq != Some(seq) {
            tracing::debug!(seq, latest = ?self.latest_seq, "discarding stale manufacturers response");
            return;
        }

        self.in_flight = false;
        self.status = match result {
            Ok(connection) => FetchStatus::Ready(Some(connection)),
            Err(message) => {
                tracing::warn!(seq, %message, "manufacturers query failed");
                FetchStatus::Error(message)
            }
        };
    }
}
