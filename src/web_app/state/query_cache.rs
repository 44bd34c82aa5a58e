// web_app/state/query_cache.rs - Client-side result cache for the list query

use std::collections::HashMap;

use super::manufacturer_list::{Command, FetchRequest};
use crate::web_app::model::{FetchPolicy, ManufacturerConnection, ManufacturersQueryVariables};

/// Fetched pages keyed by their query variables
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<ManufacturersQueryVariables, ManufacturerConnection>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached page for `variables`, honouring the fetch policy
    pub fn lookup(
        &self,
        variables: &ManufacturersQueryVariables,
        policy: FetchPolicy,
    ) -> Option<&ManufacturerConnection> {
        match policy {
            FetchPolicy::NetworkOnly => None,
            FetchPolicy::CacheFirst => self.entries.get(variables),
        }
    }

    /// Remember a network result
    pub fn store(&mut self, variables: ManufacturersQueryVariables, connection: ManufacturerConnection) {
        self.entries.insert(variables, connection);
    }

    /// Answer `request` without the network when its policy allows it
    pub fn resolve(&self, request: &FetchRequest) -> Option<Command> {
        self.lookup(&request.variables, request.policy)
            .map(|connection| Command::Loaded {
                seq: request.seq,
                result: Ok(connection.clone()),
            })
    }

    /// Keep the answer to `request`; failures are not cached
    pub fn record(&mut self, request: &FetchRequest, result: &Result<ManufacturerConnection, String>) {
        if let Ok(connection) = result {
            self.store(request.variables.clone(), connection.clone());
            tracing::debug!(seq = request.seq, entries = self.len(), "cached manufacturers page");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
