//! Region directory.

use serde_json::Value;

use crate::args::Args;
use crate::client::MarketClient;
use crate::endpoint::Endpoint;

pub const SEARCH: Endpoint = Endpoint::get("regions.search", "regions").query(&["name"]);
pub const GET: Endpoint = Endpoint::get("regions.get", "regions/{region_id}");
pub const CHILDREN: Endpoint = Endpoint::get("regions.children", "regions/{region_id}/children");

pub(crate) const ENDPOINTS: &[Endpoint] = &[SEARCH, GET, CHILDREN];

#[derive(Debug, Clone, Copy)]
pub struct Regions<'a> {
    client: &'a MarketClient,
}

impl<'a> Regions<'a> {
    pub(crate) fn new(client: &'a MarketClient) -> Self {
        Self { client }
    }

    /// Regions whose name matches; an empty name lists top-level regions.
    pub fn search(&self, name: &str) -> Option<Value> {
        self.client.call(&SEARCH, Args::new().query("name", name))
    }

    pub fn get(&self, region_id: u64) -> Option<Value> {
        self.client
            .call(&GET, Args::new().path("region_id", region_id))
    }

    pub fn children(&self, region_id: u64) -> Option<Value> {
        self.client
            .call(&CHILDREN, Args::new().path("region_id", region_id))
    }
}
