//! Endpoint groups of the partner API.
//!
//! Each group is a borrowed view over one shared `MarketClient` and carries
//! the `Endpoint` table for its area. Methods validate their arguments, map
//! them onto vendor keys and hand off to `MarketClient::call`; all of them
//! return `None` on any failure.

pub mod businesses;
pub mod campaigns;
pub mod categories;
pub mod chats;
pub mod feedback;
pub mod logistics;
pub mod models;
pub mod offers;
pub mod promos;
pub mod regions;
pub mod reports;
pub mod tariffs;

pub use businesses::Businesses;
pub use campaigns::Campaigns;
pub use categories::Categories;
pub use chats::Chats;
pub use feedback::Feedback;
pub use logistics::Logistics;
pub use models::{Models, Page};
pub use offers::Offers;
pub use promos::{PromoRemoval, Promos};
pub use regions::Regions;
pub use reports::Reports;
pub use tariffs::Tariffs;

use crate::endpoint::Endpoint;

/// Default currency of model and price lookups.
pub const DEFAULT_CURRENCY: &str = "RUR";

/// The whole endpoint catalog, grouped by area.
pub const CATALOG: &[&[Endpoint]] = &[
    businesses::ENDPOINTS,
    campaigns::ENDPOINTS,
    offers::ENDPOINTS,
    models::ENDPOINTS,
    categories::ENDPOINTS,
    chats::ENDPOINTS,
    feedback::ENDPOINTS,
    promos::ENDPOINTS,
    regions::ENDPOINTS,
    logistics::ENDPOINTS,
    tariffs::ENDPOINTS,
    reports::ENDPOINTS,
];

/// Every catalog entry, in catalog order.
pub fn endpoints() -> impl Iterator<Item = &'static Endpoint> {
    CATALOG.iter().flat_map(|group| group.iter())
}

/// Look an endpoint up by its log name, e.g. `"campaigns.list"`.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    endpoints().find(|endpoint| endpoint.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn endpoint_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in endpoints() {
            assert!(seen.insert(endpoint.name), "duplicate name {}", endpoint.name);
        }
    }

    #[test]
    fn method_and_path_pairs_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in endpoints() {
            assert!(
                seen.insert((endpoint.method, endpoint.path)),
                "{} duplicates {} {}",
                endpoint.name,
                endpoint.method,
                endpoint.path
            );
        }
    }

    #[test]
    fn paths_are_relative() {
        for endpoint in endpoints() {
            assert!(!endpoint.path.starts_with('/'), "{}", endpoint.name);
            assert!(!endpoint.path.ends_with('/'), "{}", endpoint.name);
        }
    }

    #[test]
    fn get_endpoints_take_no_body() {
        for endpoint in endpoints().filter(|e| e.method == HttpMethod::Get) {
            assert!(!endpoint.body.accepts("anything"), "{}", endpoint.name);
        }
    }

    #[test]
    fn find_by_name() {
        let endpoint = find("campaigns.list").unwrap();
        assert_eq!(endpoint.path, "campaigns");
        assert!(find("campaigns.nope").is_none());
    }
}
