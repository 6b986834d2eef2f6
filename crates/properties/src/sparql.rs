//! Live knowledge-graph backing for the property store.
//!
//! Uses `ureq` for synchronous HTTP against a SPARQL endpoint (DBpedia by
//! default). One blocking request per movie; there is no retry, a failed
//! query fails the whole fetch.

use crate::error::{PropertyError, Result};
use crate::types::Property;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Public DBpedia endpoint
pub const DEFAULT_ENDPOINT: &str = "http://dbpedia.org/sparql";

/// Anything that can return the raw `(property, object)` pairs of a resource.
pub trait PropertySource {
    fn fetch(&self, resource_uri: &str) -> Result<Vec<Property>>;
}

/// SPARQL client restricted to the film properties used for similarity.
pub struct SparqlClient {
    agent: ureq::Agent,
    endpoint: String,
    exclusions: Vec<String>,
}

impl SparqlClient {
    /// Create a client for the given endpoint with a 30 second timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            exclusions: Vec::new(),
        }
    }

    /// Predicates to drop from every result (default: none)
    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Configure the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::AgentBuilder::new().timeout(timeout).build();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PropertySource for SparqlClient {
    fn fetch(&self, resource_uri: &str) -> Result<Vec<Property>> {
        let query = build_query(resource_uri);

        let response = self
            .agent
            .get(&self.endpoint)
            .query("query", &query)
            .query("format", "application/sparql-results+json")
            .call()
            .map_err(|e| PropertyError::Query {
                uri: resource_uri.to_string(),
                reason: e.to_string(),
            })?;

        let results: SparqlResponse =
            response
                .into_json()
                .map_err(|e| PropertyError::InvalidResponse {
                    uri: resource_uri.to_string(),
                    reason: e.to_string(),
                })?;

        let properties = filter_results(results, &self.exclusions);
        debug!("Fetched {} properties for {}", properties.len(), resource_uri);
        Ok(properties)
    }
}

/// `SELECT DISTINCT ?prop ?obj` over the film predicates of one resource
fn build_query(resource_uri: &str) -> String {
    format!(
        r#"PREFIX dbo: <http://dbpedia.org/ontology/>
PREFIX dct: <http://purl.org/dc/terms/>
PREFIX foaf: <http://xmlns.com/foaf/0.1/>
SELECT DISTINCT ?prop ?obj
WHERE {{
    <{resource_uri}> ?prop ?obj .
    FILTER(
        ?prop = dbo:cinematography || ?prop = dbo:director || ?prop = dbo:distributor ||
        ?prop = dbo:editing || ?prop = dbo:musicComposer || ?prop = dbo:producer ||
        ?prop = dbo:starring || ?prop = dct:subject || ?prop = foaf:name
    )
}}"#
    )
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct Binding {
    prop: Term,
    obj: Term,
}

#[derive(Debug, Deserialize)]
struct Term {
    value: String,
}

/// Turn result bindings into properties, dropping excluded predicates
fn filter_results(response: SparqlResponse, exclusions: &[String]) -> Vec<Property> {
    response
        .results
        .bindings
        .into_iter()
        .filter(|binding| !exclusions.contains(&binding.prop.value))
        .map(|binding| Property::new(binding.prop.value, binding.obj.value))
        .collect()
}
