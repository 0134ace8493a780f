//! The control-plane endpoint table
//!
//! One entry per remote procedure, grouped by resource.

use super::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::pagination::START_PARAM;
use crate::types::Method::{DELETE, GET, PATCH, POST};
use std::collections::HashMap;
use std::sync::LazyLock;

const LIST_BUCKETS_QUERY: &[&str] = &[START_PARAM, "limit", "name_prefix"];
const LIST_DATABASES_QUERY: &[&str] = &[START_PARAM, "limit", "bucket_id"];
const LIST_ENGINES_QUERY: &[&str] = &[START_PARAM, "limit", "state"];
const LIST_CATALOGS_QUERY: &[&str] = &[START_PARAM, "limit", "type"];
const LIST_TABLES_QUERY: &[&str] = &[START_PARAM, "limit", "namespace"];
const LIST_SERVICES_QUERY: &[&str] = &[START_PARAM, "limit", "type"];
const LIST_INGESTION_JOBS_QUERY: &[&str] = &[
    START_PARAM,
    "limit",
    "status",
    "engine_id",
    "catalog_id",
    "table_name",
];

/// Every endpoint of the control-plane API
pub static ENDPOINTS: &[Endpoint] = &[
    // Buckets
    Endpoint::new("list_buckets", "buckets", GET, "/v1/buckets")
        .with_query(LIST_BUCKETS_QUERY)
        .paginated(),
    Endpoint::new("get_bucket", "buckets", GET, "/v1/buckets/{bucket_id}"),
    Endpoint::new("create_bucket", "buckets", POST, "/v1/buckets").with_body(),
    Endpoint::new("delete_bucket", "buckets", DELETE, "/v1/buckets/{bucket_id}")
        .with_query(&["force"]),
    // Databases
    Endpoint::new("list_databases", "databases", GET, "/v1/databases")
        .with_query(LIST_DATABASES_QUERY)
        .paginated(),
    Endpoint::new("get_database", "databases", GET, "/v1/databases/{database_id}"),
    Endpoint::new("create_database", "databases", POST, "/v1/databases").with_body(),
    Endpoint::new("delete_database", "databases", DELETE, "/v1/databases/{database_id}")
        .with_query(&["cascade"]),
    // Engines
    Endpoint::new("list_engines", "engines", GET, "/v1/engines")
        .with_query(LIST_ENGINES_QUERY)
        .paginated(),
    Endpoint::new("get_engine", "engines", GET, "/v1/engines/{engine_id}"),
    Endpoint::new("create_engine", "engines", POST, "/v1/engines").with_body(),
    Endpoint::new("update_engine", "engines", PATCH, "/v1/engines/{engine_id}").with_body(),
    Endpoint::new("delete_engine", "engines", DELETE, "/v1/engines/{engine_id}"),
    Endpoint::new("start_engine", "engines", POST, "/v1/engines/{engine_id}/start"),
    Endpoint::new("stop_engine", "engines", POST, "/v1/engines/{engine_id}/stop")
        .with_query(&["force"]),
    // Catalogs
    Endpoint::new("list_catalogs", "catalogs", GET, "/v1/catalogs")
        .with_query(LIST_CATALOGS_QUERY)
        .paginated(),
    Endpoint::new("get_catalog", "catalogs", GET, "/v1/catalogs/{catalog_id}"),
    Endpoint::new("create_catalog", "catalogs", POST, "/v1/catalogs").with_body(),
    Endpoint::new("delete_catalog", "catalogs", DELETE, "/v1/catalogs/{catalog_id}"),
    // Tables
    Endpoint::new("list_tables", "tables", GET, "/v1/catalogs/{catalog_id}/tables")
        .with_query(LIST_TABLES_QUERY)
        .paginated(),
    Endpoint::new("get_table", "tables", GET, "/v1/catalogs/{catalog_id}/tables/{table_name}")
        .with_query(&["namespace"]),
    Endpoint::new("create_table", "tables", POST, "/v1/catalogs/{catalog_id}/tables").with_body(),
    Endpoint::new("drop_table", "tables", DELETE, "/v1/catalogs/{catalog_id}/tables/{table_name}")
        .with_query(&["namespace", "purge"]),
    // Services
    Endpoint::new("list_services", "services", GET, "/v1/services")
        .with_query(LIST_SERVICES_QUERY)
        .paginated(),
    Endpoint::new("get_service", "services", GET, "/v1/services/{service_id}"),
    Endpoint::new("create_service", "services", POST, "/v1/services").with_body(),
    Endpoint::new("update_service", "services", PATCH, "/v1/services/{service_id}").with_body(),
    Endpoint::new("delete_service", "services", DELETE, "/v1/services/{service_id}"),
    // Ingestion jobs
    Endpoint::new("list_ingestion_jobs", "ingestion_jobs", GET, "/v1/ingestion-jobs")
        .with_query(LIST_INGESTION_JOBS_QUERY)
        .paginated(),
    Endpoint::new("get_ingestion_job", "ingestion_jobs", GET, "/v1/ingestion-jobs/{job_id}"),
    Endpoint::new("create_ingestion_job", "ingestion_jobs", POST, "/v1/ingestion-jobs").with_body(),
    Endpoint::new(
        "cancel_ingestion_job",
        "ingestion_jobs",
        POST,
        "/v1/ingestion-jobs/{job_id}/cancel",
    ),
];

/// Endpoints indexed by name
static BY_NAME: LazyLock<HashMap<&'static str, &'static Endpoint>> =
    LazyLock::new(|| ENDPOINTS.iter().map(|e| (e.name, e)).collect());

/// All endpoints, in table order
pub fn all() -> &'static [Endpoint] {
    ENDPOINTS
}

/// Find an endpoint by name
pub fn find(name: &str) -> Option<&'static Endpoint> {
    BY_NAME.get(name).copied()
}

/// Find an endpoint by name, failing with [`Error::UnknownEndpoint`]
pub fn lookup(name: &str) -> Result<&'static Endpoint> {
    find(name).ok_or_else(|| Error::unknown_endpoint(name))
}

/// All paginated list endpoints
pub fn list_endpoints() -> impl Iterator<Item = &'static Endpoint> {
    ENDPOINTS.iter().filter(|e| e.paginated)
}
