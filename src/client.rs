//! Lakehouse control-plane client
//!
//! Binds the endpoint table to the HTTP transport and hands out cursor pagers
//! for the list endpoints.

use crate::config::ClientConfig;
use crate::endpoints::{self, Endpoint};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::models::IngestionJob;
use crate::pagination::{CursorPager, ListOperation, PageRequest, PageResponse};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Pager over any paginated endpoint
pub type EndpointPager<T> = CursorPager<T, EndpointLister<T>>;

/// Pager over `list_ingestion_jobs`
pub type IngestionJobsPager = EndpointPager<IngestionJob>;

struct ClientInner {
    http: HttpClient,
    config: ClientConfig,
    base_url: Url,
}

/// Client for the lakehouse control-plane API
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct LakehouseClient {
    inner: Arc<ClientInner>,
}

impl LakehouseClient {
    /// Create a client from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;
        let http = HttpClient::with_auth(config.http_config(), config.auth.clone())?;

        debug!(
            base_url = %base_url,
            auth = config.auth.kind(),
            "Created lakehouse client"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                base_url,
            }),
        })
    }

    /// Create a client configured from `LAKEHOUSE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Base URL every endpoint path is joined to
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Call an endpoint by name and return the raw JSON response
    pub async fn call(
        &self,
        name: &str,
        params: JsonObject,
        body: Option<JsonValue>,
    ) -> Result<JsonValue> {
        let endpoint = endpoints::lookup(name)?;
        self.call_endpoint(endpoint, &params, body).await
    }

    /// Call an endpoint and decode the response into `R`
    ///
    /// Parameters are validated before anything is sent.
    pub async fn call_endpoint<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: &JsonObject,
        body: Option<JsonValue>,
    ) -> Result<R> {
        if body.is_some() && !endpoint.body {
            return Err(Error::invalid_param(
                endpoint.name,
                "body",
                "endpoint does not accept a request body",
            ));
        }

        let bound = endpoint.bind(&self.inner.base_url, params)?;
        let mut request = RequestConfig {
            query: bound.query,
            ..RequestConfig::default()
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(endpoint = endpoint.name, "Calling endpoint");
        self.inner
            .http
            .request_json(bound.method.into(), bound.url, request)
            .await
    }

    /// Fetch a single page of a list endpoint
    pub async fn list_page<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        request: PageRequest,
    ) -> Result<PageResponse<T>> {
        if !endpoint.paginated {
            return Err(Error::NotPaginated {
                endpoint: endpoint.name.to_string(),
            });
        }
        self.call_endpoint(endpoint, request.params(), None).await
    }

    /// Create a pager over the list endpoint `name`
    ///
    /// Fails before any request is sent if the endpoint is not paginated,
    /// if a parameter is not accepted, or if `params` already holds a cursor.
    pub fn pager<T>(&self, name: &str, params: JsonObject) -> Result<EndpointPager<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let endpoint = endpoints::lookup(name)?;
        if !endpoint.paginated {
            return Err(Error::NotPaginated {
                endpoint: endpoint.name.to_string(),
            });
        }
        endpoint.validate(&params)?;

        let lister = EndpointLister {
            client: self.clone(),
            endpoint,
            _item: PhantomData,
        };
        CursorPager::new(lister, PageRequest::from_params(params))
    }

    // ========================================================================
    // Ingestion Jobs
    // ========================================================================

    /// Fetch one page of ingestion jobs
    pub async fn list_ingestion_jobs(
        &self,
        request: PageRequest,
    ) -> Result<PageResponse<IngestionJob>> {
        let endpoint = endpoints::lookup("list_ingestion_jobs")?;
        self.list_page(endpoint, request).await
    }

    /// Page through ingestion jobs matching `request`
    pub fn ingestion_jobs_pager(&self, request: PageRequest) -> Result<IngestionJobsPager> {
        self.pager("list_ingestion_jobs", request.into_params())
    }

    /// Fetch one ingestion job
    pub async fn get_ingestion_job(&self, job_id: &str) -> Result<IngestionJob> {
        let endpoint = endpoints::lookup("get_ingestion_job")?;
        self.call_endpoint(endpoint, &job_params(job_id), None).await
    }

    /// Submit a new ingestion job
    pub async fn create_ingestion_job(&self, definition: JsonValue) -> Result<IngestionJob> {
        let endpoint = endpoints::lookup("create_ingestion_job")?;
        self.call_endpoint(endpoint, &JsonObject::new(), Some(definition))
            .await
    }

    /// Request cancellation of an ingestion job
    pub async fn cancel_ingestion_job(&self, job_id: &str) -> Result<IngestionJob> {
        let endpoint = endpoints::lookup("cancel_ingestion_job")?;
        self.call_endpoint(endpoint, &job_params(job_id), None).await
    }
}

fn job_params(job_id: &str) -> JsonObject {
    let mut params = JsonObject::new();
    params.insert("job_id".to_string(), JsonValue::String(job_id.to_string()));
    params
}

impl std::fmt::Debug for LakehouseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LakehouseClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("auth", &self.inner.config.auth.kind())
            .finish_non_exhaustive()
    }
}

/// List operation backed by one paginated endpoint
pub struct EndpointLister<T> {
    client: LakehouseClient,
    endpoint: &'static Endpoint,
    _item: PhantomData<fn() -> T>,
}

impl<T> EndpointLister<T> {
    /// The endpoint this lister calls
    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }
}

#[async_trait]
impl<T> ListOperation<T> for EndpointLister<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn list(&self, request: PageRequest) -> Result<PageResponse<T>> {
        self.client.list_page(self.endpoint, request).await
    }
}
