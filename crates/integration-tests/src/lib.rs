//! Shared harness for the end-to-end tests: a full router over an
//! in-memory content store.

#![cfg(feature = "web-axum")]

use std::path::PathBuf;
use std::sync::Arc;

use api_adapters::{build_router, RouterOptions};
use auth_adapters::SharedSecretAuthorizer;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use secrecy::SecretString;
use serde_json::Value;
use services::PortfolioService;
use storage_adapters::SqliteContentStore;
use tower::ServiceExt;

pub const ADMIN_KEY: &str = "jaxelricweb";

/// Body limit the test router is built with.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteContentStore>,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_static_dir(PathBuf::from("does-not-exist")).await
    }

    pub async fn with_static_dir(static_dir: PathBuf) -> anyhow::Result<Self> {
        let store = Arc::new(SqliteContentStore::open("sqlite::memory:").await?);
        let authorizer = Arc::new(SharedSecretAuthorizer::new(SecretString::from(
            ADMIN_KEY.to_string(),
        )));
        let service = Arc::new(PortfolioService::new(store.clone(), store.clone(), authorizer));
        let router = build_router(
            service,
            &RouterOptions {
                static_dir,
                max_body_bytes: MAX_BODY_BYTES,
            },
        );
        Ok(Self { router, store })
    }

    /// Sends one request and returns the status and the body parsed as JSON
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let (status, bytes) = self
            .send_raw(method, uri, headers, body.map(|b| b.to_string()))
            .await?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, json))
    }

    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
        body: Option<String>,
    ) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(body.map(Body::from).unwrap_or_else(Body::empty))?;

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, bytes.to_vec()))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Method::GET, uri, &[], None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Method::POST, uri, &[], Some(body)).await
    }

    pub async fn delete(
        &self,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, Value)> {
        self.send(Method::DELETE, uri, headers, None).await
    }
}
