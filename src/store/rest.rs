//! REST implementation of [`DocumentStore`].
//!
//! Speaks the store's document API: `GET`/`PUT`/`PATCH`/`DELETE` on
//! `{base}/v1/{collection}/{id}` and `GET` on `{base}/v1/{collection}` with
//! an optional `field`/`value` equality filter. All requests carry the
//! service key as a bearer token.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config;
use crate::error::{CampusError, Result};
use crate::store::DocumentStore;

pub struct RestStore {
    base: String,
    service_key: Option<String>,
    client: Client,
}

impl RestStore {
    /// Create a store client for the given base URL.
    ///
    /// `service_key`, when present, is sent as `Authorization: Bearer ...`
    /// on every request.
    pub fn new(base: impl Into<String>, service_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base: base.into().trim_end_matches('/').to_string(),
            service_key,
            client,
        })
    }

    fn doc_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}/{}", self.base, config::STORE_API_VERSION, collection, id)
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}/{}", self.base, config::STORE_API_VERSION, collection)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.service_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    /// Parse a collection listing response into `(id, document)` pairs.
    ///
    /// The listing endpoint returns a JSON array of documents, each carrying
    /// its id in an `"id"` field alongside the document data.
    fn parse_listing(body: Value) -> Result<Vec<(String, Value)>> {
        let docs = body
            .as_array()
            .ok_or_else(|| CampusError::InvalidArgument("expected a JSON array from the listing endpoint".into()))?;

        let mut out = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = doc
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            if id.is_empty() {
                continue;
            }
            out.push((id, doc.clone()));
        }
        Ok(out)
    }
}

impl DocumentStore for RestStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let resp = self
            .authorize(self.client.get(self.doc_url(collection, id)))
            .send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp.error_for_status()?;
        Ok(Some(resp.json()?))
    }

    fn set(&self, collection: &str, id: &str, doc: &Value) -> Result<()> {
        self.authorize(self.client.put(self.doc_url(collection, id)))
            .json(doc)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn merge(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        self.authorize(self.client.patch(self.doc_url(collection, id)))
            .json(fields)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let resp = self
            .authorize(self.client.delete(self.doc_url(collection, id)))
            .send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        resp.error_for_status()?;
        Ok(())
    }

    fn list(&self, collection: &str) -> Result<Vec<(String, Value)>> {
        let resp = self
            .authorize(self.client.get(self.collection_url(collection)))
            .send()?
            .error_for_status()?;
        Self::parse_listing(resp.json()?)
    }

    fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Value)>> {
        // Equality filters go over the wire as strings; non-string values
        // use their JSON rendering.
        let rendered = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        let resp = self
            .authorize(
                self.client
                    .get(self.collection_url(collection))
                    .query(&[("field", field), ("value", rendered.as_str())]),
            )
            .send()?
            .error_for_status()?;
        Self::parse_listing(resp.json()?)
    }
}
