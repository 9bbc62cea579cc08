// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Blocking client for the hosted finance API.
//!
//! Every request carries the stored token in an `auth-token` header. Any
//! transport, status or decoding failure surfaces as
//! [`FinanceError::UpstreamUnavailable`].

use crate::error::{FinanceError, Result};
use crate::finance::aggregate::ExpenseWindow;
use crate::models::{Expense, Goal, Investment, InvestmentType};
use crate::source::RecordSource;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

const TOKEN_HEADER: &str = "auth-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Expenses,
    Goals,
    Investments,
}

impl Resource {
    fn path(&self) -> &'static str {
        match self {
            Resource::Expenses => "/api/expenses",
            Resource::Goals => "/api/goals",
            Resource::Investments => "/api/investments",
        }
    }
}

pub struct RemoteClient {
    base_url: String,
    token: String,
    client: Client,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserProfile {
    #[serde(default)]
    investment_types: Vec<InvestmentType>,
}

impl RemoteClient {
    pub fn new(base_url: &str, token: &str) -> anyhow::Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FinanceError::invalid("remote url", "must not be empty").into());
        }
        Ok(RemoteClient {
            base_url,
            token: token.trim().to_string(),
            client: crate::utils::http_client()?,
        })
    }

    pub fn url(&self, resource: Resource, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}{}/{}", self.base_url, resource.path(), id.trim()),
            None => format!("{}{}", self.base_url, resource.path()),
        }
    }

    fn authed(&self, rb: RequestBuilder) -> RequestBuilder {
        rb.header(TOKEN_HEADER, &self.token)
    }

    fn send<T: DeserializeOwned>(&self, rb: RequestBuilder, what: &str) -> Result<T> {
        tracing::debug!(what, "remote request");
        let resp = self
            .authed(rb)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::warn!(what, error = %e, "remote request failed");
                FinanceError::UpstreamUnavailable(format!("{}: {}", what, e))
            })?;
        resp.json::<T>()
            .map_err(|e| FinanceError::UpstreamUnavailable(format!("{}: {}", what, e)))
    }

    pub fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let rb = self.client.get(self.url(resource, None));
        self.send(rb, resource.path())
    }

    pub fn create<B: Serialize>(&self, resource: Resource, body: &B) -> Result<serde_json::Value> {
        let rb = self.client.post(self.url(resource, None)).json(body);
        self.send(rb, resource.path())
    }

    pub fn update<B: Serialize>(
        &self,
        resource: Resource,
        id: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let rb = self.client.put(self.url(resource, Some(id))).json(body);
        self.send(rb, resource.path())
    }

    pub fn delete(&self, resource: Resource, id: &str) -> Result<serde_json::Value> {
        let rb = self.client.delete(self.url(resource, Some(id)));
        self.send(rb, resource.path())
    }

    pub fn investment_types_url(&self) -> String {
        format!("{}/investment-types", self.url(Resource::Investments, None))
    }

    /// Declares a type on the account. The API has no matching delete.
    pub fn create_investment_type(&self, name: &str) -> Result<serde_json::Value> {
        let body = serde_json::json!({ "name": name.trim() });
        let rb = self.client.post(self.investment_types_url()).json(&body);
        self.send(rb, "/api/investments/investment-types")
    }
}

pub fn expense_query(window: &ExpenseWindow) -> Vec<(&'static str, String)> {
    let mut q = vec![("year", window.year.to_string())];
    if let Some(m) = window.month.number() {
        q.push(("month", m.to_string()));
    }
    q
}

impl RecordSource for RemoteClient {
    fn expenses(&self, window: &ExpenseWindow) -> Result<Vec<Expense>> {
        let rb = self
            .client
            .get(self.url(Resource::Expenses, None))
            .query(&expense_query(window));
        self.send(rb, Resource::Expenses.path())
    }

    fn goals(&self) -> Result<Vec<Goal>> {
        self.list(Resource::Goals)
    }

    fn investments(&self) -> Result<Vec<Investment>> {
        self.list(Resource::Investments)
    }

    fn investment_types(&self) -> Result<Vec<InvestmentType>> {
        let rb = self
            .client
            .get(format!("{}/api/auth/getuser", self.base_url));
        let user: UserProfile = self.send(rb, "/api/auth/getuser")?;
        Ok(user.investment_types)
    }
}
