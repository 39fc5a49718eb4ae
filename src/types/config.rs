// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use serde::Deserialize;

use crate::raw::*;
use crate::*;

/// Config for building a [`Client`].
///
/// This is the "options map" form of [`ClientBuilder`]: every field is optional
/// here, required ones are checked in [`ClientBuilder::build`].
#[derive(Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Endpoint of oss, like `oss-cn-hangzhou.aliyuncs.com` or a bound
    /// custom domain like `my-domain.com`.
    pub endpoint: Option<String>,
    /// Whether `endpoint` is a custom domain (CNAME) bound to a single bucket.
    pub cname: bool,

    /// Access key id for oss.
    #[serde(alias = "accesskeyid")]
    pub access_key_id: Option<String>,
    /// Access key secret for oss.
    #[serde(alias = "accesskeysecret")]
    pub access_key_secret: Option<String>,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("cname", &self.cname)
            .field("access_key_id", &self.access_key_id)
            .finish_non_exhaustive()
    }
}

/// ServiceConfig is a fully populated config read from [`ConfigStore`].
///
/// Dispatchers receive it on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Endpoint of oss.
    pub endpoint: String,
    /// Whether `endpoint` is a custom domain.
    pub cname: bool,
    /// Access key id for oss.
    pub access_key_id: String,
    /// Access key secret for oss.
    pub access_key_secret: String,
}

impl Debug for ServiceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("endpoint", &self.endpoint)
            .field("cname", &self.cname)
            .field("access_key_id", &self.access_key_id)
            .finish_non_exhaustive()
    }
}

/// ConfigField names a field stored in [`ConfigStore`].
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ConfigField {
    /// The endpoint.
    Endpoint,
    /// Whether the endpoint is a custom domain.
    Cname,
    /// The access key id.
    AccessKeyId,
    /// The access key secret.
    AccessKeySecret,
}

impl ConfigField {
    /// Convert self into static str.
    pub fn into_static(self) -> &'static str {
        match self {
            ConfigField::Endpoint => "endpoint",
            ConfigField::Cname => "cname",
            ConfigField::AccessKeyId => "access_key_id",
            ConfigField::AccessKeySecret => "access_key_secret",
        }
    }
}

impl Display for ConfigField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// ConfigValue is the value returned by [`ConfigStore::get`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConfigValue {
    /// A string field.
    Str(String),
    /// A bool field.
    Bool(bool),
}

impl ConfigValue {
    /// Return the bool value, `None` for string fields.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            ConfigValue::Str(_) => None,
        }
    }
}

#[derive(Default)]
struct ConfigState {
    endpoint: Option<String>,
    cname: Option<bool>,
    access_key_id: Option<String>,
    access_key_secret: Option<String>,
}

/// ConfigStore holds endpoint and credentials for clients.
///
/// Every [`Client`] built by [`ClientBuilder::build`] owns a fresh store. Use
/// [`ClientBuilder::build_with_store`] to share one store between clients: the
/// last client built wins for all of them, including clients built earlier.
///
/// Endpoint and credentials are set as pairs; reading a field before its pair is
/// set returns [`ErrorKind::Uninitialized`].
#[derive(Default)]
pub struct ConfigStore {
    state: RwLock<ConfigState>,
}

impl Debug for ConfigStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("ConfigStore")
            .field("endpoint", &state.endpoint)
            .field("cname", &state.cname)
            .field("access_key_id", &state.access_key_id)
            .finish_non_exhaustive()
    }
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ConfigState is plain data, a panic while holding the lock can't leave it
    // half-updated, so poison is ignored.
    fn read(&self) -> RwLockReadGuard<'_, ConfigState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set endpoint and whether it's a custom domain.
    ///
    /// The endpoint is stored as-is.
    pub fn set_endpoint(&self, endpoint: &str, cname: bool) {
        let mut state = self.write();
        state.endpoint = Some(endpoint.to_string());
        state.cname = Some(cname);
    }

    /// Set the access key pair.
    pub fn set_credentials(&self, access_key_id: &str, access_key_secret: &str) {
        let mut state = self.write();
        state.access_key_id = Some(access_key_id.to_string());
        state.access_key_secret = Some(access_key_secret.to_string());
    }

    /// Get current value of given field.
    pub fn get(&self, field: ConfigField) -> Result<ConfigValue> {
        let state = self.read();
        let value = match field {
            ConfigField::Endpoint => state.endpoint.clone().map(ConfigValue::Str),
            ConfigField::Cname => state.cname.map(ConfigValue::Bool),
            ConfigField::AccessKeyId => state.access_key_id.clone().map(ConfigValue::Str),
            ConfigField::AccessKeySecret => state.access_key_secret.clone().map(ConfigValue::Str),
        };

        value.ok_or_else(|| new_uninitialized_error(field))
    }

    /// Get current endpoint.
    pub fn endpoint(&self) -> Result<String> {
        self.read()
            .endpoint
            .clone()
            .ok_or_else(|| new_uninitialized_error(ConfigField::Endpoint))
    }

    /// Check if current endpoint is a custom domain.
    pub fn cname(&self) -> Result<bool> {
        self.read()
            .cname
            .ok_or_else(|| new_uninitialized_error(ConfigField::Cname))
    }

    /// Get current access key id.
    pub fn access_key_id(&self) -> Result<String> {
        self.read()
            .access_key_id
            .clone()
            .ok_or_else(|| new_uninitialized_error(ConfigField::AccessKeyId))
    }

    /// Get current access key secret.
    pub fn access_key_secret(&self) -> Result<String> {
        self.read()
            .access_key_secret
            .clone()
            .ok_or_else(|| new_uninitialized_error(ConfigField::AccessKeySecret))
    }

    /// Read all fields at once.
    ///
    /// Fields are read under the same lock, so the result never mixes two writers.
    pub fn snapshot(&self) -> Result<ServiceConfig> {
        let state = self.read();

        let endpoint = state
            .endpoint
            .clone()
            .ok_or_else(|| new_uninitialized_error(ConfigField::Endpoint))?;
        let cname = state
            .cname
            .ok_or_else(|| new_uninitialized_error(ConfigField::Cname))?;
        let access_key_id = state
            .access_key_id
            .clone()
            .ok_or_else(|| new_uninitialized_error(ConfigField::AccessKeyId))?;
        let access_key_secret = state
            .access_key_secret
            .clone()
            .ok_or_else(|| new_uninitialized_error(ConfigField::AccessKeySecret))?;

        Ok(ServiceConfig {
            endpoint,
            cname,
            access_key_id,
            access_key_secret,
        })
    }
}

fn new_uninitialized_error(field: ConfigField) -> Error {
    Error::new(ErrorKind::Uninitialized, "config field is read before set")
        .with_operation(Operation::ConfigGet)
        .with_context("field", field)
}
