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

use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::raw::*;
use crate::*;

/// Builder for [`Client`].
///
/// # Configuration
///
/// - `endpoint`: [required] Set the endpoint, either a standard one like
///   `oss-cn-hangzhou.aliyuncs.com` or a bound custom domain like `my-domain.com`.
/// - `access_key_id`: [required] Set the access key id.
/// - `access_key_secret`: [required] Set the access key secret.
/// - `cname`: Set whether `endpoint` is a custom domain, default to `false`.
///
/// # Example
///
/// ```
/// use ossclient::services::MemoryDispatch;
/// use ossclient::Client;
/// use ossclient::Result;
///
/// fn main() -> Result<()> {
///     let client: Client = Client::builder()
///         .endpoint("oss-cn-hangzhou.aliyuncs.com")
///         .access_key_id("access_key_id")
///         .access_key_secret("access_key_secret")
///         .build(MemoryDispatch::default())?;
///
///     client.create_container("my-bucket")?;
///     let bucket = client.container("my-bucket");
///     assert_eq!(bucket.name(), "my-bucket");
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl Debug for ClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from config.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Create a builder from an options map.
    ///
    /// Keys are matched case-insensitively, `accessKeyId` and `accessKeySecret` are
    /// accepted as aliases. Unknown keys are ignored.
    pub fn from_map(map: HashMap<String, String>) -> Result<Self> {
        let config = ClientConfig::deserialize(ConfigDeserializer::new(map))
            .map_err(new_config_deserialize_error)?;

        Ok(Self::from_config(config))
    }

    /// Set endpoint of this client.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        if !endpoint.is_empty() {
            self.config.endpoint = Some(endpoint.to_string())
        }

        self
    }

    /// Set whether endpoint is a custom domain bound to a single bucket.
    ///
    /// Listing buckets is unsupported on such endpoints.
    pub fn cname(mut self, cname: bool) -> Self {
        self.config.cname = cname;
        self
    }

    /// Set access_key_id of this client.
    pub fn access_key_id(mut self, v: &str) -> Self {
        if !v.is_empty() {
            self.config.access_key_id = Some(v.to_string())
        }

        self
    }

    /// Set access_key_secret of this client.
    pub fn access_key_secret(mut self, v: &str) -> Self {
        if !v.is_empty() {
            self.config.access_key_secret = Some(v.to_string())
        }

        self
    }

    /// Build a client with its own [`ConfigStore`].
    pub fn build(self, dispatcher: impl Dispatch) -> Result<Client> {
        self.build_with_store(dispatcher, Arc::new(ConfigStore::new()))
    }

    /// Build a client on a shared [`ConfigStore`].
    ///
    /// The store is overwritten with this builder's config. Clients built earlier
    /// on the same store will see the new config from their next operation on.
    pub fn build_with_store(
        self,
        dispatcher: impl Dispatch,
        store: Arc<ConfigStore>,
    ) -> Result<Client> {
        debug!("client build started: {:?}", &self);

        let (endpoint, access_key_id, access_key_secret) = self.validate()?;
        debug!("client use endpoint: {endpoint}, cname: {}", self.config.cname);

        store.set_endpoint(endpoint, self.config.cname);
        store.set_credentials(access_key_id, access_key_secret);

        debug!("client build finished");
        Ok(Client::from_parts(Arc::new(dispatcher), store))
    }

    /// Check all required arguments at once so users can fix them in one go.
    fn validate(&self) -> Result<(&str, &str, &str)> {
        let required = [
            // Trim trailing `/` so that we can accept `http://127.0.0.1:9000/`
            (
                "endpoint",
                self.config
                    .endpoint
                    .as_deref()
                    .map(|v| v.trim_end_matches('/')),
            ),
            ("access_key_id", self.config.access_key_id.as_deref()),
            ("access_key_secret", self.config.access_key_secret.as_deref()),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, v)| v.map_or(true, str::is_empty))
            .map(|(k, _)| *k)
            .collect();

        match required {
            [(_, Some(endpoint)), (_, Some(id)), (_, Some(secret))] if missing.is_empty() => {
                Ok((endpoint, id, secret))
            }
            _ => Err(Error::new(
                ErrorKind::MissingArguments,
                format!("Missing arguments: {}", missing.join(", ")),
            )
            .with_operation(Operation::Build)),
        }
    }
}
