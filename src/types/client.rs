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
use std::sync::Arc;

use log::debug;

use crate::raw::*;
use crate::*;

/// Client is the entry for all bucket management APIs.
///
/// Endpoint and credentials are given once at build time and reused by every
/// operation. Client is cheap to clone, clones share the same [`ConfigStore`].
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// use ossclient::services::MemoryDispatch;
/// use ossclient::Client;
///
/// # fn main() -> Result<()> {
/// let client = Client::builder()
///     .endpoint("oss-cn-hangzhou.aliyuncs.com")
///     .access_key_id("access_key_id")
///     .access_key_secret("access_key_secret")
///     .build(MemoryDispatch::default())?;
///
/// client.create_container("logs")?;
/// for bucket in client.list_containers()? {
///     println!("{}", bucket?.name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    dispatcher: Dispatcher,
    store: Arc<ConfigStore>,
}

impl Client {
    pub(crate) fn from_parts(dispatcher: Dispatcher, store: Arc<ConfigStore>) -> Self {
        Self { dispatcher, store }
    }

    /// Create a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Build a client from an options map.
    ///
    /// Required keys are `endpoint`, `access_key_id` and `access_key_secret`,
    /// `cname` is optional. All missing keys are reported in one
    /// [`ErrorKind::MissingArguments`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Result;
    /// use std::collections::HashMap;
    ///
    /// use ossclient::services::MemoryDispatch;
    /// use ossclient::Client;
    ///
    /// # fn main() -> Result<()> {
    /// let map = HashMap::from([
    ///     ("endpoint".to_string(), "my-domain.com".to_string()),
    ///     ("access_key_id".to_string(), "id".to_string()),
    ///     ("access_key_secret".to_string(), "secret".to_string()),
    ///     ("cname".to_string(), "true".to_string()),
    /// ]);
    /// let client = Client::from_map(map, MemoryDispatch::default())?;
    /// assert!(!client.info()?.can_list_containers());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_map(map: HashMap<String, String>, dispatcher: impl Dispatch) -> Result<Self> {
        ClientBuilder::from_map(map)?.build(dispatcher)
    }

    /// Get current information of this client.
    pub fn info(&self) -> Result<ClientInfo> {
        let cfg = self
            .store
            .snapshot()
            .map_err(|err| err.with_operation(Operation::Info))?;

        Ok(ClientInfo {
            endpoint: cfg.endpoint,
            cname: cfg.cname,
        })
    }

    /// List all buckets.
    ///
    /// This function will create a new [`ContainerLister`], see
    /// [`Client::list_containers_with`] for details.
    pub fn list_containers(&self) -> Result<ContainerLister> {
        self.list_containers_with(ListOptions::default())
    }

    /// List buckets with options.
    ///
    /// # Notes
    ///
    /// - Returns [`ErrorKind::Unsupported`] for cname endpoints, nothing is sent in this case.
    /// - The returned lister is lazy: pages are fetched while iterating, and only when
    ///   the previous page has been consumed.
    /// - Every call starts a fresh listing from the first page.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Result;
    /// use ossclient::Client;
    /// use ossclient::ListOptions;
    ///
    /// # fn test(client: Client) -> Result<()> {
    /// let lister = client.list_containers_with(ListOptions {
    ///     prefix: Some("logs-".to_string()),
    ///     ..Default::default()
    /// })?;
    /// for bucket in lister {
    ///     let bucket = bucket?;
    ///     println!("{} in {:?}", bucket.name(), bucket.location());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_containers_with(&self, args: ListOptions) -> Result<ContainerLister> {
        let cfg = self
            .store
            .snapshot()
            .map_err(|err| err.with_operation(Operation::ListContainers))?;

        if cfg.cname {
            return Err(Error::new(
                ErrorKind::Unsupported,
                "cannot list containers for a custom-domain endpoint",
            )
            .with_operation(Operation::ListContainers)
            .with_context("endpoint", &cfg.endpoint));
        }

        debug!("list containers with {args:?}");
        Ok(ContainerLister::new(ContainerPageList::new(
            self.dispatcher.clone(),
            cfg,
            args,
        )))
    }

    /// Create a bucket.
    pub fn create_container(&self, name: &str) -> Result<()> {
        self.create_container_with(name, CreateOptions::default())
    }

    /// Create a bucket with options.
    ///
    /// `name` is passed to the dispatcher as-is, errors from the dispatcher are returned
    /// without change.
    pub fn create_container_with(&self, name: &str, args: CreateOptions) -> Result<()> {
        let cfg = self
            .store
            .snapshot()
            .map_err(|err| err.with_operation(Operation::CreateContainer))?;

        debug!("create container {name} with {args:?}");
        self.dispatcher.create_container(&cfg, name, &args)
    }

    /// Delete a bucket.
    ///
    /// # Notes
    ///
    /// Services refuse to delete a bucket that still holds objects, dispatchers report
    /// it as [`ErrorKind::NotEmpty`].
    pub fn delete_container(&self, name: &str) -> Result<()> {
        let cfg = self
            .store
            .snapshot()
            .map_err(|err| err.with_operation(Operation::DeleteContainer))?;

        debug!("delete container {name}");
        self.dispatcher.delete_container(&cfg, name)
    }

    /// Get a handle of the bucket named `name`.
    ///
    /// No request is sent, the bucket may not exist.
    pub fn container(&self, name: &str) -> ContainerHandle {
        ContainerHandle::new(name)
    }
}

/// Metadata about a [`Client`]'s current config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientInfo {
    endpoint: String,
    cname: bool,
}

impl ClientInfo {
    /// Endpoint in use.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the endpoint is a custom domain.
    pub fn cname(&self) -> bool {
        self.cname
    }

    /// Whether [`Client::list_containers`] is supported.
    pub fn can_list_containers(&self) -> bool {
        !self.cname
    }
}
