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
use std::sync::Arc;

use crate::*;

/// Dispatcher is the type erased [`Dispatch`] held by [`Client`].
pub type Dispatcher = Arc<dyn Dispatch>;

/// Dispatch is the seam between [`Client`] and the service.
///
/// Implementers are responsible for everything on the wire: signing, sending,
/// parsing and retrying. Errors returned here are handed back to users without
/// any change, so implementers should pick the [`ErrorKind`] carefully:
///
/// - Bucket not found: [`ErrorKind::NotFound`]
/// - Bucket exists on create: [`ErrorKind::AlreadyExists`]
/// - Bucket still holds objects on delete: [`ErrorKind::NotEmpty`]
/// - Credential rejected: [`ErrorKind::PermissionDenied`]
///
/// Every call carries the [`ServiceConfig`] read from the client's store at call time.
pub trait Dispatch: Debug + Send + Sync + 'static {
    /// Create a bucket named `name`.
    fn create_container(
        &self,
        cfg: &ServiceConfig,
        name: &str,
        args: &CreateOptions,
    ) -> Result<()>;

    /// Delete the bucket named `name`.
    fn delete_container(&self, cfg: &ServiceConfig, name: &str) -> Result<()>;

    /// Fetch one page of buckets.
    fn list_containers_page(
        &self,
        cfg: &ServiceConfig,
        req: &PageRequest,
    ) -> Result<ContainerPage>;
}

impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn create_container(
        &self,
        cfg: &ServiceConfig,
        name: &str,
        args: &CreateOptions,
    ) -> Result<()> {
        self.as_ref().create_container(cfg, name, args)
    }

    fn delete_container(&self, cfg: &ServiceConfig, name: &str) -> Result<()> {
        self.as_ref().delete_container(cfg, name)
    }

    fn list_containers_page(
        &self,
        cfg: &ServiceConfig,
        req: &PageRequest,
    ) -> Result<ContainerPage> {
        self.as_ref().list_containers_page(cfg, req)
    }
}

/// PageRequest is the args of [`Dispatch::list_containers_page`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PageRequest {
    /// Only return buckets whose name starts with `prefix`.
    pub prefix: Option<String>,
    /// Continuation marker returned by the previous page, `None` for the first page.
    pub marker: Option<String>,
    /// Page size hint.
    pub limit: Option<usize>,
}

/// ContainerPage is one page of a bucket listing.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ContainerPage {
    /// Buckets in service order.
    pub containers: Vec<ContainerDescriptor>,
    /// Marker to fetch the next page.
    pub next_marker: Option<String>,
    /// Whether more pages exist.
    pub truncated: bool,
}
