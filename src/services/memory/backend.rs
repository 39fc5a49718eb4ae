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

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::ops::Bound;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use chrono::Utc;
use log::debug;

use crate::raw::*;
use crate::*;

/// Location used when a bucket is created without one.
const DEFAULT_LOCATION: &str = "oss-cn-hangzhou";
/// Page size used when the request doesn't carry a limit.
const DEFAULT_PAGE_SIZE: usize = 100;

/// In memory dispatcher. (BTreeMap Based)
///
/// Buckets live in process memory and are listed in name order, which matches
/// how oss orders them. Useful for tests and examples.
///
/// - Creating an existing bucket returns [`ErrorKind::AlreadyExists`].
/// - Deleting an unknown bucket returns [`ErrorKind::NotFound`].
/// - Deleting a bucket that holds objects returns [`ErrorKind::NotEmpty`].
/// - With [`MemoryDispatch::with_credential`], any other credential gets
///   [`ErrorKind::PermissionDenied`].
///
/// Clones share the same buckets.
#[derive(Clone)]
pub struct MemoryDispatch {
    inner: Arc<Mutex<BTreeMap<String, Bucket>>>,
    list_requests: Arc<AtomicUsize>,

    page_size: usize,
    credential: Option<(String, String)>,
}

struct Bucket {
    descriptor: ContainerDescriptor,
    objects: BTreeSet<String>,
}

impl Default for MemoryDispatch {
    fn default() -> Self {
        Self {
            inner: Arc::default(),
            list_requests: Arc::default(),

            page_size: DEFAULT_PAGE_SIZE,
            credential: None,
        }
    }
}

impl Debug for MemoryDispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDispatch")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl MemoryDispatch {
    /// Set page size used when requests don't carry a limit.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Only accept requests signed by this credential.
    pub fn with_credential(mut self, access_key_id: &str, access_key_secret: &str) -> Self {
        self.credential = Some((access_key_id.to_string(), access_key_secret.to_string()));
        self
    }

    /// Put an object key into given bucket, so the bucket is no longer empty.
    pub fn put_object(&self, container: &str, key: &str) -> Result<()> {
        let mut buckets = self.buckets();
        let bucket = buckets
            .get_mut(container)
            .ok_or_else(|| new_no_such_bucket_error(container))?;
        bucket.objects.insert(key.to_string());
        Ok(())
    }

    /// Remove an object key from given bucket.
    pub fn delete_object(&self, container: &str, key: &str) -> Result<()> {
        let mut buckets = self.buckets();
        let bucket = buckets
            .get_mut(container)
            .ok_or_else(|| new_no_such_bucket_error(container))?;
        bucket.objects.remove(key);
        Ok(())
    }

    /// Check if given bucket exists.
    pub fn contains(&self, container: &str) -> bool {
        self.buckets().contains_key(container)
    }

    /// Number of page requests served so far.
    pub fn list_requests(&self) -> usize {
        self.list_requests.load(Ordering::SeqCst)
    }

    fn buckets(&self) -> MutexGuard<'_, BTreeMap<String, Bucket>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn authorize(&self, cfg: &ServiceConfig) -> Result<()> {
        match &self.credential {
            Some((id, secret)) if *id != cfg.access_key_id || *secret != cfg.access_key_secret => {
                Err(Error::new(
                    ErrorKind::PermissionDenied,
                    "InvalidAccessKeyId: the access key id or secret is not accepted",
                )
                .with_context("access_key_id", &cfg.access_key_id))
            }
            _ => Ok(()),
        }
    }
}

impl Dispatch for MemoryDispatch {
    fn create_container(
        &self,
        cfg: &ServiceConfig,
        name: &str,
        args: &CreateOptions,
    ) -> Result<()> {
        self.authorize(cfg)?;
        if name.is_empty() {
            return Err(Error::new(
                ErrorKind::Unexpected,
                "InvalidBucketName: bucket name must not be empty",
            ));
        }

        let mut buckets = self.buckets();
        if buckets.contains_key(name) {
            return Err(
                Error::new(ErrorKind::AlreadyExists, "BucketAlreadyExists")
                    .with_context("bucket", name),
            );
        }

        let location = args.location.as_deref().unwrap_or(DEFAULT_LOCATION);
        debug!("memory dispatch create bucket {name} in {location}");

        let descriptor = ContainerDescriptor::new(name)
            .with_location(location)
            .with_creation_date(Utc::now())
            .with_storage_class("Standard");
        buckets.insert(
            name.to_string(),
            Bucket {
                descriptor,
                objects: BTreeSet::new(),
            },
        );
        Ok(())
    }

    fn delete_container(&self, cfg: &ServiceConfig, name: &str) -> Result<()> {
        self.authorize(cfg)?;

        let mut buckets = self.buckets();
        let bucket = buckets
            .get(name)
            .ok_or_else(|| new_no_such_bucket_error(name))?;
        if !bucket.objects.is_empty() {
            return Err(Error::new(
                ErrorKind::NotEmpty,
                "BucketNotEmpty: the bucket you tried to delete is not empty",
            )
            .with_context("bucket", name));
        }

        debug!("memory dispatch delete bucket {name}");
        buckets.remove(name);
        Ok(())
    }

    fn list_containers_page(
        &self,
        cfg: &ServiceConfig,
        req: &PageRequest,
    ) -> Result<ContainerPage> {
        self.list_requests.fetch_add(1, Ordering::SeqCst);
        self.authorize(cfg)?;

        let limit = req.limit.unwrap_or(self.page_size).max(1);
        let prefix = req.prefix.as_deref().unwrap_or_default();
        let start = match req.marker.as_deref() {
            Some(marker) => Bound::Excluded(marker),
            None => Bound::Unbounded,
        };

        let buckets = self.buckets();
        let mut matched = buckets
            .range::<str, _>((start, Bound::Unbounded))
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, bucket)| bucket.descriptor.clone());

        let containers: Vec<ContainerDescriptor> = matched.by_ref().take(limit).collect();
        let truncated = matched.next().is_some();
        let next_marker = if truncated {
            containers.last().map(|v| v.name().to_string())
        } else {
            None
        };

        Ok(ContainerPage {
            containers,
            next_marker,
            truncated,
        })
    }
}

fn new_no_such_bucket_error(name: &str) -> Error {
    Error::new(
        ErrorKind::NotFound,
        "NoSuchBucket: the specified bucket does not exist",
    )
    .with_context("bucket", name)
}
