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

use chrono::prelude::*;

/// ContainerDescriptor describes a bucket returned by a listing.
///
/// Only `name` is guaranteed. The rest is whatever the service reported for this
/// bucket and is carried through as-is.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ContainerDescriptor {
    name: String,

    location: Option<String>,
    creation_date: Option<DateTime<Utc>>,
    storage_class: Option<String>,
}

impl ContainerDescriptor {
    /// Create a new descriptor with bucket name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),

            location: None,
            creation_date: None,
            storage_class: None,
        }
    }

    /// Name of this bucket.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region the bucket lives in, like `oss-cn-hangzhou`.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Set location of this bucket.
    pub fn with_location(mut self, v: impl Into<String>) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Time the bucket was created.
    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    /// Set creation date of this bucket.
    pub fn with_creation_date(mut self, v: DateTime<Utc>) -> Self {
        self.creation_date = Some(v);
        self
    }

    /// Storage class of this bucket, like `Standard` or `IA`.
    pub fn storage_class(&self) -> Option<&str> {
        self.storage_class.as_deref()
    }

    /// Set storage class of this bucket.
    pub fn with_storage_class(mut self, v: impl Into<String>) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    /// Consume self to get the bucket name.
    pub fn into_name(self) -> String {
        self.name
    }
}
