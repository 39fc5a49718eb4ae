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

//! Options module provides options definitions for operations.

/// Options for list containers operations.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ListOptions {
    /// Only buckets whose name starts with `prefix` are returned.
    ///
    /// Filtering happens on the service side; the client only forwards it.
    pub prefix: Option<String>,
    /// Maximum results per request (backend hint).
    ///
    /// This never limits the total number of buckets yielded, only the size of
    /// each page fetched.
    pub limit: Option<usize>,
}

/// Options for create container operations.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CreateOptions {
    /// Region to create the bucket in, like `oss-cn-beijing`.
    ///
    /// If not set, the dispatcher decides.
    pub location: Option<String>,
}
