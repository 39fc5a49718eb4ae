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

//! ossclient manages buckets of Aliyun Object Storage Service (OSS).
//!
//! Configure endpoint and credentials once, then list, create, delete and get
//! handles of buckets without passing them again.
//!
//! - Requests go through a [`Dispatch`][raw::Dispatch], which owns signing and
//!   transport. [`services::MemoryDispatch`] keeps buckets in memory.
//! - Bucket listing is lazy, see [`ContainerLister`].
//!
//! # Quick Start
//!
//! ```
//! use ossclient::services::MemoryDispatch;
//! use ossclient::Client;
//! use ossclient::CreateOptions;
//! use ossclient::Result;
//!
//! fn main() -> Result<()> {
//!     let client = Client::builder()
//!         .endpoint("oss-cn-hangzhou.aliyuncs.com")
//!         .access_key_id("access_key_id")
//!         .access_key_secret("access_key_secret")
//!         .build(MemoryDispatch::default())?;
//!
//!     // Create
//!     client.create_container_with(
//!         "my-bucket",
//!         CreateOptions {
//!             location: Some("oss-cn-beijing".to_string()),
//!         },
//!     )?;
//!
//!     // List
//!     for bucket in client.list_containers()? {
//!         let bucket = bucket?;
//!         println!("{} in {:?}", bucket.name(), bucket.location());
//!     }
//!
//!     // Get a handle, no request is sent.
//!     let bucket = client.container("my-bucket");
//!     assert_eq!(bucket.name(), "my-bucket");
//!
//!     // Delete
//!     client.delete_container("my-bucket")?;
//!
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]
// Deny unused qualifications.
#![deny(unused_qualifications)]

// Private module with public types, they will be accessed via `ossclient::Xxxx`
mod types;
pub use types::*;

// Public modules, they will be accessed like `ossclient::services::Xxxx`
pub mod raw;
pub mod services;
