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

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

mod config;
pub use config::ClientConfig;
pub use config::ConfigField;
pub use config::ConfigStore;
pub use config::ConfigValue;
pub use config::ServiceConfig;

mod options;
pub use options::*;

mod descriptor;
pub use descriptor::ContainerDescriptor;

mod container;
pub use container::ContainerHandle;

mod list;
pub(crate) use list::ContainerPageList;
pub use list::ContainerLister;

mod builder;
pub use builder::ClientBuilder;

mod client;
pub use client::Client;
pub use client::ClientInfo;
