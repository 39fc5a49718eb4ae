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

use std::fmt::Display;
use std::fmt::Formatter;

/// Operation is the name for APIs in [`Client`][crate::Client] and its collaborators.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum Operation {
    /// Operation for [`crate::Client::info`]
    #[default]
    Info,
    /// Operation for [`crate::ClientBuilder::build`]
    Build,
    /// Operation for [`crate::Client::list_containers`]
    ListContainers,
    /// Operation for [`crate::ContainerLister::next`]
    ListerNext,
    /// Operation for [`crate::Client::create_container`]
    CreateContainer,
    /// Operation for [`crate::Client::delete_container`]
    DeleteContainer,
    /// Operation for [`crate::ConfigStore::get`]
    ConfigGet,
}

impl Operation {
    /// Convert self into static str.
    pub fn into_static(self) -> &'static str {
        self.into()
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

impl From<Operation> for &'static str {
    fn from(v: Operation) -> &'static str {
        match v {
            Operation::Info => "info",
            Operation::Build => "build",
            Operation::ListContainers => "list_containers",
            Operation::ListerNext => "ContainerLister::next",
            Operation::CreateContainer => "create_container",
            Operation::DeleteContainer => "delete_container",
            Operation::ConfigGet => "ConfigStore::get",
        }
    }
}

impl From<Operation> for String {
    fn from(v: Operation) -> Self {
        v.into_static().to_string()
    }
}
