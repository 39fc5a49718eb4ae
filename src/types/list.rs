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

use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

use log::debug;

use crate::raw::*;
use crate::*;

/// ContainerPageList fetches bucket pages through a [`Dispatch`].
pub(crate) struct ContainerPageList {
    dispatcher: Dispatcher,
    cfg: ServiceConfig,

    prefix: Option<String>,
    limit: Option<usize>,
}

impl ContainerPageList {
    pub(crate) fn new(dispatcher: Dispatcher, cfg: ServiceConfig, args: ListOptions) -> Self {
        Self {
            dispatcher,
            cfg,
            prefix: args.prefix,
            limit: args.limit,
        }
    }
}

impl PageList for ContainerPageList {
    type Entry = ContainerDescriptor;

    fn next_page(&self, ctx: &mut PageContext<ContainerDescriptor>) -> Result<()> {
        let req = PageRequest {
            prefix: self.prefix.clone(),
            marker: if ctx.token.is_empty() {
                None
            } else {
                Some(ctx.token.clone())
            },
            limit: self.limit,
        };
        debug!(
            "list containers page with prefix: {:?}, marker: {:?}",
            req.prefix, req.marker
        );

        let page = self.dispatcher.list_containers_page(&self.cfg, &req)?;
        debug!(
            "list containers page got {} containers, truncated: {}",
            page.containers.len(),
            page.truncated
        );

        ctx.done = !page.truncated;
        if !ctx.done {
            // Marker is "start after this bucket", the last name works when the service
            // omits next_marker.
            let marker = page
                .next_marker
                .filter(|v| !v.is_empty())
                .or_else(|| page.containers.last().map(|v| v.name().to_string()))
                .ok_or_else(|| {
                    Error::new(
                        ErrorKind::Unexpected,
                        "truncated page carries neither next marker nor containers",
                    )
                    .with_operation(Operation::ListerNext)
                    .with_context("endpoint", &self.cfg.endpoint)
                })?;
            ctx.token = marker;
        }

        ctx.entries.extend(page.containers);
        Ok(())
    }
}

/// ContainerLister is designed to list buckets in a blocking manner.
///
/// Users can construct ContainerLister by [`Client::list_containers`] or
/// [`Client::list_containers_with`].
///
/// - ContainerLister implements `Iterator<Item = Result<ContainerDescriptor>>`.
/// - Nothing is sent before the first call to `next`.
/// - ContainerLister will return `None` if there is no more buckets or error has been returned.
pub struct ContainerLister {
    lister: PageLister<ContainerPageList>,
    errored: bool,
}

impl Debug for ContainerLister {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerLister")
            .field("errored", &self.errored)
            .finish_non_exhaustive()
    }
}

impl ContainerLister {
    pub(crate) fn new(lister: ContainerPageList) -> Self {
        Self {
            lister: PageLister::new(lister),
            errored: false,
        }
    }
}

impl Iterator for ContainerLister {
    type Item = Result<ContainerDescriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        // Returns `None` if we have errored.
        if self.errored {
            return None;
        }

        match self.lister.next() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => None,
            Err(err) => {
                self.errored = true;
                Some(Err(err))
            }
        }
    }
}
