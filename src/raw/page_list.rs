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

use std::collections::VecDeque;

use crate::*;

/// PageList is used to implement listing based on API supporting pagination. By implementing
/// PageList, callers don't need to care about the details of page list.
///
/// - Listers impl `PageList`
/// - [`PageLister`] drives it one entry at a time
pub trait PageList: Send + 'static {
    /// Entry yielded by this lister.
    type Entry: Send + 'static;

    /// next_page is used to fetch next page of entries from underlying storage.
    fn next_page(&self, ctx: &mut PageContext<Self::Entry>) -> Result<()>;
}

/// PageContext is the context passing between `PageList`.
///
/// [`PageLister`] will init the PageContext, and implementer of [`PageList`] should fill the `PageContext`
/// based on their needs.
///
/// - Set `done` to `true` if all page have been fetched.
/// - Update `token` if there is more page to fetch. `token` is not exposed to users, it's internal used only.
/// - Push back into the entries for each entry fetched from underlying storage.
///
/// NOTE: `entries` is a `VecDeque` to avoid unnecessary memory allocation. Only `push_back` is allowed.
pub struct PageContext<T> {
    /// done is used to indicate whether the list operation is done.
    pub done: bool,
    /// token is used by underlying storage services to fetch next page.
    ///
    /// Empty before the first page.
    pub token: String,
    /// entries is used to store entries fetched from underlying storage.
    pub entries: VecDeque<T>,
}

impl<T> Default for PageContext<T> {
    fn default() -> Self {
        Self {
            done: false,
            token: String::new(),
            entries: VecDeque::new(),
        }
    }
}

/// PageLister yields entries of a [`PageList`] one by one.
///
/// No page is fetched until the first call to [`PageLister::next`], and a new page is
/// fetched only after all buffered entries have been returned.
pub struct PageLister<L: PageList> {
    lister: L,
    ctx: PageContext<L::Entry>,
}

impl<L> PageLister<L>
where
    L: PageList,
{
    /// Create a new PageLister.
    pub fn new(l: L) -> Self {
        Self {
            lister: l,
            ctx: PageContext::default(),
        }
    }

    /// Fetch next entry.
    ///
    /// `Ok(None)` means all pages have been returned. Any following call
    /// to `next` will always get the same result.
    pub fn next(&mut self) -> Result<Option<L::Entry>> {
        loop {
            if let Some(entry) = self.ctx.entries.pop_front() {
                return Ok(Some(entry));
            }
            if self.ctx.done {
                return Ok(None);
            }

            self.lister.next_page(&mut self.ctx)?;
        }
    }
}
