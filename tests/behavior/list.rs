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

use std::collections::HashSet;

use anyhow::Result;
use log::debug;
use ossclient::raw::*;
use ossclient::services::MemoryDispatch;
use ossclient::*;
use pretty_assertions::assert_eq;

use super::utils::*;

#[test]
fn test_list_concatenates_pages_in_order() -> Result<()> {
    init_logger();

    let dispatch = RecordingDispatch::with_pages(vec![
        page(&["a", "b"], Some("M1"), true),
        page(&["c"], None, false),
    ]);
    let client = new_client(dispatch.clone());

    let names = client
        .list_containers()?
        .map(|v| v.map(ContainerDescriptor::into_name))
        .collect::<ossclient::Result<Vec<_>>>()?;
    assert_eq!(names, vec!["a", "b", "c"]);

    assert_eq!(
        dispatch.calls(),
        vec![
            Call::List(PageRequest::default()),
            Call::List(PageRequest {
                marker: Some("M1".to_string()),
                ..Default::default()
            }),
        ]
    );
    Ok(())
}

#[test]
fn test_list_is_lazy() -> Result<()> {
    let dispatch = RecordingDispatch::with_pages(vec![
        page(&["a", "b"], Some("b"), true),
        page(&["c"], None, false),
    ]);
    let client = new_client(dispatch.clone());

    let mut lister = client.list_containers()?;
    assert_eq!(dispatch.list_calls(), 0);

    assert_eq!(lister.next().transpose()?.map(|v| v.into_name()), Some("a".to_string()));
    assert_eq!(dispatch.list_calls(), 1);
    assert_eq!(lister.next().transpose()?.map(|v| v.into_name()), Some("b".to_string()));
    assert_eq!(dispatch.list_calls(), 1);

    // Abandon the listing, the second page is never paid for.
    drop(lister);
    assert_eq!(dispatch.list_calls(), 1);
    Ok(())
}

#[test]
fn test_list_forwards_prefix() -> Result<()> {
    let dispatch = RecordingDispatch::with_pages(vec![page(&["logs-1"], None, false)]);
    let client = new_client(dispatch.clone());

    let lister = client.list_containers_with(ListOptions {
        prefix: Some("logs-".to_string()),
        limit: Some(10),
    })?;
    assert_eq!(lister.count(), 1);

    assert_eq!(
        dispatch.calls(),
        vec![Call::List(PageRequest {
            prefix: Some("logs-".to_string()),
            marker: None,
            limit: Some(10),
        })]
    );
    Ok(())
}

#[test]
fn test_list_cname_unsupported() -> Result<()> {
    let dispatch = RecordingDispatch::new();
    let client = Client::from_map(
        to_map(&[
            ("endpoint", "my-domain.com"),
            ("access_key_id", "id"),
            ("access_key_secret", "secret"),
            ("cname", "true"),
        ]),
        dispatch.clone(),
    )?;

    for prefix in [None, Some(""), Some("logs-")] {
        let err = client
            .list_containers_with(ListOptions {
                prefix: prefix.map(String::from),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert_eq!(
            err.message(),
            "cannot list containers for a custom-domain endpoint"
        );
        assert_eq!(err.operation(), "list_containers");
    }

    assert_eq!(dispatch.list_calls(), 0);
    Ok(())
}

#[test]
fn test_list_error_surfaces_lazily_and_ends_listing() -> Result<()> {
    let dispatch = RecordingDispatch::with_pages(vec![
        page(&["a"], Some("a"), true),
        Err(Error::new(ErrorKind::PermissionDenied, "AccessDenied")),
    ]);
    let client = new_client(dispatch.clone());

    // Creating the lister never fails for dispatch errors.
    let mut lister = client.list_containers()?;

    assert_eq!(lister.next().transpose()?.map(|v| v.into_name()), Some("a".to_string()));
    let err = lister.next().expect("error must be yielded").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert_eq!(err.message(), "AccessDenied");

    assert!(lister.next().is_none());
    assert_eq!(dispatch.list_calls(), 2);
    Ok(())
}

#[test]
fn test_list_memory_across_many_pages() -> Result<()> {
    init_logger();

    let dispatch = MemoryDispatch::default().with_page_size(3);
    let client = new_client(dispatch.clone());

    let mut expected = HashSet::new();
    for _ in 0..10 {
        let name = gen_container_name();
        client.create_container(&name)?;
        expected.insert(name);
    }
    client.create_container("other")?;

    let mut names = vec![];
    for bucket in client.list_containers_with(ListOptions {
        prefix: Some("bucket-".to_string()),
        ..Default::default()
    })? {
        let bucket = bucket?;
        debug!("got bucket: {bucket:?}");
        assert_eq!(bucket.location(), Some("oss-cn-hangzhou"));
        names.push(bucket.into_name());
    }

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "buckets must keep service order");
    assert_eq!(names.into_iter().collect::<HashSet<_>>(), expected);
    // 10 buckets with 3 per page.
    assert_eq!(dispatch.list_requests(), 4);
    Ok(())
}

#[test]
fn test_list_reflects_current_state() -> Result<()> {
    let client = new_client(MemoryDispatch::default());
    assert_eq!(client.list_containers()?.count(), 0);

    client.create_container("a")?;
    assert_eq!(client.list_containers()?.count(), 1);

    client.delete_container("a")?;
    assert_eq!(client.list_containers()?.count(), 0);
    Ok(())
}
