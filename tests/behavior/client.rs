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

use anyhow::Result;
use log::debug;
use ossclient::services::MemoryDispatch;
use ossclient::*;
use pretty_assertions::assert_eq;

use super::utils::*;

#[test]
fn test_build_reports_every_missing_argument() -> Result<()> {
    init_logger();

    let cases = [
        (vec![], "Missing arguments: endpoint, access_key_id, access_key_secret"),
        (
            vec![("endpoint", ENDPOINT), ("accessKeyId", "id")],
            "Missing arguments: access_key_secret",
        ),
        (
            vec![("accessKeySecret", "secret"), ("cname", "false")],
            "Missing arguments: endpoint, access_key_id",
        ),
    ];

    for (pairs, expected) in cases {
        let err = Client::from_map(to_map(&pairs), MemoryDispatch::default()).unwrap_err();
        debug!("build failed as expected: {err}");
        assert_eq!(err.kind(), ErrorKind::MissingArguments);
        assert_eq!(err.message(), expected);
    }
    Ok(())
}

#[test]
fn test_get_container_sends_nothing() -> Result<()> {
    let dispatch = RecordingDispatch::new();
    let client = new_client(dispatch.clone());

    let handle = client.container("x");
    assert_eq!(handle.name(), "x");
    let handle = client.container("never-created");
    assert_eq!(handle.name(), "never-created");

    assert!(dispatch.calls().is_empty());
    Ok(())
}

#[test]
fn test_create_and_delete_forward_arguments() -> Result<()> {
    let dispatch = RecordingDispatch::new();
    let client = new_client(dispatch.clone());

    client.create_container("Not A Valid Name")?;
    client.create_container_with(
        "logs",
        CreateOptions {
            location: Some("oss-cn-beijing".to_string()),
        },
    )?;
    client.delete_container("logs")?;

    assert_eq!(
        dispatch.calls(),
        vec![
            Call::Create {
                access_key_id: "access_key_id".to_string(),
                name: "Not A Valid Name".to_string(),
                location: None,
            },
            Call::Create {
                access_key_id: "access_key_id".to_string(),
                name: "logs".to_string(),
                location: Some("oss-cn-beijing".to_string()),
            },
            Call::Delete {
                access_key_id: "access_key_id".to_string(),
                name: "logs".to_string(),
            },
        ]
    );
    Ok(())
}

#[test]
fn test_dispatch_errors_pass_through() -> Result<()> {
    let dispatch = RecordingDispatch::new();
    let client = new_client(dispatch.clone());

    dispatch.fail_create(
        Error::new(ErrorKind::RateLimited, "TooManyRequests")
            .with_context("request_id", "5C3D9175B6FC201293AD****")
            .set_temporary(),
    );
    let err = client.create_container("logs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimited);
    assert_eq!(err.message(), "TooManyRequests");
    assert_eq!(err.operation(), "");
    assert_eq!(err.context("request_id"), Some("5C3D9175B6FC201293AD****"));
    assert!(err.is_temporary());

    dispatch.fail_delete(Error::new(
        ErrorKind::NotEmpty,
        "BucketNotEmpty: the bucket you tried to delete is not empty",
    ));
    let err = client.delete_container("logs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotEmpty);
    assert_eq!(
        err.to_string(),
        "NotEmpty (permanent) => BucketNotEmpty: the bucket you tried to delete is not empty"
    );
    Ok(())
}

#[test]
fn test_delete_not_empty_container() -> Result<()> {
    init_logger();

    let dispatch = MemoryDispatch::default();
    let client = new_client(dispatch.clone());
    let name = gen_container_name();

    client.create_container(&name)?;
    dispatch.put_object(&name, "hello.txt")?;

    let err = client.delete_container(&name).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotEmpty);
    assert_eq!(err.context("bucket"), Some(name.as_str()));
    assert!(dispatch.contains(&name));

    dispatch.delete_object(&name, "hello.txt")?;
    client.delete_container(&name)?;
    assert!(!dispatch.contains(&name));
    Ok(())
}

#[test]
fn test_create_existing_container() -> Result<()> {
    let client = new_client(MemoryDispatch::default());
    let name = gen_container_name();

    client.create_container(&name)?;
    let err = client.create_container(&name).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    Ok(())
}

#[test]
fn test_info() -> Result<()> {
    let client = new_client(MemoryDispatch::default());
    let info = client.info()?;
    assert_eq!(info.endpoint(), ENDPOINT);
    assert!(!info.cname());
    assert!(info.can_list_containers());

    let client = Client::builder()
        .endpoint("my-domain.com")
        .cname(true)
        .access_key_id("id")
        .access_key_secret("secret")
        .build(MemoryDispatch::default())?;
    assert!(!client.info()?.can_list_containers());
    Ok(())
}
