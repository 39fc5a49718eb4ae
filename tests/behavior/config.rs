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

use std::sync::Arc;

use anyhow::Result;
use ossclient::services::MemoryDispatch;
use ossclient::*;
use pretty_assertions::assert_eq;

use super::utils::*;

fn builder(access_key_id: &str, access_key_secret: &str) -> ClientBuilder {
    Client::builder()
        .endpoint(ENDPOINT)
        .access_key_id(access_key_id)
        .access_key_secret(access_key_secret)
}

/// Each client built by `build` owns its config, building another one later
/// never changes it.
#[test]
fn test_rebuild_does_not_affect_earlier_client() -> Result<()> {
    init_logger();

    let dispatch = MemoryDispatch::default().with_credential("good", "good-secret");
    let first = builder("good", "good-secret").build(dispatch.clone())?;
    let _second = builder("bad", "bad-secret").build(dispatch.clone())?;

    first.create_container(&gen_container_name())?;
    assert_eq!(first.list_containers()?.count(), 1);
    Ok(())
}

/// Clients built on the same store share config: the last build wins for all
/// of them, including clients built earlier.
#[test]
fn test_shared_store_last_build_wins() -> Result<()> {
    init_logger();

    let store = Arc::new(ConfigStore::new());
    let dispatch = MemoryDispatch::default().with_credential("good", "good-secret");

    let first = builder("good", "good-secret").build_with_store(dispatch.clone(), store.clone())?;
    first.create_container(&gen_container_name())?;

    let _second = builder("bad", "bad-secret").build_with_store(dispatch.clone(), store.clone())?;

    let err = first.create_container(&gen_container_name()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert_eq!(err.context("access_key_id"), Some("bad"));

    let err = first
        .list_containers()?
        .next()
        .expect("listing must yield the error")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);

    let _third = builder("good", "good-secret").build_with_store(dispatch.clone(), store)?;
    assert_eq!(first.list_containers()?.count(), 1);
    Ok(())
}

/// Switching the shared store to a cname endpoint disables listing for every
/// client on it.
#[test]
fn test_shared_store_cname_switch() -> Result<()> {
    let store = Arc::new(ConfigStore::new());
    let dispatch = RecordingDispatch::new();

    let first = builder("id", "secret").build_with_store(dispatch.clone(), store.clone())?;
    let _second = builder("id", "secret")
        .endpoint("my-domain.com")
        .cname(true)
        .build_with_store(dispatch.clone(), store)?;

    let err = first.list_containers().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(first.info()?.endpoint(), "my-domain.com");
    assert_eq!(dispatch.list_calls(), 0);
    Ok(())
}

#[test]
fn test_uninitialized_store() {
    let store = ConfigStore::new();

    for field in [
        ConfigField::Endpoint,
        ConfigField::Cname,
        ConfigField::AccessKeyId,
        ConfigField::AccessKeySecret,
    ] {
        let err = store.get(field).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Uninitialized);
        assert_eq!(err.context("field"), Some(field.into_static()));
    }
}
