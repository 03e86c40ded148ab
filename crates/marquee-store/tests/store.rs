// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

use marquee_store::prelude::*;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
struct Record {
    session_id: String,
    account_id: u64,
}

fn record() -> Record {
    Record {
        session_id: "abc".to_string(),
        account_id: 7,
    }
}

#[tokio::test]
async fn test_memory_driver_round_trip() -> Result<()> {
    let store = Store::new(InMemoryDriver::new());

    assert_eq!(store.get::<Record>("auth").await?, None);
    assert!(!store.contains_key("auth").await?);

    store.set("auth", &record()).await?;
    assert_eq!(store.get::<Record>("auth").await?, Some(record()));
    assert_eq!(
        store.driver().raw_value("auth").as_deref(),
        Some(r#"{"sessionId":"abc","accountId":7}"#)
    );

    store.delete("auth").await?;
    assert_eq!(store.get::<Record>("auth").await?, None);

    // Deleting a missing key is fine.
    store.delete("auth").await?;

    Ok(())
}

#[tokio::test]
async fn test_unparsable_value_surfaces_json_error() -> Result<()> {
    let store = Store::new(InMemoryDriver::with_values([("auth", "{not json")]));

    let result = store.get::<Record>("auth").await;
    assert!(result.is_err());
    assert!(store.contains_key("auth").await?);

    Ok(())
}

#[tokio::test]
async fn test_fs_driver_persists_across_instances() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let store = Store::new(FsDriver::new(dir.path().join("state")));
    store.set("auth", &record()).await?;
    drop(store);

    let store = Store::new(FsDriver::new(dir.path().join("state")));
    assert_eq!(store.get::<Record>("auth").await?, Some(record()));
    assert!(dir.path().join("state").join("auth.json").exists());

    store.delete("auth").await?;
    assert_eq!(store.get::<Record>("auth").await?, None);
    assert!(!dir.path().join("state").join("auth.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_fs_driver_rejects_path_like_keys() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = Store::new(FsDriver::new(dir.path()));

    let result = store.set("../auth", &record()).await;
    assert!(matches!(result, Err(Error::InvalidKey { .. })));

    Ok(())
}
