use std::sync::Arc;

use meigara_core::registry::error::RegistryError;
use meigara_core::registry::port::InstrumentRegistry;
use meigara_registry::mem::MemRegistry;

#[tokio::test]
async fn test_add_appends_to_end() {
    let registry = MemRegistry::new();
    assert!(registry.list().await.is_empty());

    registry.add("NIFTY".to_string()).await;
    registry.add("X".to_string()).await;

    let list = registry.list().await;
    assert_eq!(list.last().map(String::as_str), Some("X"));
    assert_eq!(list, vec!["NIFTY", "X"]);
}

#[tokio::test]
async fn test_duplicates_are_allowed() {
    let registry = MemRegistry::new();
    registry.add("SBIN".to_string()).await;
    registry.add("SBIN".to_string()).await;
    assert_eq!(registry.list().await, vec!["SBIN", "SBIN"]);
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let registry = MemRegistry::new();
    registry.add("A".to_string()).await;
    registry.add("B".to_string()).await;

    registry.update(1, "C".to_string()).await.unwrap();
    assert_eq!(registry.list().await, vec!["A", "C"]);
}

#[tokio::test]
async fn test_update_on_empty_is_out_of_range() {
    let registry = MemRegistry::new();
    let err = registry.update(0, "Y".to_string()).await.unwrap_err();
    assert_eq!(err, RegistryError::OutOfRange { index: 0, len: 0 });
    assert_eq!(err.to_string(), "No symbol found");
}

#[tokio::test]
async fn test_remove_shifts_later_entries() {
    let registry = MemRegistry::new();
    for s in ["A", "B", "C"] {
        registry.add(s.to_string()).await;
    }

    let removed = registry.remove(0).await.unwrap();
    assert_eq!(removed, "A");
    // 原下标 1 的元素现在位于下标 0
    assert_eq!(registry.list().await, vec!["B", "C"]);
}

#[tokio::test]
async fn test_remove_out_of_range_and_negative() {
    let registry = MemRegistry::new();
    registry.add("A".to_string()).await;
    registry.add("B".to_string()).await;

    assert!(matches!(
        registry.remove(5).await,
        Err(RegistryError::OutOfRange { index: 5, len: 2 })
    ));
    assert!(registry.remove(-1).await.is_err());
    assert!(registry.update(-2, "Z".to_string()).await.is_err());
    assert_eq!(registry.list().await, vec!["A", "B"]);
}

/// # Summary
/// 并发追加不丢失数据。
///
/// # Logic
/// 1. 启动 100 个任务并发 add。
/// 2. 断言最终长度为 100 且每个值各出现一次。
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_are_serialized() {
    let registry = Arc::new(MemRegistry::new());

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.add(format!("SYM{}", i)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let mut list = registry.list().await;
    assert_eq!(list.len(), 100);
    list.sort();
    list.dedup();
    assert_eq!(list.len(), 100);
}

/// 并发删除同一下标：每次删除都拿到不同的元素，不会越界崩溃。
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_removes_never_double_delete() {
    let registry = Arc::new(MemRegistry::new());
    for i in 0..10 {
        registry.add(format!("S{}", i)).await;
    }

    let handles: Vec<_> = (0..15)
        .map(|_| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.remove(0).await })
        })
        .collect();

    let mut removed = Vec::new();
    let mut failures = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(symbol) => removed.push(symbol),
            Err(_) => failures += 1,
        }
    }

    assert_eq!(removed.len(), 10);
    assert_eq!(failures, 5);
    removed.sort();
    removed.dedup();
    assert_eq!(removed.len(), 10);
    assert!(registry.list().await.is_empty());
}
