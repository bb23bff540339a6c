use meigara_api::server::{AppState, serve};
use meigara_api::types::{ApiErrorResponse, MessageResponse};
use meigara_registry::mem::MemRegistry;
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::net::TcpListener;

// 帮助函数：在随机端口启动测试服务器
async fn spawn_test_server() -> String {
    meigara_core::common::install_crypto_provider();

    let state = AppState {
        registry: Arc::new(MemRegistry::new()),
    };

    // 先绑定再 spawn，返回时端口已可连接
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        serve(listener, state).await.unwrap();
    });

    addr
}

async fn list(client: &reqwest::Client, base_url: &str) -> Vec<String> {
    client
        .get(format!("{}/instruments", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_full_api_workflow() {
    let _ = tracing_subscriber::fmt().with_env_filter("debug").try_init();

    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    // ============================================
    // Case 1: 初始列表为空
    // ============================================
    assert!(list(&client, &base_url).await.is_empty());

    // ============================================
    // Case 2: 空列表上更新 → 400
    // ============================================
    let res = client
        .patch(format!("{}/update", base_url))
        .query(&[("index", "0"), ("symbol", "X")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = res.json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error, "No symbol found");

    // ============================================
    // Case 3: 追加两个标的，均排在末尾
    // ============================================
    for symbol in ["NIFTY", "BANKNIFTY"] {
        let res = client
            .post(format!("{}/add", base_url))
            .query(&[("symbol", symbol)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: MessageResponse = res.json().await.unwrap();
        assert_eq!(body.message, format!("Symbol {} added successfully", symbol));
    }
    assert_eq!(list(&client, &base_url).await, vec!["NIFTY", "BANKNIFTY"]);

    // ============================================
    // Case 4: 越界删除 → 400，列表不变
    // ============================================
    let res = client
        .delete(format!("{}/remove", base_url))
        .query(&[("index", "5")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = res.json().await.unwrap();
    assert_eq!(body.error, "No symbol found");
    assert_eq!(list(&client, &base_url).await.len(), 2);

    // ============================================
    // Case 5: 负数下标 → 400
    // ============================================
    let res = client
        .patch(format!("{}/update", base_url))
        .query(&[("index", "-1"), ("symbol", "X")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list(&client, &base_url).await, vec!["NIFTY", "BANKNIFTY"]);

    // ============================================
    // Case 6: 更新成功
    // ============================================
    let res = client
        .patch(format!("{}/update", base_url))
        .query(&[("index", "1"), ("symbol", "FINNIFTY")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: MessageResponse = res.json().await.unwrap();
    assert_eq!(body.message, "Symbol at index 1 updated successfully");
    assert_eq!(list(&client, &base_url).await, vec!["NIFTY", "FINNIFTY"]);

    // ============================================
    // Case 7: 删除成功，后续元素前移
    // ============================================
    let res = client
        .delete(format!("{}/remove", base_url))
        .query(&[("index", "0")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: MessageResponse = res.json().await.unwrap();
    assert_eq!(body.message, "Symbol at index 0 removed successfully");
    assert_eq!(list(&client, &base_url).await, vec!["FINNIFTY"]);
}

#[tokio::test]
async fn test_missing_or_invalid_params_rejected() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    // 缺少 symbol
    let res = client
        .post(format!("{}/add", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // index 不是整数
    let res = client
        .delete(format!("{}/remove", base_url))
        .query(&[("index", "abc")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // 被拒绝的请求不应改变列表
    assert!(list(&client, &base_url).await.is_empty());
}

#[tokio::test]
async fn test_duplicates_allowed() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let res = client
            .post(format!("{}/add", base_url))
            .query(&[("symbol", "NIFTY")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
    assert_eq!(list(&client, &base_url).await, vec!["NIFTY", "NIFTY"]);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api-docs/openapi.json", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let doc: serde_json::Value = res.json().await.unwrap();
    let paths = doc["paths"].as_object().unwrap();
    for path in ["/instruments", "/add", "/update", "/remove"] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
