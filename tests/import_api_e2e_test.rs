// ==========================================
// ImportApi 端到端测试
// ==========================================
// 测试范围: 鉴权 → 导入 → 报告 JSON → 公开列表
// ==========================================


use portfolio_cms::api::ApiError;
use portfolio_cms::logging;
use test_helpers::{csv_row, csv_text, TestEnv, CSV_HEADER};

#[tokio::test]
async fn test_import_requires_admin() {
    let env = TestEnv::new().unwrap();
    let text = csv_text(&[csv_row("A", "2020-01")]);

    let err = env
        .state
        .import_api
        .import_projects(None, &text)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorised(_)));

    let err = env
        .state
        .import_api
        .import_projects(Some("not-a-session"), &text)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 401);
}

#[tokio::test]
async fn test_import_report_shape() {
    logging::init_test();
    let env = TestEnv::new().unwrap();
    let token = env.admin_token().await;

    let text = csv_text(&[
        csv_row("Kept", "2022-01"),
        "Broken,Rail,NR,Desc,Designer,Derby,2020-01,52.1,east".to_string(),
    ]);
    let report = env
        .state
        .import_api
        .import_projects(Some(&token), &text)
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "count": 1,
            "total": 2,
            "errors": ["Row 3: invalid latitude/longitude"],
        })
    );

    let published = env.state.project_api.list_published_projects().await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "Kept");
}

#[tokio::test]
async fn test_header_only_surfaces_import_error() {
    let env = TestEnv::new().unwrap();
    let token = env.admin_token().await;

    let err = env
        .state
        .import_api
        .import_projects(Some(&token), CSV_HEADER)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::ImportError(_)));
    assert_eq!(err.to_string(), "No data rows found in CSV");
    assert_eq!(err.http_status(), 400);
}
