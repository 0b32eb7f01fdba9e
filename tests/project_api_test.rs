// ==========================================
// ProjectApi 集成测试
// ==========================================
// 测试范围: 公开查询 / 后台 CRUD / 表单校验
// ==========================================


use portfolio_cms::api::{ApiError, CoordinateInput, ProjectInput};
use portfolio_cms::domain::ProjectPatch;
use test_helpers::TestEnv;

fn input(title: &str, start_date: &str) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        sector: "Highways".to_string(),
        client: "National Highways".to_string(),
        description: "Steel deck repair".to_string(),
        role: "Assessment Engineer".to_string(),
        location: "Sheffield".to_string(),
        start_date: start_date.to_string(),
        latitude: Some(CoordinateInput::Number(53.38)),
        longitude: Some(CoordinateInput::Text("-1.47".to_string())),
        skills: vec!["Steel Bridge Design".to_string(), " ".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_admin_crud_flow() {
    let env = TestEnv::new().unwrap();
    let token = env.admin_token().await;
    let api = &env.state.project_api;

    let created = api
        .create_project(Some(&token), input("Deck Repair", "2021-06"))
        .await
        .unwrap();
    assert_eq!(created.longitude, -1.47);
    assert_eq!(created.skills, vec!["Steel Bridge Design"]);

    let mut changed = input("Deck Repair Phase 2", "2021-06");
    changed.pdf_report = Some("1700000000000-report.pdf".to_string());
    let updated = api
        .update_project(Some(&token), &created.id, changed)
        .await
        .unwrap();
    assert_eq!(updated.title, "Deck Repair Phase 2");

    let patched = api
        .patch_project(
            Some(&token),
            &created.id,
            ProjectPatch {
                published: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!patched.published);
    assert_eq!(patched.pdf_report.as_deref(), Some("1700000000000-report.pdf"));

    // 未发布项目不出现在公开列表，但详情与后台列表可见
    assert!(api.list_published_projects().await.unwrap().is_empty());
    assert_eq!(api.get_project(&created.id).await.unwrap().id, created.id);
    assert_eq!(api.list_all_projects(Some(&token)).await.unwrap().len(), 1);

    api.delete_project(Some(&token), &created.id).await.unwrap();
    assert!(matches!(
        api.get_project(&created.id).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        api.delete_project(Some(&token), &created.id).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_admin_operations_require_session() {
    let env = TestEnv::new().unwrap();
    let api = &env.state.project_api;

    assert!(matches!(
        api.create_project(None, input("X", "2020-01")).await,
        Err(ApiError::Unauthorised(_))
    ));
    assert!(matches!(
        api.list_all_projects(Some("forged")).await,
        Err(ApiError::Unauthorised(_))
    ));
}

#[tokio::test]
async fn test_invalid_form_rejected() {
    let env = TestEnv::new().unwrap();
    let token = env.admin_token().await;
    let api = &env.state.project_api;

    let mut bad = input("X", "2020-01");
    bad.latitude = None;
    match api.create_project(Some(&token), bad).await {
        Err(ApiError::InvalidInput(msg)) => assert!(msg.contains("latitude")),
        other => panic!("Expected InvalidInput, got {:?}", other.map(|p| p.id)),
    }

    let created = api
        .create_project(Some(&token), input("Y", "2020-01"))
        .await
        .unwrap();
    assert!(matches!(
        api.patch_project(Some(&token), &created.id, ProjectPatch::default())
            .await,
        Err(ApiError::InvalidInput(_))
    ));
    assert!(matches!(
        api.patch_project(
            Some(&token),
            &created.id,
            ProjectPatch {
                latitude: Some(f64::NAN),
                ..Default::default()
            },
        )
        .await,
        Err(ApiError::InvalidInput(_))
    ));
}
