// ==========================================
// 集成测试共享辅助模块
// ==========================================

pub mod mock_project_repo;
