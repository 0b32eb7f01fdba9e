// ==========================================
// 作品集内容管理 - 日志初始化
// ==========================================
// tracing-subscriber + EnvFilter（RUST_LOG，缺省 info）
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 命令行入口使用
///
/// 例: RUST_LOG=portfolio_cms::importer=debug 查看逐行导入结果
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 测试使用: debug 级别，输出交给测试框架捕获；重复调用无副作用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
