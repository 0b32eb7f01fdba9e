// ==========================================
// 作品集内容管理 - 配置层
// ==========================================
// 职责: 站点配置读取与覆写
// 存储: config_kv 表（缺省时回落到环境变量 / 内置默认值）
// ==========================================

pub mod config_manager;
pub mod site_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use site_config_trait::SiteConfigReader;
