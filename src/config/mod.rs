// ==========================================
// 服事表自动排班系统 - 配置层
// ==========================================
// 职责: 排班配置（人数、服事星期、语言）读取与写入
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod roster_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use roster_config_trait::RosterConfigReader;
