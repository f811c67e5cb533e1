// ==========================================
// 服事表自动排班系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite（配置）
// 系统定位: 排班建议（同工可在产出后人工调整）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-TW");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排班规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 排班接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AssignmentEntry, PlanningInput, Quarter, RosterWarning, Schedule, ServiceConfig, ServiceItem,
    SlotValue, WarningKind, Worker,
};

// 引擎
pub use engine::{generate_roster, RosterOrchestrator, RosterResult};

// API
pub use api::{ApiError, PlanningRequest, QuarterRoster, RosterApi};

// 配置
pub use config::{ConfigManager, RosterConfigReader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "服事表自动排班系统";
