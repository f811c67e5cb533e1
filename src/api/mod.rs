// ==========================================
// 服事表自动排班系统 - API 层
// ==========================================
// 职责: 提供排班入口，供 CLI 调用
// ==========================================

pub mod error;
pub mod roster_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use roster_api::{PlanningRequest, QuarterRoster, RosterApi};
