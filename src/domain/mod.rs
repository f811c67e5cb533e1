// ==========================================
// 服事表自动排班系统 - 领域模型层
// ==========================================
// 职责: 定义同工、服事项目、排班记录、警告等领域实体
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod horizon;
pub mod planning;
pub mod schedule;
pub mod service_item;
pub mod types;
pub mod warning;
pub mod worker;

// 重导出核心类型
pub use horizon::Quarter;
pub use planning::PlanningInput;
pub use schedule::{Schedule, SlotValue};
pub use service_item::{ServiceConfig, ServiceItem};
pub use types::{AssignmentEntry, WarningKind, WorkerId, DEFAULT_MULTI_CAPACITY};
pub use warning::RosterWarning;
pub use worker::{can_worker_serve, linked_workers_of, Worker};
