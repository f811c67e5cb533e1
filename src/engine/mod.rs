// ==========================================
// 服事表自动排班系统 - 引擎层
// ==========================================
// 职责: 自动排班的全部决策（资格过滤、公平排序、主要同工轮流、
//       绑定同工补排、最少次数检查）
// 红线: 引擎不做 I/O，所有状态只活在单次排班内
// ==========================================

pub mod audit;
pub mod directory;
pub mod eligibility;
pub mod linked_workers;
pub mod orchestrator;
pub mod priority;
pub mod rotation;
pub mod slot_filler;
pub mod worker_stats;

// 重导出核心引擎
pub use audit::MinServiceAudit;
pub use directory::WorkerDirectory;
pub use eligibility::EligibilityFilter;
pub use linked_workers::{LinkedPlacement, LinkedWorkerReconciler};
pub use orchestrator::{generate_roster, RosterOrchestrator, RosterResult};
pub use priority::{PrioritySorter, RankingKey};
pub use rotation::RotationState;
pub use slot_filler::{MultiSlotRequest, SlotFiller};
pub use worker_stats::{WorkerStat, WorkerStatsBook};
