// ==========================================
// 服事表自动排班系统 - 资格过滤引擎
// ==========================================
// 红线: 最多服事次数为硬上限，已达上限者不得再排
// ==========================================
// 职责: 某日某服事类型的可用同工过滤
// 条件: 在名单中 + 具备该服事资格 + 该日未请假 + 未达最多次数
// 输出: 可用同工（保持名册顺序）
// ==========================================

use crate::domain::worker::{can_worker_serve, Worker};
use crate::engine::directory::WorkerDirectory;
use crate::engine::worker_stats::WorkerStatsBook;
use chrono::NaiveDate;

// ==========================================
// EligibilityFilter - 资格过滤
// ==========================================
pub struct EligibilityFilter {
    // 无状态引擎,不需要注入依赖
}

impl EligibilityFilter {
    pub fn new() -> Self {
        Self {}
    }

    /// 单个同工是否可排入某服事类型
    pub fn is_eligible(
        &self,
        worker: &Worker,
        service_type: &str,
        date: NaiveDate,
        stats: &WorkerStatsBook,
    ) -> bool {
        can_worker_serve(worker, date)
            && worker.is_qualified_for(service_type)
            && !worker.is_at_ceiling(stats.total(&worker.id))
    }

    /// 过滤可用同工
    ///
    /// 未定义的服事类型没有任何同工具备资格，结果为空（由上层记 no_worker）
    pub fn eligible_workers<'a>(
        &self,
        directory: &WorkerDirectory<'a>,
        service_type: &str,
        date: NaiveDate,
        stats: &WorkerStatsBook,
    ) -> Vec<&'a Worker> {
        directory
            .workers()
            .iter()
            .filter(|w| self.is_eligible(w, service_type, date, stats))
            .collect()
    }
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::new()
    }
}
