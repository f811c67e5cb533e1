// ==========================================
// 服事表自动排班系统 - 最少服事次数检查
// ==========================================
// 最少次数是软约束：排班完成后统一检查，只产生警告
// ==========================================

use crate::domain::warning::RosterWarning;
use crate::engine::directory::WorkerDirectory;
use crate::engine::worker_stats::WorkerStatsBook;

pub struct MinServiceAudit {}

impl MinServiceAudit {
    pub fn new() -> Self {
        Self {}
    }

    /// 按名册顺序，对未达最少次数的同工各产生一条 below_min
    pub fn audit(
        &self,
        directory: &WorkerDirectory<'_>,
        stats: &WorkerStatsBook,
    ) -> Vec<RosterWarning> {
        directory
            .workers()
            .iter()
            .filter_map(|w| {
                let required = w.effective_min()?;
                let achieved = stats.total(&w.id);
                (achieved < required).then(|| RosterWarning::BelowMin {
                    worker: w.name.clone(),
                    achieved,
                    required,
                })
            })
            .collect()
    }
}

impl Default for MinServiceAudit {
    fn default() -> Self {
        Self::new()
    }
}
