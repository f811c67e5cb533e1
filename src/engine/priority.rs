// ==========================================
// 服事表自动排班系统 - 单人项目候选排序
// ==========================================
// 职责: 单人服事项目的候选同工排序（公平分配）
// 输入: 候选同工 + 服事统计 + 主要同工名单
// 输出: 排序后的候选（第一位即入选）
// ==========================================

use crate::domain::worker::Worker;
use crate::engine::worker_stats::WorkerStatsBook;
use chrono::NaiveDate;

// ==========================================
// RankingKey - 排序键
// ==========================================
// 字段顺序即比较顺序（字典序），值小者优先：
// 1) 主要同工优先
// 2) 该服事类型次数少者优先
// 3) 从未服事者优先，其次最近一次服事越早越优先
// 4) 总服事次数少者优先
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankingKey {
    pub non_key_worker: bool,
    pub service_type_count: u32,
    pub last_served: Option<NaiveDate>,
    pub total: u32,
}

// ==========================================
// PrioritySorter - 候选排序
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎,不需要注入依赖
}

impl PrioritySorter {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算单个同工的排序键
    pub fn ranking_key(
        &self,
        worker: &Worker,
        key_worker_ids: &[String],
        stats: &WorkerStatsBook,
        service_type: &str,
    ) -> RankingKey {
        RankingKey {
            non_key_worker: !key_worker_ids.contains(&worker.id),
            service_type_count: stats.count_for(&worker.id, service_type),
            last_served: stats.last_date(&worker.id),
            total: stats.total(&worker.id),
        }
    }

    /// 排序候选（稳定排序，键相同时保持名册顺序）
    pub fn sort<'a>(
        &self,
        mut candidates: Vec<&'a Worker>,
        key_worker_ids: &[String],
        stats: &WorkerStatsBook,
        service_type: &str,
    ) -> Vec<&'a Worker> {
        candidates.sort_by_cached_key(|w| self.ranking_key(w, key_worker_ids, stats, service_type));
        candidates
    }

    /// 多人项目非主要同工的排序：总服事次数少者优先
    pub fn sort_by_total<'a>(
        &self,
        mut candidates: Vec<&'a Worker>,
        stats: &WorkerStatsBook,
    ) -> Vec<&'a Worker> {
        candidates.sort_by_key(|w| stats.total(&w.id));
        candidates
    }
}

impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}
