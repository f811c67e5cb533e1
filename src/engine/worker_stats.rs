// ==========================================
// 服事表自动排班系统 - 同工服事统计
// ==========================================
// 职责: 每次排班新建，以既有排班播种，排班过程中累加，结束即丢弃
// 统计: 总次数 / 各服事类型次数 / 最近一次服事日期
// ==========================================

use crate::domain::schedule::Schedule;
use crate::domain::service_item::ServiceItem;
use crate::domain::types::{AssignmentEntry, WorkerId};
use crate::domain::worker::Worker;
use crate::engine::directory::WorkerDirectory;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStat {
    pub total: u32,
    pub by_service_type: HashMap<String, u32>,
    pub last_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct WorkerStatsBook {
    stats: HashMap<WorkerId, WorkerStat>,
}

impl WorkerStatsBook {
    pub fn new(workers: &[Worker]) -> Self {
        Self {
            stats: workers
                .iter()
                .map(|w| (w.id.clone(), WorkerStat::default()))
                .collect(),
        }
    }

    /// 记一次服事
    pub fn record(&mut self, worker_id: &str, service_type: &str, date: NaiveDate) {
        let stat = self.stats.entry(worker_id.to_string()).or_default();
        stat.total += 1;
        *stat
            .by_service_type
            .entry(service_type.to_string())
            .or_insert(0) += 1;
        stat.last_date = Some(date);
    }

    pub fn get(&self, worker_id: &str) -> Option<&WorkerStat> {
        self.stats.get(worker_id)
    }

    pub fn total(&self, worker_id: &str) -> u32 {
        self.stats.get(worker_id).map_or(0, |s| s.total)
    }

    pub fn count_for(&self, worker_id: &str, service_type: &str) -> u32 {
        self.stats
            .get(worker_id)
            .and_then(|s| s.by_service_type.get(service_type).copied())
            .unwrap_or(0)
    }

    pub fn last_date(&self, worker_id: &str) -> Option<NaiveDate> {
        self.stats.get(worker_id).and_then(|s| s.last_date)
    }

    /// 用既有排班播种统计
    ///
    /// 按输入顺序套用，last_date 取最后处理的那笔；
    /// 调用方需保证既有排班按日期排序，近期优先的判断才有意义
    pub fn seed_from_existing(
        &mut self,
        directory: &WorkerDirectory<'_>,
        service_items: &[ServiceItem],
        existing: &[Schedule],
    ) -> usize {
        let mut seeded = 0;
        for schedule in existing {
            for item in service_items {
                let Some(value) = schedule.slot(&item.key) else {
                    continue;
                };
                for name in value.names() {
                    if let AssignmentEntry::Known(id) = directory.resolve(name) {
                        self.record(&id, item.service_type(), schedule.date);
                        seeded += 1;
                    }
                }
            }
        }
        seeded
    }
}
