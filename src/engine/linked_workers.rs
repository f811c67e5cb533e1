// ==========================================
// 服事表自动排班系统 - 绑定同工补排
// ==========================================
// 职责: 单日所有项目排完后，把已排同工的绑定夥伴排进同一天
// 规则: 只用真正空出的名额，不重跑轮流、不改动已选的人
// 找不到空位的绑定夥伴直接略过（不产生警告）
// ==========================================

use crate::domain::schedule::Schedule;
use crate::domain::service_item::ServiceItem;
use crate::domain::worker::{can_worker_serve, Worker};
use crate::engine::directory::WorkerDirectory;
use crate::engine::worker_stats::WorkerStatsBook;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

/// 一次补排结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedPlacement {
    pub worker_id: String,
    pub linked_from: String,
    pub role_key: String,
}

pub struct LinkedWorkerReconciler {}

impl LinkedWorkerReconciler {
    pub fn new() -> Self {
        Self {}
    }

    /// 对单日排班执行绑定补排
    ///
    /// 只检查补排开始时已排的同工（新补进来的人不再连带补排）
    ///
    /// 同一位同工的多个绑定夥伴竞争同一空位时，先登记者优先
    pub fn reconcile(
        &self,
        schedule: &mut Schedule,
        assigned_today: &mut HashSet<String>,
        directory: &WorkerDirectory<'_>,
        service_items: &[ServiceItem],
        stats: &mut WorkerStatsBook,
    ) -> Vec<LinkedPlacement> {
        let date = schedule.date;
        let anchors: Vec<&Worker> = directory
            .workers()
            .iter()
            .filter(|w| assigned_today.contains(&w.id) && w.has_linked_workers())
            .collect();

        let mut placements = Vec::new();
        for anchor in anchors {
            // 按同工自己登记的绑定顺序，名册中不存在的 ID 略过
            for linked in anchor.linked_workers.iter().filter_map(|id| directory.get(id)) {
                if !self.can_join(linked, date, assigned_today, stats) {
                    continue;
                }

                if let Some(role_key) = self.place(schedule, linked, service_items) {
                    assigned_today.insert(linked.id.clone());
                    if let Some(item) = service_items.iter().find(|i| i.key == role_key) {
                        stats.record(&linked.id, item.service_type(), date);
                    }
                    debug!(
                        date = %date,
                        worker = %linked.name,
                        linked_from = %anchor.name,
                        role = %role_key,
                        "绑定同工补排"
                    );
                    placements.push(LinkedPlacement {
                        worker_id: linked.id.clone(),
                        linked_from: anchor.id.clone(),
                        role_key,
                    });
                }
            }
        }
        placements
    }

    fn can_join(
        &self,
        linked: &Worker,
        date: NaiveDate,
        assigned_today: &HashSet<String>,
        stats: &WorkerStatsBook,
    ) -> bool {
        can_worker_serve(linked, date)
            && !assigned_today.contains(&linked.id)
            && !linked.is_at_ceiling(stats.total(&linked.id))
    }

    /// 放进第一个具备资格且有空位的项目，返回项目 key
    fn place(
        &self,
        schedule: &mut Schedule,
        linked: &Worker,
        service_items: &[ServiceItem],
    ) -> Option<String> {
        for item in service_items {
            if !linked.is_qualified_for(item.service_type()) {
                continue;
            }

            if item.is_multiple {
                let mut current: Vec<String> = schedule
                    .multiple(&item.key)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if current.len() < item.slot_capacity() && !current.contains(&linked.name) {
                    current.push(linked.name.clone());
                    schedule.set_multiple(&item.key, current);
                    return Some(item.key.clone());
                }
            } else if schedule.slot(&item.key).map_or(true, |v| v.is_empty()) {
                schedule.set_single(&item.key, Some(linked.name.clone()));
                return Some(item.key.clone());
            }
        }
        None
    }
}

impl Default for LinkedWorkerReconciler {
    fn default() -> Self {
        Self::new()
    }
}
