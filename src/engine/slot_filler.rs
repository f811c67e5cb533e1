// ==========================================
// 服事表自动排班系统 - 排班格填充引擎
// ==========================================
// 红线: 既有排班（人工排定）不可改变，只补空位
// ==========================================
// 职责: 为单人/多人服事项目选出同工
// 单人: 主要同工优先 → 避免一人多职 → 公平排序取第一位
// 多人: 主要同工每日轮一位 → 其余名额由非主要同工按总次数补足
// ==========================================

use crate::domain::service_item::ServiceConfig;
use crate::domain::worker::Worker;
use crate::engine::priority::PrioritySorter;
use crate::engine::rotation::RotationState;
use crate::engine::worker_stats::WorkerStatsBook;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 多人项目一次填充的上下文
pub struct MultiSlotRequest<'r> {
    pub service_type: &'r str,
    pub current_names: &'r [String], // 栏位中已有的名字
    pub needed: usize,               // 还需补几位
}

// ==========================================
// SlotFiller - 排班格填充
// ==========================================
pub struct SlotFiller {
    sorter: PrioritySorter,
}

impl SlotFiller {
    pub fn new() -> Self {
        Self {
            sorter: PrioritySorter::new(),
        }
    }

    // ==========================================
    // 单人项目
    // ==========================================

    /// 单人项目选人
    ///
    /// 规则:
    /// 1) 可用同工中有主要同工时，只在主要同工中选
    /// 2) 优先本日尚未服事者；全员已服事时放宽（允许一人多职）
    /// 3) 按 RankingKey 排序取第一位
    ///
    /// # 返回
    /// 只有候选为空时返回 None
    pub fn select_single<'a>(
        &self,
        eligible: &[&'a Worker],
        config: Option<&ServiceConfig>,
        assigned_today: &HashSet<String>,
        stats: &WorkerStatsBook,
        service_type: &str,
    ) -> Option<&'a Worker> {
        let key_ids: &[String] = config.map(|c| c.key_workers.as_slice()).unwrap_or(&[]);

        let key_candidates: Vec<&'a Worker> = eligible
            .iter()
            .copied()
            .filter(|w| key_ids.contains(&w.id))
            .collect();
        let pool = if key_candidates.is_empty() {
            eligible.to_vec()
        } else {
            key_candidates
        };

        let free: Vec<&'a Worker> = pool
            .iter()
            .copied()
            .filter(|w| !assigned_today.contains(&w.id))
            .collect();
        let available = if free.is_empty() {
            debug!(service_type, "本日候选皆已服事，放宽一人多职限制");
            pool
        } else {
            free
        };

        self.sorter
            .sort(available, key_ids, stats, service_type)
            .into_iter()
            .next()
    }

    // ==========================================
    // 多人项目
    // ==========================================

    /// 多人项目选人（主要同工轮流）
    ///
    /// 规则:
    /// 1) 配置了主要同工时，从游标下一位起找本日可用的主要同工，只选一位
    /// 2) 其余名额从非主要同工中补，总次数少者优先
    /// 3) 已在栏位中或本日已服事者不再选
    ///
    /// # 返回
    /// 入选同工（主要同工在前），数量不超过 needed
    pub fn select_multiple<'a>(
        &self,
        eligible: &[&'a Worker],
        config: Option<&ServiceConfig>,
        request: &MultiSlotRequest<'_>,
        assigned_today: &HashSet<String>,
        stats: &WorkerStatsBook,
        rotation: &mut RotationState,
    ) -> Vec<&'a Worker> {
        let mut selected: Vec<&'a Worker> = Vec::with_capacity(request.needed);
        if request.needed == 0 {
            return selected;
        }

        let key_ids: &[String] = config.map(|c| c.key_workers.as_slice()).unwrap_or(&[]);
        let in_slot = |w: &Worker| request.current_names.iter().any(|n| n == &w.name);

        // 1) 主要同工轮流（每日最多一位）
        if !key_ids.is_empty() {
            let eligible_by_id: HashMap<&str, &'a Worker> =
                eligible.iter().map(|w| (w.id.as_str(), *w)).collect();

            let picked = rotation.advance(request.service_type, key_ids, |id| {
                eligible_by_id
                    .get(id)
                    .map_or(false, |w| !assigned_today.contains(id) && !in_slot(*w))
            });

            if let Some(idx) = picked {
                if let Some(worker) = eligible_by_id.get(key_ids[idx].as_str()) {
                    debug!(
                        service_type = request.service_type,
                        rotation_index = idx,
                        worker = %worker.name,
                        "轮到主要同工"
                    );
                    selected.push(*worker);
                }
            }
        }

        // 2) 非主要同工补足
        let others: Vec<&'a Worker> = eligible
            .iter()
            .copied()
            .filter(|w| {
                !key_ids.contains(&w.id) && !assigned_today.contains(&w.id) && !in_slot(*w)
            })
            .collect();

        for worker in self.sorter.sort_by_total(others, stats) {
            if selected.len() >= request.needed {
                break;
            }
            selected.push(worker);
        }

        selected
    }
}

impl Default for SlotFiller {
    fn default() -> Self {
        Self::new()
    }
}
