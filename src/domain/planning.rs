// ==========================================
// 服事表自动排班系统 - 排班输入
// ==========================================
// 引擎的全部输入：同工名册、服事项目、项目配置、既有排班
// 由外部各仓储取出后组装，引擎只读
// ==========================================

use crate::domain::schedule::Schedule;
use crate::domain::service_item::{ServiceConfig, ServiceItem};
use crate::domain::worker::Worker;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningInput {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub service_items: Vec<ServiceItem>,
    #[serde(default)]
    pub service_configs: Vec<ServiceConfig>,
    #[serde(default)]
    pub existing_schedules: Vec<Schedule>,
}

/// 未标记服事表类型的实体属于所有服事表
fn belongs_to(entity_type: &Option<String>, schedule_type: &str) -> bool {
    entity_type.as_deref().map_or(true, |t| t == schedule_type)
}

impl PlanningInput {
    /// 收窄到指定服事表类型
    ///
    /// - 同工必须明确属于该服事表
    /// - 服事项目、项目配置未标记类型时视为共用
    /// - 停用的服事项目移除
    /// - 服事项目按 sort_order 稳定排序
    ///
    /// 既有排班由调用方按服事表取出，这里不再过滤
    pub fn scoped_to(&self, schedule_type: &str) -> PlanningInput {
        let mut service_items: Vec<ServiceItem> = self
            .service_items
            .iter()
            .filter(|item| item.is_active && belongs_to(&item.schedule_type, schedule_type))
            .cloned()
            .collect();
        service_items.sort_by_key(|item| item.sort_order);

        PlanningInput {
            workers: self
                .workers
                .iter()
                .filter(|w| w.schedule_type.as_deref() == Some(schedule_type))
                .cloned()
                .collect(),
            service_items,
            service_configs: self
                .service_configs
                .iter()
                .filter(|c| belongs_to(&c.schedule_type, schedule_type))
                .cloned()
                .collect(),
            existing_schedules: self.existing_schedules.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::schedule_types::{SUNDAY_SERVICE, YOUTH_SERVICE};

    #[test]
    fn test_scoped_to_filters_and_sorts() {
        let mut youth_worker = Worker::new("y", "青年");
        youth_worker.schedule_type = Some(YOUTH_SERVICE.to_string());
        let mut sunday_worker = Worker::new("s", "主日");
        sunday_worker.schedule_type = Some(SUNDAY_SERVICE.to_string());
        let shared_worker = Worker::new("x", "共用");

        let mut piano = ServiceItem::single("piano", "司琴");
        piano.sort_order = 2;
        let mut worship = ServiceItem::single("worship", "敬拜");
        worship.sort_order = 1;
        let mut retired = ServiceItem::single("old", "舊項目");
        retired.is_active = false;

        let input = PlanningInput {
            workers: vec![youth_worker, sunday_worker, shared_worker],
            service_items: vec![piano, retired, worship],
            service_configs: vec![],
            existing_schedules: vec![],
        };

        let scoped = input.scoped_to(SUNDAY_SERVICE);
        let ids: Vec<&str> = scoped.workers.iter().map(|w| w.id.as_str()).collect();
        // 未标记类型的同工不进入任何服事表
        assert_eq!(ids, vec!["s"]);
        let keys: Vec<&str> = scoped.service_items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["worship", "piano"]);
    }
}
