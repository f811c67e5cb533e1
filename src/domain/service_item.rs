// ==========================================
// 服事表自动排班系统 - 服事项目与项目配置
// ==========================================
// ServiceItem: 服事项目定义（排班时按 sort_order 依序处理）
// ServiceConfig: 每个服事类型的主要同工与显示顺序
// ==========================================

use crate::domain::types::{WorkerId, DEFAULT_MULTI_CAPACITY};
use crate::domain::worker::Worker;
use serde::{Deserialize, Serialize};

// ==========================================
// ServiceItem - 服事项目
// ==========================================
// 红线: 项目顺序有意义，后面的项目能看到前面项目本日已排的同工
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub key: String,   // 唯一识别码（排班记录中的栏位名）
    pub label: String, // 显示名称，同时作为服事类型
    #[serde(default)]
    pub is_multiple: bool,
    #[serde(default)]
    pub capacity: Option<usize>, // 多人项目人数；未设定时由配置决定
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub schedule_type: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ServiceItem {
    pub fn single(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            is_multiple: false,
            capacity: None,
            sort_order: 0,
            is_active: true,
            schedule_type: None,
        }
    }

    pub fn multiple(key: &str, label: &str, capacity: usize) -> Self {
        Self {
            is_multiple: true,
            capacity: Some(capacity),
            ..Self::single(key, label)
        }
    }

    /// 服事类型（同工资格与主要同工配置以此为键）
    pub fn service_type(&self) -> &str {
        &self.label
    }

    /// 本项目的人数上限
    ///
    /// 单人项目恒为 1；多人项目取显式配置，未配置时为 2
    pub fn slot_capacity(&self) -> usize {
        if self.is_multiple {
            self.capacity.filter(|&c| c > 0).unwrap_or(DEFAULT_MULTI_CAPACITY)
        } else {
            1
        }
    }
}

// ==========================================
// ServiceConfig - 服事项目配置
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_type: String,
    #[serde(default)]
    pub key_workers: Vec<WorkerId>, // 主要同工（有序，多人项目按此顺序轮流）
    #[serde(default)]
    pub worker_order: Vec<WorkerId>, // 同工显示顺序
    #[serde(default)]
    pub schedule_type: Option<String>,
}

impl ServiceConfig {
    pub fn new(service_type: &str, key_workers: &[&str]) -> Self {
        Self {
            service_type: service_type.to_string(),
            key_workers: key_workers.iter().map(|s| s.to_string()).collect(),
            worker_order: Vec::new(),
            schedule_type: None,
        }
    }

    pub fn is_key_worker(&self, worker_id: &str) -> bool {
        self.key_workers.iter().any(|id| id == worker_id)
    }

    /// 按 worker_order 排列具备本服事资格的同工
    ///
    /// 出现在 worker_order 中的同工按其顺序排在前面，其余保持输入顺序
    pub fn order_workers<'a>(&self, workers: &'a [Worker]) -> Vec<&'a Worker> {
        let mut qualified: Vec<&Worker> = workers
            .iter()
            .filter(|w| w.is_qualified_for(&self.service_type))
            .collect();

        if self.worker_order.is_empty() {
            return qualified;
        }

        qualified.sort_by_key(|w| {
            self.worker_order
                .iter()
                .position(|id| id == &w.id)
                .unwrap_or(usize::MAX)
        });
        qualified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_capacity() {
        assert_eq!(ServiceItem::single("worship", "敬拜").slot_capacity(), 1);
        assert_eq!(ServiceItem::multiple("vocals", "Vocal", 3).slot_capacity(), 3);

        let mut item = ServiceItem::multiple("ushers", "招待", 0);
        assert_eq!(item.slot_capacity(), DEFAULT_MULTI_CAPACITY);
        item.capacity = None;
        assert_eq!(item.slot_capacity(), DEFAULT_MULTI_CAPACITY);
    }

    #[test]
    fn test_order_workers_by_worker_order() {
        let mk = |id: &str| {
            let mut w = Worker::new(id, id);
            w.service_types.insert("招待".to_string());
            w
        };
        let mut other = Worker::new("x", "x");
        other.service_types.insert("司琴".to_string());
        let workers = vec![mk("a"), mk("b"), other, mk("c"), mk("d")];

        let mut config = ServiceConfig::new("招待", &[]);
        config.worker_order = vec!["c".to_string(), "a".to_string()];

        let ordered: Vec<&str> = config
            .order_workers(&workers)
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["c", "a", "b", "d"]);
    }
}
