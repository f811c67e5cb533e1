// ==========================================
// 服事表自动排班系统 - 同工领域模型
// ==========================================
// 所有者: 外部同工名册（引擎只读）
// ==========================================

use crate::domain::types::WorkerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Worker - 同工
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    // ===== 身份 =====
    pub id: WorkerId,
    pub name: String,

    // ===== 名册状态 =====
    #[serde(default = "default_true")]
    pub is_active: bool, // 是否仍在服事名单中
    #[serde(default)]
    pub schedule_type: Option<String>, // 所属服事表类型

    // ===== 资格与限制 =====
    #[serde(default)]
    pub service_types: BTreeSet<String>, // 可参与的服事项目
    #[serde(default)]
    pub unavailable_weeks: BTreeSet<NaiveDate>, // 不可服事日期
    #[serde(default)]
    pub min_services: Option<u32>, // 每季最少服事次数（软约束）
    #[serde(default)]
    pub max_services: Option<u32>, // 每季最多服事次数（硬上限）

    // ===== 绑定关系 =====
    #[serde(default)]
    pub linked_workers: Vec<WorkerId>, // 绑定同工（同一週一起排）

    #[serde(default)]
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Worker {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_active: true,
            schedule_type: None,
            service_types: BTreeSet::new(),
            unavailable_weeks: BTreeSet::new(),
            min_services: None,
            max_services: None,
            linked_workers: Vec::new(),
            notes: None,
        }
    }

    pub fn is_qualified_for(&self, service_type: &str) -> bool {
        self.service_types.contains(service_type)
    }

    pub fn is_blacked_out(&self, date: NaiveDate) -> bool {
        self.unavailable_weeks.contains(&date)
    }

    /// 生效的最多次数（0 视为未设定）
    pub fn effective_max(&self) -> Option<u32> {
        self.max_services.filter(|&max| max > 0)
    }

    /// 生效的最少次数（0 视为未设定）
    pub fn effective_min(&self) -> Option<u32> {
        self.min_services.filter(|&min| min > 0)
    }

    /// 已达到最多服事次数
    pub fn is_at_ceiling(&self, total: u32) -> bool {
        self.effective_max().map_or(false, |max| total >= max)
    }

    pub fn has_linked_workers(&self) -> bool {
        !self.linked_workers.is_empty()
    }
}

// ==========================================
// 名册查询辅助
// ==========================================

/// 检查同工是否可在指定日期服事（在名单中且该日未请假）
pub fn can_worker_serve(worker: &Worker, date: NaiveDate) -> bool {
    worker.is_active && !worker.is_blacked_out(date)
}

/// 取得同工的绑定夥伴（按名册顺序，忽略名册中不存在的 ID）
pub fn linked_workers_of<'a>(worker: &Worker, all_workers: &'a [Worker]) -> Vec<&'a Worker> {
    if !worker.has_linked_workers() {
        return Vec::new();
    }
    all_workers
        .iter()
        .filter(|w| worker.linked_workers.contains(&w.id))
        .collect()
}
