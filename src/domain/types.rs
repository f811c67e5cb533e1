// ==========================================
// 服事表自动排班系统 - 领域类型定义
// ==========================================
// 职责: 基础标识类型、服事表类型、名字解析结果
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 同工 ID（由外部同工名册分配）
pub type WorkerId = String;

/// 多人服事项目的默认人数
pub const DEFAULT_MULTI_CAPACITY: usize = 2;

// ==========================================
// 服事表类型 (Schedule Type)
// ==========================================
// 同一套数据按服事表类型分区（主日 / 青崇 / 兒主）
pub mod schedule_types {
    pub const SUNDAY_SERVICE: &str = "主日";
    pub const YOUTH_SERVICE: &str = "青崇";
    pub const CHILDREN_SERVICE: &str = "兒主";
}

// ==========================================
// 排班格解析结果 (Assignment Entry)
// ==========================================
// 排班记录以显示名字关联同工；名字在名册中找不到时
// （人工手填）按不透明字符串处理：占位但不参与资格与统计
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssignmentEntry {
    Known(WorkerId),
    Freeform(String),
}

impl AssignmentEntry {
    /// 已解析到名册同工时返回其 ID
    pub fn worker_id(&self) -> Option<&str> {
        match self {
            AssignmentEntry::Known(id) => Some(id.as_str()),
            AssignmentEntry::Freeform(_) => None,
        }
    }
}

// ==========================================
// 警告类别 (Warning Kind)
// ==========================================
// 序列化格式: snake_case（与前端警告面板一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    NoWorker,    // 无可用同工
    NoKeyWorker, // 未安排主要同工
    BelowMin,    // 低于最少服事次数
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::NoWorker => "no_worker",
            WarningKind::NoKeyWorker => "no_key_worker",
            WarningKind::BelowMin => "below_min",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
