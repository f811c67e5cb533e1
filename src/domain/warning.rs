// ==========================================
// 服事表自动排班系统 - 排班警告
// ==========================================
// 警告是数据，不是错误：收集后交给上层显示，排班流程从不因此中断
// ==========================================

use crate::domain::types::WarningKind;
use crate::i18n::{current_locale, t_with_args_in};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterWarning {
    /// 该日该项目没有任何可用同工
    NoWorker { date: NaiveDate, role: String },
    /// 单人项目已排，但不是主要同工
    NoKeyWorker { date: NaiveDate, role: String },
    /// 同工本季服事次数低于最少要求
    BelowMin {
        worker: String,
        achieved: u32,
        required: u32,
    },
}

impl RosterWarning {
    pub fn kind(&self) -> WarningKind {
        match self {
            RosterWarning::NoWorker { .. } => WarningKind::NoWorker,
            RosterWarning::NoKeyWorker { .. } => WarningKind::NoKeyWorker,
            RosterWarning::BelowMin { .. } => WarningKind::BelowMin,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            RosterWarning::NoWorker { date, .. } | RosterWarning::NoKeyWorker { date, .. } => {
                Some(*date)
            }
            RosterWarning::BelowMin { .. } => None,
        }
    }

    /// 给操作人员看的说明文字（按当前语言）
    pub fn message(&self) -> String {
        self.message_in(&current_locale())
    }

    /// 给操作人员看的说明文字（指定语言）
    pub fn message_in(&self, locale: &str) -> String {
        match self {
            RosterWarning::NoWorker { date, role } => t_with_args_in(
                locale,
                "warning.no_worker",
                &[("date", &date.to_string()), ("role", role)],
            ),
            RosterWarning::NoKeyWorker { date, role } => t_with_args_in(
                locale,
                "warning.no_key_worker",
                &[("date", &date.to_string()), ("role", role)],
            ),
            RosterWarning::BelowMin {
                worker,
                achieved,
                required,
            } => t_with_args_in(
                locale,
                "warning.below_min",
                &[
                    ("worker", worker),
                    ("achieved", &achieved.to_string()),
                    ("required", &required.to_string()),
                ],
            ),
        }
    }
}
