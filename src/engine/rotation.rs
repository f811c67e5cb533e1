// ==========================================
// 服事表自动排班系统 - 主要同工轮流游标
// ==========================================
// 每个服事类型一个游标（上次选中的主要同工索引），只在单次排班内有效
// ==========================================

use crate::domain::types::WorkerId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RotationState {
    cursors: HashMap<String, usize>,
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 上次选中的索引（尚未轮到任何人时为 None）
    pub fn last_index(&self, service_type: &str) -> Option<usize> {
        self.cursors.get(service_type).copied()
    }

    /// 从游标下一位起环形扫描主要同工
    ///
    /// 返回第一个 `is_available` 的索引并把游标移到该处；
    /// 全部不可用时游标不动
    pub fn advance<F>(
        &mut self,
        service_type: &str,
        key_workers: &[WorkerId],
        is_available: F,
    ) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        let len = key_workers.len();
        if len == 0 {
            return None;
        }

        let start = self
            .last_index(service_type)
            .map_or(0, |last| (last + 1) % len);

        let found = (0..len)
            .map(|step| (start + step) % len)
            .find(|&idx| is_available(&key_workers[idx]))?;

        self.cursors.insert(service_type.to_string(), found);
        Some(found)
    }
}
