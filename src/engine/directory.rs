// ==========================================
// 服事表自动排班系统 - 同工名册索引
// ==========================================
// 排班记录以名字关联同工；每次排班建一次 名字→同工 / ID→同工 索引
// 名字找不到的（人工手填）解析为 Freeform，只占位不参与统计
// ==========================================

use crate::domain::types::AssignmentEntry;
use crate::domain::worker::Worker;
use std::collections::HashMap;

pub struct WorkerDirectory<'a> {
    workers: &'a [Worker],
    by_id: HashMap<&'a str, &'a Worker>,
    by_name: HashMap<&'a str, &'a Worker>,
}

impl<'a> WorkerDirectory<'a> {
    /// 建立索引；名字重复时以名册中靠后的为准
    pub fn new(workers: &'a [Worker]) -> Self {
        let mut by_id = HashMap::with_capacity(workers.len());
        let mut by_name = HashMap::with_capacity(workers.len());
        for worker in workers {
            by_id.insert(worker.id.as_str(), worker);
            by_name.insert(worker.name.as_str(), worker);
        }
        Self {
            workers,
            by_id,
            by_name,
        }
    }

    /// 名册原始顺序
    pub fn workers(&self) -> &'a [Worker] {
        self.workers
    }

    pub fn get(&self, id: &str) -> Option<&'a Worker> {
        self.by_id.get(id).copied()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'a Worker> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> AssignmentEntry {
        match self.find_by_name(name) {
            Some(worker) => AssignmentEntry::Known(worker.id.clone()),
            None => AssignmentEntry::Freeform(name.to_string()),
        }
    }
}
