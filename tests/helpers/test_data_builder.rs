// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use service_roster::domain::{PlanningInput, Schedule, ServiceConfig, ServiceItem, Worker};

/// 2025 年 1 月的某日
pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

/// 2025-Q1 前 n 个主日（1/5 起每週）
pub fn sundays(n: usize) -> Vec<NaiveDate> {
    (0..n)
        .map(|i| jan(5) + chrono::Duration::weeks(i as i64))
        .collect()
}

// ==========================================
// Worker 构建器
// ==========================================

pub struct WorkerBuilder {
    worker: Worker,
}

impl WorkerBuilder {
    /// id 与 name 相同，方便断言
    pub fn new(id: &str) -> Self {
        Self {
            worker: Worker::new(id, id),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.worker.name = name.to_string();
        self
    }

    pub fn serves(mut self, service_types: &[&str]) -> Self {
        self.worker
            .service_types
            .extend(service_types.iter().map(|s| s.to_string()));
        self
    }

    pub fn unavailable(mut self, date: NaiveDate) -> Self {
        self.worker.unavailable_weeks.insert(date);
        self
    }

    pub fn min(mut self, n: u32) -> Self {
        self.worker.min_services = Some(n);
        self
    }

    pub fn max(mut self, n: u32) -> Self {
        self.worker.max_services = Some(n);
        self
    }

    pub fn linked(mut self, ids: &[&str]) -> Self {
        self.worker
            .linked_workers
            .extend(ids.iter().map(|s| s.to_string()));
        self
    }

    pub fn inactive(mut self) -> Self {
        self.worker.is_active = false;
        self
    }

    pub fn schedule_type(mut self, schedule_type: &str) -> Self {
        self.worker.schedule_type = Some(schedule_type.to_string());
        self
    }

    pub fn build(self) -> Worker {
        self.worker
    }
}

// ==========================================
// PlanningInput 构建器
// ==========================================

#[derive(Default)]
pub struct InputBuilder {
    input: PlanningInput,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn worker(mut self, worker: WorkerBuilder) -> Self {
        self.input.workers.push(worker.build());
        self
    }

    pub fn item(mut self, item: ServiceItem) -> Self {
        self.input.service_items.push(item);
        self
    }

    pub fn key_workers(mut self, service_type: &str, ids: &[&str]) -> Self {
        self.input
            .service_configs
            .push(ServiceConfig::new(service_type, ids));
        self
    }

    pub fn existing(mut self, schedule: Schedule) -> Self {
        self.input.existing_schedules.push(schedule);
        self
    }

    pub fn build(self) -> PlanningInput {
        self.input
    }
}
