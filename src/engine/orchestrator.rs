// ==========================================
// 服事表自动排班系统 - 自动排班编排器
// ==========================================
// 计算主流程:
// 0) 以既有排班播种服事统计
// 1) 按日期顺序，每个日期按服事项目顺序只补空位
// 2) 单日项目排完后做绑定同工补排
// 3) 全部日期排完后检查最少服事次数
// ==========================================
// 红线: 纯计算，无 I/O，无跨次状态；同样输入必得同样输出
// ==========================================

use crate::domain::planning::PlanningInput;
use crate::domain::schedule::Schedule;
use crate::domain::service_item::{ServiceConfig, ServiceItem};
use crate::domain::types::AssignmentEntry;
use crate::domain::warning::RosterWarning;
use crate::engine::audit::MinServiceAudit;
use crate::engine::directory::WorkerDirectory;
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::linked_workers::LinkedWorkerReconciler;
use crate::engine::rotation::RotationState;
use crate::engine::slot_filler::{MultiSlotRequest, SlotFiller};
use crate::engine::worker_stats::WorkerStatsBook;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument, warn};

// ==========================================
// RosterResult - 排班结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterResult {
    /// 每个输入日期一笔，顺序与输入相同
    pub schedules: Vec<Schedule>,
    pub warnings: Vec<RosterWarning>,
    /// 同工名字 → 排班后的总服事次数（含既有排班）
    pub service_counts: BTreeMap<String, u32>,
}

impl RosterResult {
    pub fn schedule_for(&self, date: NaiveDate) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.date == date)
    }
}

// 单次排班的可变状态，排班结束即丢弃
struct RunContext<'a> {
    directory: WorkerDirectory<'a>,
    stats: WorkerStatsBook,
    rotation: RotationState,
    warnings: Vec<RosterWarning>,
}

impl RunContext<'_> {
    fn push_warning(&mut self, warning: RosterWarning) {
        warn!(
            kind = %warning.kind(),
            date = ?warning.date(),
            message = %warning.message(),
            "排班警告"
        );
        self.warnings.push(warning);
    }
}

// ==========================================
// RosterOrchestrator - 自动排班编排器
// ==========================================
pub struct RosterOrchestrator {
    eligibility: EligibilityFilter,
    filler: SlotFiller,
    linker: LinkedWorkerReconciler,
    audit: MinServiceAudit,
}

impl RosterOrchestrator {
    pub fn new() -> Self {
        Self {
            eligibility: EligibilityFilter::new(),
            filler: SlotFiller::new(),
            linker: LinkedWorkerReconciler::new(),
            audit: MinServiceAudit::new(),
        }
    }

    /// 执行一次自动排班（一个排班区间）
    ///
    /// # 参数
    /// - `dates`: 服事日期（按时间顺序）
    /// - `input`: 同工名册 / 服事项目（已按处理顺序排列）/ 项目配置 / 既有排班
    ///
    /// # 返回
    /// 每个日期一笔排班 + 全部警告；不会失败
    #[instrument(skip_all, fields(
        dates_count = dates.len(),
        workers_count = input.workers.len(),
        items_count = input.service_items.len(),
        existing_count = input.existing_schedules.len()
    ))]
    pub fn run(&self, dates: &[NaiveDate], input: &PlanningInput) -> RosterResult {
        info!("开始自动排班");

        let directory = WorkerDirectory::new(&input.workers);
        let mut stats = WorkerStatsBook::new(&input.workers);
        let seeded = stats.seed_from_existing(
            &directory,
            &input.service_items,
            &input.existing_schedules,
        );
        debug!(seeded, "既有排班统计完成");

        let mut ctx = RunContext {
            directory,
            stats,
            rotation: RotationState::new(),
            warnings: Vec::new(),
        };

        let schedules: Vec<Schedule> = dates
            .iter()
            .map(|&date| self.plan_day(date, input, &mut ctx))
            .collect();

        for warning in self.audit.audit(&ctx.directory, &ctx.stats) {
            ctx.push_warning(warning);
        }

        let service_counts = input
            .workers
            .iter()
            .map(|w| (w.name.clone(), ctx.stats.total(&w.id)))
            .collect();

        info!(
            schedules_count = schedules.len(),
            warnings_count = ctx.warnings.len(),
            "自动排班完成"
        );

        RosterResult {
            schedules,
            warnings: ctx.warnings,
            service_counts,
        }
    }

    // ==========================================
    // 单日排班
    // ==========================================

    fn plan_day(&self, date: NaiveDate, input: &PlanningInput, ctx: &mut RunContext<'_>) -> Schedule {
        // 既有排班原样带入（含特殊标签）
        let mut schedule = input
            .existing_schedules
            .iter()
            .find(|s| s.date == date)
            .cloned()
            .unwrap_or_else(|| Schedule::new(date));

        let mut assigned_today: HashSet<String> = schedule
            .all_names()
            .into_iter()
            .filter_map(|name| match ctx.directory.resolve(name) {
                AssignmentEntry::Known(id) => Some(id),
                AssignmentEntry::Freeform(_) => None,
            })
            .collect();

        for item in &input.service_items {
            self.fill_item(
                item,
                &mut schedule,
                &mut assigned_today,
                &input.service_configs,
                ctx,
            );
        }

        let placements = self.linker.reconcile(
            &mut schedule,
            &mut assigned_today,
            &ctx.directory,
            &input.service_items,
            &mut ctx.stats,
        );

        debug!(
            date = %date,
            assigned_count = assigned_today.len(),
            linked_count = placements.len(),
            "单日排班完成"
        );
        schedule
    }

    /// 单个服事项目的填充（只补空位）
    fn fill_item(
        &self,
        item: &ServiceItem,
        schedule: &mut Schedule,
        assigned_today: &mut HashSet<String>,
        configs: &[ServiceConfig],
        ctx: &mut RunContext<'_>,
    ) {
        let date = schedule.date;
        let service_type = item.service_type();
        let capacity = item.slot_capacity();

        // 1. 既有排班保留
        let current: Vec<String> = if item.is_multiple {
            let current: Vec<String> = schedule
                .multiple(&item.key)
                .into_iter()
                .map(str::to_string)
                .collect();
            schedule.set_multiple(&item.key, current.clone());
            if current.len() >= capacity {
                return;
            }
            current
        } else {
            if schedule.slot(&item.key).map_or(false, |v| !v.is_empty()) {
                return;
            }
            Vec::new()
        };

        // 2. 资格过滤
        let eligible =
            self.eligibility
                .eligible_workers(&ctx.directory, service_type, date, &ctx.stats);
        if eligible.is_empty() {
            if !item.is_multiple {
                schedule.set_single(&item.key, None);
            }
            ctx.push_warning(RosterWarning::NoWorker {
                date,
                role: item.label.clone(),
            });
            return;
        }

        let config = configs.iter().find(|c| c.service_type == service_type);

        // 3. 选人
        if item.is_multiple {
            let request = MultiSlotRequest {
                service_type,
                current_names: &current,
                needed: capacity - current.len(),
            };
            let selected = self.filler.select_multiple(
                &eligible,
                config,
                &request,
                assigned_today,
                &ctx.stats,
                &mut ctx.rotation,
            );

            let mut names = current.clone();
            for worker in &selected {
                names.push(worker.name.clone());
                assigned_today.insert(worker.id.clone());
                ctx.stats.record(&worker.id, service_type, date);
            }
            debug!(
                date = %date,
                role = %item.label,
                selected = ?selected.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
                "多人项目排定"
            );
            schedule.set_multiple(&item.key, names);
        } else {
            let selected = self.filler.select_single(
                &eligible,
                config,
                assigned_today,
                &ctx.stats,
                service_type,
            );

            match selected {
                Some(worker) => {
                    schedule.set_single(&item.key, Some(worker.name.clone()));
                    assigned_today.insert(worker.id.clone());
                    ctx.stats.record(&worker.id, service_type, date);
                    debug!(date = %date, role = %item.label, worker = %worker.name, "单人项目排定");

                    let missed_key = config.map_or(false, |c| {
                        !c.key_workers.is_empty() && !c.is_key_worker(&worker.id)
                    });
                    if missed_key {
                        ctx.push_warning(RosterWarning::NoKeyWorker {
                            date,
                            role: item.label.clone(),
                        });
                    }
                }
                None => schedule.set_single(&item.key, None),
            }
        }
    }
}

impl Default for RosterOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// 自动排班入口
pub fn generate_roster(dates: &[NaiveDate], input: &PlanningInput) -> RosterResult {
    RosterOrchestrator::new().run(dates, input)
}
