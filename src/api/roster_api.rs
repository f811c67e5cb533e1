// ==========================================
// 服事表自动排班系统 - 排班 API
// ==========================================
// 职责: 季度排班入口（季度日期 + 人数解析 + 服事表类型过滤 + 引擎执行）
// 流程: Quarter → service_dates(weekday) → scoped_to(type) → 人数解析 → RosterOrchestrator
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::RosterConfigReader;
use crate::domain::{PlanningInput, Quarter, ServiceItem};
use crate::engine::{RosterOrchestrator, RosterResult};
use crate::i18n;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// PlanningRequest - 排班请求（CLI 输入文件格式）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningRequest {
    pub quarter: String,       // 如 "2025-Q1"
    pub schedule_type: String, // 如 "主日" / "青崇"
    #[serde(flatten)]
    pub input: PlanningInput,
}

// ==========================================
// QuarterRoster - 季度排班结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterRoster {
    pub quarter: String,
    pub schedule_type: String,
    pub dates: Vec<NaiveDate>,
    #[serde(flatten)]
    pub result: RosterResult,
    pub warning_messages: Vec<String>, // 按配置语言渲染（不改动全局 locale）
}

// ==========================================
// RosterApi - 排班 API
// ==========================================
pub struct RosterApi<C>
where
    C: RosterConfigReader,
{
    config: Arc<C>,
    orchestrator: RosterOrchestrator,
}

impl<C> RosterApi<C>
where
    C: RosterConfigReader,
{
    /// 创建新的 RosterApi 实例
    ///
    /// # 参数
    /// - config: 配置读取器
    pub fn new(config: Arc<C>) -> Self {
        Self {
            config,
            orchestrator: RosterOrchestrator::new(),
        }
    }

    /// 生成一季的服事表
    ///
    /// # 参数
    /// - quarter: 季度键（"2025-Q1"）
    /// - schedule_type: 服事表类型
    /// - input: 完整排班资料（会先按服事表类型过滤）
    ///
    /// # 返回
    /// - Ok(QuarterRoster): 排班结果 + 警告文字
    /// - Err(ApiError): 季度无效 / 类型为空 / 配置读取失败
    #[instrument(skip(self, input), fields(workers = input.workers.len()))]
    pub async fn generate_quarter_roster(
        &self,
        quarter: &str,
        schedule_type: &str,
        input: &PlanningInput,
    ) -> ApiResult<QuarterRoster> {
        let parsed = Quarter::parse(quarter)
            .ok_or_else(|| ApiError::InvalidQuarter(quarter.to_string()))?;
        let schedule_type = schedule_type.trim();
        if schedule_type.is_empty() {
            return Err(ApiError::InvalidInput(i18n::t("roster.empty_schedule_type")));
        }

        let weekday = self.config.get_service_weekday(schedule_type).await?;
        let dates = parsed.service_dates(weekday);

        let mut scoped = input.scoped_to(schedule_type);
        self.resolve_capacities(&mut scoped.service_items).await?;

        info!(
            quarter = %parsed,
            schedule_type = schedule_type,
            weekday = ?weekday,
            dates = dates.len(),
            roles = scoped.service_items.len(),
            "开始季度排班"
        );

        let result = self.orchestrator.run(&dates, &scoped);

        let locale = i18n::resolve_locale(&self.config.get_locale().await?);
        let warning_messages = result
            .warnings
            .iter()
            .map(|w| w.message_in(locale))
            .collect();

        Ok(QuarterRoster {
            quarter: parsed.key(),
            schedule_type: schedule_type.to_string(),
            dates,
            result,
            warning_messages,
        })
    }

    /// 执行排班请求（CLI 入口）
    pub async fn run_request(&self, request: &PlanningRequest) -> ApiResult<QuarterRoster> {
        self.generate_quarter_roster(&request.quarter, &request.schedule_type, &request.input)
            .await
    }

    /// 解析多人项目人数
    ///
    /// 优先级: 项目显式人数 > 配置 role_capacity/{key} > 配置默认人数
    async fn resolve_capacities(&self, items: &mut [ServiceItem]) -> ApiResult<()> {
        let default_capacity = self.config.get_default_multi_capacity().await?;
        for item in items.iter_mut().filter(|item| item.is_multiple) {
            if item.capacity.filter(|&c| c > 0).is_some() {
                continue;
            }
            let capacity = self
                .config
                .get_role_capacity(&item.key)
                .await?
                .unwrap_or(default_capacity);
            item.capacity = Some(capacity);
        }
        Ok(())
    }
}
