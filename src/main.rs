// ==========================================
// 服事表自动排班系统 - 命令行入口
// ==========================================
// 用法: service-roster <input.json> [db_path]
// 输入: PlanningRequest JSON（quarter + schedule_type + 排班资料）
// 输出: QuarterRoster JSON（stdout），日志走 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use service_roster::api::{PlanningRequest, RosterApi};
use service_roster::config::ConfigManager;
use service_roster::db::get_default_db_path;
use service_roster::logging;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let Some(input_path) = args.next() else {
        bail!("用法: service-roster <input.json> [db_path]");
    };
    let db_path = args.next().unwrap_or_else(get_default_db_path);

    tracing::info!(
        version = service_roster::VERSION,
        input = %input_path,
        db = %db_path,
        "{}",
        service_roster::APP_NAME
    );

    let raw = std::fs::read_to_string(&input_path)
        .with_context(|| format!("无法读取输入文件: {}", input_path))?;
    let request: PlanningRequest =
        serde_json::from_str(&raw).with_context(|| format!("输入文件格式错误: {}", input_path))?;

    let config = ConfigManager::new(&db_path)
        .map_err(|e| anyhow::anyhow!("无法打开配置数据库 {}: {}", db_path, e))?;
    let api = RosterApi::new(Arc::new(config));

    let roster = api.run_request(&request).await?;

    tracing::info!(
        quarter = %roster.quarter,
        schedules = roster.result.schedules.len(),
        warnings = roster.result.warnings.len(),
        "排班完成"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&roster).context("排班结果序列化失败")?
    );
    Ok(())
}
