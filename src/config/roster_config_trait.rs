// ==========================================
// 服事表自动排班系统 - 排班配置读取 Trait
// ==========================================
// 职责: 定义排班所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use chrono::Weekday;
use std::error::Error;

// ==========================================
// RosterConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait RosterConfigReader: Send + Sync {
    // ===== 人数配置 =====

    /// 多人项目默认人数
    ///
    /// # 默认值
    /// - 2
    async fn get_default_multi_capacity(&self) -> Result<usize, Box<dyn Error>>;

    /// 指定服事项目的人数覆写
    ///
    /// # 返回
    /// - Some(n): 已配置 `role_capacity/{key}`
    /// - None: 未配置（使用默认人数）
    async fn get_role_capacity(&self, role_key: &str) -> Result<Option<usize>, Box<dyn Error>>;

    // ===== 排班区间配置 =====

    /// 服事表类型对应的服事星期
    ///
    /// # 默认值
    /// - 青崇: 星期六
    /// - 其他: 星期日
    async fn get_service_weekday(&self, schedule_type: &str) -> Result<Weekday, Box<dyn Error>>;

    // ===== 显示配置 =====

    /// 警告文字语言
    ///
    /// # 默认值
    /// - zh-TW
    async fn get_locale(&self) -> Result<String, Box<dyn Error>>;
}
