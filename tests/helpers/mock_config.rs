// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use chrono::Weekday;
use service_roster::config::RosterConfigReader;
use std::collections::HashMap;
use std::error::Error;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub default_multi_capacity: usize,
    pub role_capacities: HashMap<String, usize>,
    pub weekdays: HashMap<String, Weekday>,
    pub locale: String,
    pub fail_reads: bool,
}

impl MockConfig {
    /// 创建默认配置（与 ConfigManager 的内置默认值一致）
    pub fn default() -> Self {
        Self {
            default_multi_capacity: 2,
            role_capacities: HashMap::new(),
            weekdays: HashMap::new(),
            locale: "zh-TW".to_string(),
            fail_reads: false,
        }
    }

    pub fn with_role_capacity(mut self, role_key: &str, capacity: usize) -> Self {
        self.role_capacities.insert(role_key.to_string(), capacity);
        self
    }

    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_multi_capacity = capacity;
        self
    }

    pub fn with_weekday(mut self, schedule_type: &str, weekday: Weekday) -> Self {
        self.weekdays.insert(schedule_type.to_string(), weekday);
        self
    }

    /// 所有读取都失败（模拟数据库不可用）
    pub fn failing() -> Self {
        let mut config = Self::default();
        config.fail_reads = true;
        config
    }

    fn check(&self) -> Result<(), Box<dyn Error>> {
        if self.fail_reads {
            return Err("mock config unavailable".into());
        }
        Ok(())
    }
}

#[async_trait]
impl RosterConfigReader for MockConfig {
    async fn get_default_multi_capacity(&self) -> Result<usize, Box<dyn Error>> {
        self.check()?;
        Ok(self.default_multi_capacity)
    }

    async fn get_role_capacity(&self, role_key: &str) -> Result<Option<usize>, Box<dyn Error>> {
        self.check()?;
        Ok(self.role_capacities.get(role_key).copied())
    }

    async fn get_service_weekday(&self, schedule_type: &str) -> Result<Weekday, Box<dyn Error>> {
        self.check()?;
        Ok(self
            .weekdays
            .get(schedule_type)
            .copied()
            .unwrap_or(Weekday::Sun))
    }

    async fn get_locale(&self) -> Result<String, Box<dyn Error>> {
        self.check()?;
        Ok(self.locale.clone())
    }
}
