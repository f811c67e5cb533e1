// ==========================================
// 服事表自动排班系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、写入
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::roster_config_trait::RosterConfigReader;
use crate::db::{ensure_config_schema, open_sqlite_connection};
use crate::domain::types::{schedule_types, DEFAULT_MULTI_CAPACITY};
use async_trait::async_trait;
use chrono::Weekday;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（配置表不存在时自动建立）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
            ensure_config_schema(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取 global scope 的配置值
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// 写入 global scope 的配置值（存在则覆盖）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    /// 获取所有 global 配置的快照（JSON，按键排序）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }
}

/// 解析星期（接受 SUN / sunday / 7 / 0 等写法）
fn parse_weekday(raw: &str) -> Option<Weekday> {
    match raw.trim().to_uppercase().as_str() {
        "0" | "7" => Some(Weekday::Sun),
        "6" => Some(Weekday::Sat),
        other => other.parse::<Weekday>().ok(),
    }
}

// ==========================================
// RosterConfigReader Trait 实现
// ==========================================
#[async_trait]
impl RosterConfigReader for ConfigManager {
    async fn get_default_multi_capacity(&self) -> Result<usize, Box<dyn Error>> {
        let default = DEFAULT_MULTI_CAPACITY.to_string();
        let value = self.get_config_or_default(config_keys::DEFAULT_MULTI_CAPACITY, &default)?;
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => {
                tracing::warn!(
                    config_key = config_keys::DEFAULT_MULTI_CAPACITY,
                    raw_value = %value,
                    "多人项目默认人数配置无效，使用默认值"
                );
                Ok(DEFAULT_MULTI_CAPACITY)
            }
        }
    }

    async fn get_role_capacity(&self, role_key: &str) -> Result<Option<usize>, Box<dyn Error>> {
        let key = format!("{}{}", config_keys::ROLE_CAPACITY_PREFIX, role_key.trim());
        let Some(value) = self.get_config_value(&key)? else {
            return Ok(None);
        };
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => {
                tracing::warn!(config_key = %key, raw_value = %value, "服事项目人数配置无效，忽略");
                Ok(None)
            }
        }
    }

    async fn get_service_weekday(&self, schedule_type: &str) -> Result<Weekday, Box<dyn Error>> {
        let builtin = if schedule_type == schedule_types::YOUTH_SERVICE {
            Weekday::Sat
        } else {
            Weekday::Sun
        };

        let key = format!("{}{}", config_keys::SERVICE_WEEKDAY_PREFIX, schedule_type);
        match self.get_config_value(&key)? {
            Some(value) => Ok(parse_weekday(&value).unwrap_or_else(|| {
                tracing::warn!(config_key = %key, raw_value = %value, "服事星期配置无效，使用默认值");
                builtin
            })),
            None => Ok(builtin),
        }
    }

    async fn get_locale(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(config_keys::LOCALE, "zh-TW")
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 人数
    pub const DEFAULT_MULTI_CAPACITY: &str = "default_multi_capacity";
    pub const ROLE_CAPACITY_PREFIX: &str = "role_capacity/";

    // 排班区间
    pub const SERVICE_WEEKDAY_PREFIX: &str = "service_weekday/";

    // 显示
    pub const LOCALE: &str = "locale";
}
