// ==========================================
// 服事表自动排班系统 - 排班记录
// ==========================================
// 一个日期一笔记录；栏位以服事项目 key 为键
// 单人项目存名字，多人项目存名字列表（顺序即选取顺序）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// SlotValue - 栏位值
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    One(String),
    Many(Vec<String>),
}

impl SlotValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SlotValue::One(name) => name.trim().is_empty(),
            SlotValue::Many(names) => names.is_empty(),
        }
    }

    /// 栏位中的名字（空字符串忽略）
    pub fn names(&self) -> Vec<&str> {
        match self {
            SlotValue::One(name) if name.trim().is_empty() => Vec::new(),
            SlotValue::One(name) => vec![name.as_str()],
            SlotValue::Many(names) => names
                .iter()
                .map(String::as_str)
                .filter(|n| !n.trim().is_empty())
                .collect(),
        }
    }
}

// ==========================================
// Schedule - 单日排班
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub date: NaiveDate,
    #[serde(default)]
    pub slots: BTreeMap<String, SlotValue>,
    #[serde(default)]
    pub special_tags: Vec<String>, // 如 聖餐 / 愛餐
}

impl Schedule {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            slots: BTreeMap::new(),
            special_tags: Vec::new(),
        }
    }

    pub fn slot(&self, key: &str) -> Option<&SlotValue> {
        self.slots.get(key)
    }

    /// 单人项目的名字（空视为 None）
    pub fn single(&self, key: &str) -> Option<&str> {
        match self.slots.get(key) {
            Some(SlotValue::One(name)) if !name.trim().is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// 多人项目的名字列表（不存在时为空）
    pub fn multiple(&self, key: &str) -> Vec<&str> {
        self.slots.get(key).map(|v| v.names()).unwrap_or_default()
    }

    /// 本日所有已填的名字（按栏位顺序）
    pub fn all_names(&self) -> Vec<&str> {
        self.slots.values().flat_map(|v| v.names()).collect()
    }

    pub fn set_single(&mut self, key: &str, name: Option<String>) {
        match name {
            Some(name) => {
                self.slots.insert(key.to_string(), SlotValue::One(name));
            }
            None => {
                self.slots.remove(key);
            }
        }
    }

    pub fn set_multiple(&mut self, key: &str, names: Vec<String>) {
        self.slots.insert(key.to_string(), SlotValue::Many(names));
    }

    pub fn with_single(mut self, key: &str, name: &str) -> Self {
        self.set_single(key, Some(name.to_string()));
        self
    }

    pub fn with_multiple(mut self, key: &str, names: &[&str]) -> Self {
        self.set_multiple(key, names.iter().map(|s| s.to_string()).collect());
        self
    }
}
