//! 行情数据类型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单日行情（OHLC）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockBar {
    /// 交易日
    pub date: NaiveDate,
    /// 开盘价
    pub open: f64,
    /// 最高价
    pub high: f64,
    /// 最低价
    pub low: f64,
    /// 收盘价
    pub close: f64,
}
