//! 错误与面板输出类型

use chrono::NaiveDate;
use forecast::{ForecastError, PerformanceMetrics};
use news::NewsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("表单校验失败: {0}")]
    InvalidForm(String),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    News(#[from] NewsError),
}

/// 预测面板的输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// 查询的股票代码
    pub ticker: String,
    /// 最近收盘价
    pub last_close: f64,
    /// 次日预测收盘价
    pub predicted_close: f64,
    /// 预测对应的交易日
    pub prediction_date: NaiveDate,
    /// 预测是否高于最近收盘价
    pub trending_up: bool,
    /// 回溯评估的误差指标
    pub metrics: PerformanceMetrics,
}
