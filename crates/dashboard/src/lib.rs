//! # 分析仪表盘
//!
//! 把行情、预测与新闻情感三个面板编排成一个会话级的分析引擎。
//! 每个会话持有自己的状态，会话之间不共享任何可变数据。
//!
//! ## 主要模块
//!
//! - `session`: 仪表盘会话与构建器
//! - `types`: 错误与面板输出类型

pub mod session;
pub mod types;

pub use session::{DashboardBuilder, DashboardSession};
pub use types::{DashboardError, DashboardResult, SearchOutcome};

use serde::{Deserialize, Serialize};

/// 仪表盘配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 默认股票代码
    pub default_ticker: String,
    /// 历史行情天数
    pub history_days: usize,
    /// 行情起始价格
    pub initial_price: f64,
    /// 单日最大波动比例
    pub volatility: f64,
    /// 误差评估窗口（最近 N 天收盘价）
    pub evaluation_window: usize,
    /// 模拟请求延迟（毫秒）
    pub simulate_latency_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_ticker: "AI-STOCK".to_string(),
            history_days: 30,
            initial_price: 150.0,
            volatility: 0.05,
            evaluation_window: 10,
            simulate_latency_ms: 1500,
        }
    }
}
