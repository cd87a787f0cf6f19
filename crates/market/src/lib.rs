//! # 模拟行情数据
//!
//! 为仪表盘提供合成的历史 OHLC 行情序列。
//!
//! ## 主要模块
//!
//! - `types`: 行情数据类型
//! - `history`: 随机游走历史行情生成器

pub mod history;
pub mod types;

pub use history::HistoryGenerator;
pub use types::StockBar;
