//! # 财经新闻与情感分析
//!
//! 为仪表盘提供新闻抓取（模板化数据源）和确定性的情感分析。
//!
//! ## 主要模块
//!
//! - `provider`: 新闻数据源接口与聚合器
//! - `sentiment`: 基于词典的情感分析器
//! - `types`: 核心类型定义

pub mod provider;
pub mod sentiment;
pub mod types;

pub use provider::{NewsDesk, NewsProvider, TemplatedNewsProvider};
pub use sentiment::SentimentAnalyzer;
pub use types::{
    NewsArticle, NewsError, NewsResult, NewsSource, SentimentLabel, SentimentReport,
};
