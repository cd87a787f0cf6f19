//! 核心类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type NewsResult<T> = Result<T, NewsError>;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("无效的输入: {0}")]
    InvalidInput(String),

    #[error("数据源错误: {0}")]
    Provider(String),
}

/// 新闻文章
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    /// 唯一标识（根据来源与标题生成的哈希）
    pub id: String,
    /// 标题
    pub headline: String,
    /// 正文
    pub content: String,
    /// 来源
    pub source: NewsSource,
    /// 发布时间
    pub published_at: DateTime<Utc>,
}

/// 新闻来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsSource {
    ForexFactory,
    Myfxbook,
    MarketNews,
}

impl std::fmt::Display for NewsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsSource::ForexFactory => write!(f, "Forex Factory"),
            NewsSource::Myfxbook => write!(f, "Myfxbook"),
            NewsSource::MarketNews => write!(f, "Market News"),
        }
    }
}

/// 情感分类（三档）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive, // > 0.2
    Negative, // < -0.2
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > 0.2 => SentimentLabel::Positive,
            s if s < -0.2 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// 情感分析结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    /// 情感分数 [-1.0, 1.0]，-1 极度负面，1 极度正面
    pub score: f64,
    /// 情感分类
    pub label: SentimentLabel,
    /// 文章与情感的简要总结
    pub summary: String,
}
