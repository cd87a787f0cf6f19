//! 核心类型定义

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ForecastResult<T> = Result<T, ForecastError>;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("无效的输入: {0}")]
    InvalidInput(String),

    #[error("模型训练错误: {0}")]
    Training(String),

    #[error("模型预测错误: {0}")]
    Prediction(String),
}

/// 预测误差指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// 均方误差
    pub mse: f64,
    /// 平均绝对误差
    pub mae: f64,
    /// 均方根误差
    pub rmse: f64,
}

/// 模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelType {
    #[serde(rename = "LSTM")]
    Lstm,
    #[serde(rename = "ARIMA")]
    Arima,
    Prophet,
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelType::Lstm => write!(f, "LSTM"),
            ModelType::Arima => write!(f, "ARIMA"),
            ModelType::Prophet => write!(f, "Prophet"),
        }
    }
}

/// 训练请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    /// 股票代码
    pub ticker: String,
    /// 模型类型
    pub model_type: ModelType,
    /// 附加训练参数
    pub params: Option<serde_json::Value>,
}

/// 训练状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Success,
    Failure,
}

/// 训练结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// 训练出的模型标识
    pub model_id: String,
    /// 模型在验证集上的误差指标
    pub metrics: PerformanceMetrics,
    /// 训练状态
    pub status: TrainingStatus,
    /// 补充信息
    pub message: Option<String>,
}

/// 次日价格预测
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    /// 预测对应的交易日
    pub date: NaiveDate,
    /// 预测收盘价
    pub price: f64,
}

/// 实际值 / 预测值对
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    pub actual: f64,
    pub predicted: f64,
}
