//! # 预测引擎
//!
//! 为仪表盘提供价格预测、模拟模型训练以及预测误差指标计算。
//!
//! ## 主要模块
//!
//! - `metrics`: 预测误差指标（MSE / MAE / RMSE）
//! - `predictor`: 价格预测接口与随机游走实现
//! - `training`: 模型训练接口与模拟实现
//! - `types`: 核心类型定义

pub mod metrics;
pub mod predictor;
pub mod training;
pub mod types;

pub use metrics::error_metrics;
pub use predictor::{Forecaster, RandomWalkForecaster};
pub use training::{ModelTrainer, SimulatedTrainer};
pub use types::{
    ForecastError, ForecastResult, ModelType, PerformanceMetrics, PricePair, PricePrediction,
    TrainingReport, TrainingRequest, TrainingStatus,
};
