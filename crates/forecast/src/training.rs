//! 模拟模型训练模块
//!
//! 训练是仿真的：不做任何真实拟合，延迟后返回固定的指标载荷。

use crate::types::{
    ForecastError, ForecastResult, PerformanceMetrics, TrainingReport, TrainingRequest,
    TrainingStatus,
};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// 模型训练接口
#[async_trait]
pub trait ModelTrainer: Send + Sync {
    /// 训练模型并返回训练结果
    async fn train(&self, request: &TrainingRequest) -> ForecastResult<TrainingReport>;
}

/// 模拟训练器
pub struct SimulatedTrainer {
    delay: Duration,
}

impl SimulatedTrainer {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(500),
        }
    }

    /// 指定模拟训练耗时（测试中用 0）
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ModelTrainer for SimulatedTrainer {
    async fn train(&self, request: &TrainingRequest) -> ForecastResult<TrainingReport> {
        if request.ticker.trim().is_empty() {
            return Err(ForecastError::InvalidInput(
                "股票代码不能为空".to_string(),
            ));
        }

        tracing::info!(
            "Training {} model for {}",
            request.model_type,
            request.ticker
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(TrainingReport {
            model_id: format!("model-{}", Utc::now().timestamp_millis()),
            metrics: PerformanceMetrics {
                mse: 0.01,
                mae: 0.05,
                rmse: 0.1,
            },
            status: TrainingStatus::Success,
            message: Some("Model trained successfully.".to_string()),
        })
    }
}

impl Default for SimulatedTrainer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModelType;

    fn request(ticker: &str) -> TrainingRequest {
        TrainingRequest {
            ticker: ticker.to_string(),
            model_type: ModelType::Lstm,
            params: None,
        }
    }

    #[tokio::test]
    async fn test_simulated_training_report() {
        let trainer = SimulatedTrainer::with_delay(Duration::ZERO);
        let report = trainer.train(&request("AI-STOCK")).await.unwrap();

        assert!(report.model_id.starts_with("model-"));
        assert_eq!(report.status, TrainingStatus::Success);
        assert_eq!(report.metrics.mse, 0.01);
        assert_eq!(report.metrics.mae, 0.05);
        assert_eq!(report.metrics.rmse, 0.1);
        assert_eq!(
            report.message.as_deref(),
            Some("Model trained successfully.")
        );
    }

    #[tokio::test]
    async fn test_empty_ticker_rejected() {
        let trainer = SimulatedTrainer::with_delay(Duration::ZERO);
        let result = trainer.train(&request("   ")).await;

        assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_report_serializes_status_lowercase() {
        let trainer = SimulatedTrainer::with_delay(Duration::ZERO);
        let report = trainer.train(&request("EURUSD")).await.unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["metrics"]["rmse"], 0.1);
    }
}
