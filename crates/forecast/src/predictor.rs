//! 价格预测模块

use crate::types::{ForecastError, ForecastResult, PricePair, PricePrediction};
use async_trait::async_trait;
use chrono::Duration;
use market::StockBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// 价格预测接口
#[async_trait]
pub trait Forecaster: Send + Sync {
    /// 基于历史行情预测次日收盘价
    async fn predict_next(&self, history: &[StockBar]) -> ForecastResult<PricePrediction>;

    /// 取最近 `window` 天的收盘价，并配上模型的回溯预测值，
    /// 用于误差指标评估
    async fn recent_pairs(
        &self,
        history: &[StockBar],
        window: usize,
    ) -> ForecastResult<Vec<PricePair>>;
}

/// 随机游走预测器
///
/// 在最近收盘价上做随机扰动：次日预测带轻微上行偏置（±10% 区间内），
/// 回溯预测在实际收盘价 ±2.5% 内波动。
pub struct RandomWalkForecaster {
    rng: Mutex<StdRng>,
}

impl RandomWalkForecaster {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 使用固定种子创建（测试用）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn last_bar(history: &[StockBar]) -> ForecastResult<&StockBar> {
        history
            .last()
            .ok_or_else(|| ForecastError::InvalidInput("历史行情不能为空".to_string()))
    }
}

#[async_trait]
impl Forecaster for RandomWalkForecaster {
    async fn predict_next(&self, history: &[StockBar]) -> ForecastResult<PricePrediction> {
        let last = Self::last_bar(history)?;

        let u: f64 = {
            // 锁中毒时直接取回内部状态，随机数生成器没有需要保护的不变量
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen()
        };

        Ok(PricePrediction {
            date: last.date + Duration::days(1),
            price: last.close * (1.0 + (u - 0.45) * 0.1),
        })
    }

    async fn recent_pairs(
        &self,
        history: &[StockBar],
        window: usize,
    ) -> ForecastResult<Vec<PricePair>> {
        Self::last_bar(history)?;
        if window == 0 {
            return Err(ForecastError::InvalidInput(
                "评估窗口必须大于 0".to_string(),
            ));
        }

        let start = history.len().saturating_sub(window);
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let pairs = history[start..]
            .iter()
            .map(|bar| {
                let u: f64 = rng.gen();
                PricePair {
                    actual: bar.close,
                    predicted: bar.close * (1.0 + (u - 0.5) * 0.05),
                }
            })
            .collect();

        Ok(pairs)
    }
}

impl Default for RandomWalkForecaster {
    fn default() -> Self {
        Self::new()
    }
}
