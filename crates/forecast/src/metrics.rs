//! 预测误差指标计算
//!
//! 对齐的实际值 / 预测值序列上的三个标准回归误差统计量。
//! 纯函数，无内部状态，可被任意并发调用。

use crate::types::{ForecastError, ForecastResult, PerformanceMetrics};

/// 计算 MSE / MAE / RMSE
///
/// 两个序列必须等长且非空，否则返回 [`ForecastError::InvalidInput`]，
/// 不产生部分结果。
pub fn error_metrics(actual: &[f64], predicted: &[f64]) -> ForecastResult<PerformanceMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::InvalidInput("序列不能为空".to_string()));
    }

    if actual.len() != predicted.len() {
        return Err(ForecastError::InvalidInput(format!(
            "序列长度不匹配: actual {} vs predicted {}",
            actual.len(),
            predicted.len()
        )));
    }

    let n = actual.len() as f64;

    let mse = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (p - a).powi(2))
        .sum::<f64>()
        / n;

    let mae = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (p - a).abs())
        .sum::<f64>()
        / n;

    Ok(PerformanceMetrics {
        mse,
        mae,
        rmse: mse.sqrt(),
    })
}
