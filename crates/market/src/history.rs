//! 随机游走历史行情生成器

use crate::types::StockBar;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 历史行情生成器
///
/// 以随机游走方式生成连续交易日的 OHLC 序列，
/// 价格保留两位小数，日期按升序排列并以今天结尾。
pub struct HistoryGenerator {
    initial_price: f64,
    volatility: f64,
    rng: StdRng,
}

impl HistoryGenerator {
    /// 创建生成器
    ///
    /// # 参数
    /// - `initial_price`: 起始价格
    /// - `volatility`: 单日最大波动比例（如 0.05 表示 ±5%）
    pub fn new(initial_price: f64, volatility: f64) -> Self {
        Self {
            initial_price,
            volatility,
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子创建生成器（测试用）
    pub fn with_seed(initial_price: f64, volatility: f64, seed: u64) -> Self {
        Self {
            initial_price,
            volatility,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 生成 `days` 天的历史行情
    pub fn generate(&mut self, days: usize) -> Vec<StockBar> {
        let mut bars = Vec::with_capacity(days);
        let today = Utc::now().date_naive();
        let mut price = self.initial_price;

        for offset in (0..days).rev() {
            let change = 2.0 * self.volatility * self.rng.gen::<f64>() - self.volatility;
            let open = price;
            let high = open * (1.0 + self.rng.gen::<f64>() * self.volatility / 2.0);
            let low = open * (1.0 - self.rng.gen::<f64>() * self.volatility / 2.0);
            let close = open * (1.0 + change);
            price = close;

            bars.push(StockBar {
                date: today - Duration::days(offset as i64),
                open: round_cents(open),
                high: round_cents(high),
                low: round_cents(low),
                close: round_cents(close),
            });
        }

        bars
    }
}

impl Default for HistoryGenerator {
    fn default() -> Self {
        Self::new(150.0, 0.05)
    }
}

/// 保留两位小数
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_history() {
        let mut generator = HistoryGenerator::with_seed(150.0, 0.05, 42);
        let bars = generator.generate(30);

        assert_eq!(bars.len(), 30);
        assert_eq!(bars.last().unwrap().date, Utc::now().date_naive());

        for window in bars.windows(2) {
            assert_eq!(window[1].date - window[0].date, Duration::days(1));
        }

        for bar in &bars {
            assert!(bar.open > 0.0 && bar.close > 0.0);
            assert!(bar.high >= bar.open);
            assert!(bar.low <= bar.open);
            // 价格保留两位小数
            assert!((bar.close * 100.0 - (bar.close * 100.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = HistoryGenerator::with_seed(150.0, 0.05, 7);
        let mut b = HistoryGenerator::with_seed(150.0, 0.05, 7);

        assert_eq!(a.generate(10), b.generate(10));
    }

    #[test]
    fn test_zero_days_yields_empty_series() {
        let mut generator = HistoryGenerator::with_seed(150.0, 0.05, 1);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_zero_volatility_is_flat() {
        let mut generator = HistoryGenerator::with_seed(100.0, 0.0, 1);
        let bars = generator.generate(5);

        for bar in bars {
            assert_eq!(bar.open, 100.0);
            assert_eq!(bar.close, 100.0);
        }
    }
}
