//! 仪表盘会话
//!
//! 会话持有自己的行情、预测与分析结果，外部协作方
//! （预测器、训练器、新闻源）通过构建器注入。

use crate::types::{DashboardError, DashboardResult, SearchOutcome};
use crate::DashboardConfig;
use forecast::{
    error_metrics, Forecaster, ModelTrainer, ModelType, RandomWalkForecaster, SimulatedTrainer,
    TrainingReport, TrainingRequest,
};
use market::{HistoryGenerator, StockBar};
use news::{NewsArticle, NewsDesk, SentimentAnalyzer, SentimentReport};
use std::time::Duration;

/// 仪表盘会话
pub struct DashboardSession {
    config: DashboardConfig,
    generator: HistoryGenerator,
    forecaster: Box<dyn Forecaster>,
    trainer: Box<dyn ModelTrainer>,
    analyzer: SentimentAnalyzer,
    news_desk: NewsDesk,
    ticker: String,
    bars: Vec<StockBar>,
    last_outcome: Option<SearchOutcome>,
}

impl DashboardSession {
    /// 使用默认协作方创建会话
    pub fn new(config: DashboardConfig) -> Self {
        DashboardBuilder::new().with_config(config).build()
    }

    /// 当前股票代码
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// 当前历史行情（search 之后可用于图表展示）
    pub fn bars(&self) -> &[StockBar] {
        &self.bars
    }

    /// 最近一次的预测面板输出
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// 预测面板：查询股票并生成次日预测与误差指标
    pub async fn search(&mut self, ticker: &str) -> DashboardResult<SearchOutcome> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(DashboardError::InvalidForm(
                "请输入股票代码".to_string(),
            ));
        }

        tracing::info!("Searching {}", ticker);
        self.simulate_latency().await;

        self.ticker = ticker.to_uppercase();
        self.bars = self.generator.generate(self.config.history_days);

        let last_close = match self.bars.last() {
            Some(bar) => bar.close,
            None => {
                return Err(DashboardError::InvalidForm(
                    "历史行情为空".to_string(),
                ))
            }
        };

        let prediction = self.forecaster.predict_next(&self.bars).await?;

        let pairs = self
            .forecaster
            .recent_pairs(&self.bars, self.config.evaluation_window)
            .await?;
        let (actual, predicted): (Vec<f64>, Vec<f64>) =
            pairs.iter().map(|p| (p.actual, p.predicted)).unzip();

        // 指标只走这一条本地计算路径
        let metrics = error_metrics(&actual, &predicted)?;

        let outcome = SearchOutcome {
            ticker: self.ticker.clone(),
            last_close,
            predicted_close: prediction.price,
            prediction_date: prediction.date,
            trending_up: prediction.price > last_close,
            metrics,
        };

        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// 训练面板：触发一次（模拟的）模型训练
    pub async fn train(
        &self,
        ticker: &str,
        model_type: ModelType,
    ) -> DashboardResult<TrainingReport> {
        let ticker = validate_ticker(ticker)?;

        let request = TrainingRequest {
            ticker: ticker.to_string(),
            model_type,
            params: Some(serde_json::json!({ "ticker": ticker })),
        };

        Ok(self.trainer.train(&request).await?)
    }

    /// 情感面板：分析一篇新闻文章
    pub async fn analyze_sentiment(
        &self,
        ticker: &str,
        content: &str,
    ) -> DashboardResult<SentimentReport> {
        let ticker = validate_ticker(ticker)?;

        if content.chars().count() < 50 {
            return Err(DashboardError::InvalidForm(
                "文章内容至少需要 50 个字符".to_string(),
            ));
        }

        Ok(self.analyzer.analyze(content, ticker)?)
    }

    /// 情感面板：抓取指定主题的新闻
    pub async fn fetch_news(&self, topic: &str) -> DashboardResult<Vec<NewsArticle>> {
        Ok(self.news_desk.fetch_all(topic).await?)
    }

    async fn simulate_latency(&self) {
        if self.config.simulate_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.simulate_latency_ms)).await;
        }
    }
}

fn validate_ticker(ticker: &str) -> DashboardResult<&str> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(DashboardError::InvalidForm(
            "请输入股票代码".to_string(),
        ));
    }
    if ticker.chars().count() > 10 {
        return Err(DashboardError::InvalidForm(
            "股票代码不能超过 10 个字符".to_string(),
        ));
    }
    Ok(ticker)
}

/// 仪表盘会话构建器
pub struct DashboardBuilder {
    config: DashboardConfig,
    seed: Option<u64>,
    forecaster: Option<Box<dyn Forecaster>>,
    trainer: Option<Box<dyn ModelTrainer>>,
}

impl DashboardBuilder {
    pub fn new() -> Self {
        Self {
            config: DashboardConfig::default(),
            seed: None,
            forecaster: None,
            trainer: None,
        }
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// 固定随机种子，行情与预测都可复现（测试用）
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_forecaster(mut self, forecaster: Box<dyn Forecaster>) -> Self {
        self.forecaster = Some(forecaster);
        self
    }

    pub fn with_trainer(mut self, trainer: Box<dyn ModelTrainer>) -> Self {
        self.trainer = Some(trainer);
        self
    }

    pub fn build(self) -> DashboardSession {
        let generator = match self.seed {
            Some(seed) => HistoryGenerator::with_seed(
                self.config.initial_price,
                self.config.volatility,
                seed,
            ),
            None => HistoryGenerator::new(self.config.initial_price, self.config.volatility),
        };

        let forecaster = self.forecaster.unwrap_or_else(|| match self.seed {
            Some(seed) => Box::new(RandomWalkForecaster::with_seed(seed)),
            None => Box::new(RandomWalkForecaster::new()),
        });

        let trainer = self
            .trainer
            .unwrap_or_else(|| Box::new(SimulatedTrainer::new()));

        let ticker = self.config.default_ticker.clone();

        DashboardSession {
            config: self.config,
            generator,
            forecaster,
            trainer,
            analyzer: SentimentAnalyzer::new(),
            news_desk: NewsDesk::default(),
            ticker,
            bars: Vec::new(),
            last_outcome: None,
        }
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
