//! 新闻数据源模块

use crate::types::{NewsArticle, NewsError, NewsResult, NewsSource};
use async_trait::async_trait;
use chrono::Utc;

/// 新闻数据源接口
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// 获取新闻源名称
    fn source(&self) -> NewsSource;

    /// 抓取指定主题的最新新闻
    async fn fetch_latest(&self, topic: &str) -> NewsResult<Vec<NewsArticle>>;
}

/// 模板化新闻数据源
///
/// 不访问任何外部服务：按来源套用固定模板，把主题插入标题和正文。
pub struct TemplatedNewsProvider {
    source: NewsSource,
}

impl TemplatedNewsProvider {
    pub fn new(source: NewsSource) -> Self {
        Self { source }
    }

    fn render(&self, topic: &str) -> (String, String) {
        match self.source {
            NewsSource::ForexFactory => (
                format!("Analysis: {topic} Rallies on Positive Economic Data"),
                format!(
                    "The {topic} currency pair surged today following the release of strong \
                     manufacturing PMI data. Analysts from Forex Factory suggest this could \
                     signal a bullish trend, with many traders going long. The sentiment \
                     appears overwhelmingly positive."
                ),
            ),
            NewsSource::Myfxbook => (
                format!("{topic} Faces Headwinds Amid Global Uncertainty"),
                format!(
                    "According to Myfxbook community sentiment, the {topic} pair is facing \
                     significant resistance. Global trade tensions and talks of interest rate \
                     hikes are creating a bearish outlook for the near term. Caution is advised."
                ),
            ),
            NewsSource::MarketNews => (
                format!("Market Makers See Volatility Ahead for {topic}"),
                format!(
                    "Central bank announcements expected later this week are likely to \
                     introduce significant volatility for {topic}. While short-term predictions \
                     are mixed, the long-term outlook remains dependent on fiscal policy \
                     decisions."
                ),
            ),
        }
    }
}

#[async_trait]
impl NewsProvider for TemplatedNewsProvider {
    fn source(&self) -> NewsSource {
        self.source
    }

    async fn fetch_latest(&self, topic: &str) -> NewsResult<Vec<NewsArticle>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(NewsError::InvalidInput("主题不能为空".to_string()));
        }

        let (headline, content) = self.render(topic);

        Ok(vec![NewsArticle {
            id: generate_article_id(&format!("{}:{}", self.source, headline)),
            headline,
            content,
            source: self.source,
            published_at: Utc::now(),
        }])
    }
}

/// 新闻聚合器
///
/// 并发抓取多个数据源，单个数据源失败不影响其余来源。
pub struct NewsDesk {
    providers: Vec<Box<dyn NewsProvider>>,
}

impl NewsDesk {
    pub fn new(providers: Vec<Box<dyn NewsProvider>>) -> Self {
        Self { providers }
    }

    /// 抓取指定主题的新闻
    pub async fn fetch_all(&self, topic: &str) -> NewsResult<Vec<NewsArticle>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(NewsError::InvalidInput("主题不能为空".to_string()));
        }

        tracing::info!("Fetching news for {} from {} sources", topic, self.providers.len());

        let futures: Vec<_> = self
            .providers
            .iter()
            .map(|provider| async move {
                match provider.fetch_latest(topic).await {
                    Ok(articles) => {
                        tracing::info!(
                            "Fetched {} articles from {}",
                            articles.len(),
                            provider.source()
                        );
                        articles
                    }
                    Err(e) => {
                        tracing::warn!("Failed to fetch from {}: {}", provider.source(), e);
                        Vec::new()
                    }
                }
            })
            .collect();

        let results = futures::future::join_all(futures).await;

        let mut all_articles = Vec::new();
        for articles in results {
            all_articles.extend(articles);
        }

        Ok(all_articles)
    }
}

impl Default for NewsDesk {
    fn default() -> Self {
        Self::new(vec![
            Box::new(TemplatedNewsProvider::new(NewsSource::ForexFactory)),
            Box::new(TemplatedNewsProvider::new(NewsSource::Myfxbook)),
            Box::new(TemplatedNewsProvider::new(NewsSource::MarketNews)),
        ])
    }
}

/// 生成文章 ID（基于种子字符串的 SHA256 哈希）
pub fn generate_article_id(seed: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_templated_provider_interpolates_topic() {
        let provider = TemplatedNewsProvider::new(NewsSource::ForexFactory);
        let articles = provider.fetch_latest("EURUSD").await.unwrap();

        assert_eq!(articles.len(), 1);
        assert!(articles[0].headline.contains("EURUSD"));
        assert!(articles[0].content.contains("EURUSD"));
        assert_eq!(articles[0].source, NewsSource::ForexFactory);
    }

    #[tokio::test]
    async fn test_article_id_is_stable() {
        let provider = TemplatedNewsProvider::new(NewsSource::Myfxbook);

        let first = provider.fetch_latest("GBPUSD").await.unwrap();
        let second = provider.fetch_latest("GBPUSD").await.unwrap();

        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].id.len(), 64);
    }

    #[tokio::test]
    async fn test_news_desk_aggregates_all_sources() {
        let desk = NewsDesk::default();
        let articles = desk.fetch_all("EURUSD").await.unwrap();

        assert_eq!(articles.len(), 3);

        let mut sources: Vec<String> = articles.iter().map(|a| a.source.to_string()).collect();
        sources.sort();
        assert_eq!(sources, vec!["Forex Factory", "Market News", "Myfxbook"]);
    }

    struct UnreachableProvider;

    #[async_trait]
    impl NewsProvider for UnreachableProvider {
        fn source(&self) -> NewsSource {
            NewsSource::MarketNews
        }

        async fn fetch_latest(&self, _topic: &str) -> NewsResult<Vec<NewsArticle>> {
            Err(NewsError::Provider("连接超时".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failing_source_does_not_block_others() {
        let desk = NewsDesk::new(vec![
            Box::new(TemplatedNewsProvider::new(NewsSource::ForexFactory)),
            Box::new(UnreachableProvider),
            Box::new(TemplatedNewsProvider::new(NewsSource::Myfxbook)),
        ]);

        let articles = desk.fetch_all("EURUSD").await.unwrap();

        assert_eq!(articles.len(), 2);
        assert!(articles.iter().all(|a| a.source != NewsSource::MarketNews));
    }

    #[tokio::test]
    async fn test_empty_topic_rejected() {
        let desk = NewsDesk::default();
        let result = desk.fetch_all("  ").await;

        assert!(matches!(result, Err(NewsError::InvalidInput(_))));
    }
}
