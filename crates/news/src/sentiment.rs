//! 情感分析模块

use crate::types::{NewsError, NewsResult, SentimentLabel, SentimentReport};
use regex::Regex;
use std::collections::HashMap;

/// 词典中的最大权重，用于分数归一化
const MAX_WORD_WEIGHT: f64 = 2.5;

/// 情感分析器
///
/// 基于金融词典的确定性打分：同样的输入总是得到同样的结果。
pub struct SentimentAnalyzer {
    positive_words: HashMap<String, f64>,
    negative_words: HashMap<String, f64>,
    amount_pattern: Regex,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let mut analyzer = Self {
            positive_words: HashMap::new(),
            negative_words: HashMap::new(),
            amount_pattern: Regex::new(r"\$[\d,]+(?:\.\d+)?[KMB]?").unwrap(),
        };

        analyzer.initialize_dictionaries();
        analyzer
    }

    fn initialize_dictionaries(&mut self) {
        // 正面词汇（金融领域）
        let positive_words = vec![
            ("bullish", 2.0),
            ("bull", 2.0),
            ("surge", 2.0),
            ("surged", 2.0),
            ("soar", 2.0),
            ("soared", 2.0),
            ("rally", 2.0),
            ("rallies", 2.0),
            ("gain", 1.5),
            ("gained", 1.5),
            ("rise", 1.5),
            ("profit", 1.5),
            ("growth", 1.5),
            ("positive", 1.0),
            ("strong", 1.0),
            ("great", 1.5),
            ("excellent", 2.0),
            ("breakthrough", 2.0),
            ("innovation", 1.5),
            ("adoption", 1.5),
            ("record", 1.5),
            ("high", 1.0),
            ("buy", 1.0),
            ("upgrade", 1.5),
            ("success", 1.5),
            ("outperform", 1.5),
        ];

        // 负面词汇
        let negative_words = vec![
            ("bearish", -2.0),
            ("bear", -2.0),
            ("crash", -2.5),
            ("crashed", -2.5),
            ("plunge", -2.5),
            ("plunged", -2.5),
            ("drop", -1.5),
            ("fall", -1.5),
            ("loss", -1.5),
            ("negative", -1.0),
            ("terrible", -2.0),
            ("fraud", -2.5),
            ("risk", -1.0),
            ("decline", -1.5),
            ("sell", -1.0),
            ("low", -1.0),
            ("concern", -1.0),
            ("warning", -1.5),
            ("crisis", -2.0),
            ("panic", -2.0),
            ("fear", -1.5),
            ("uncertain", -1.0),
            ("uncertainty", -1.0),
            ("volatile", -0.5),
            ("volatility", -0.5),
            ("underperform", -1.5),
            ("headwinds", -1.5),
            ("resistance", -1.0),
            ("tensions", -1.0),
            ("caution", -1.0),
            ("downgrade", -1.5),
        ];

        for (word, score) in positive_words {
            self.positive_words.insert(word.to_string(), score);
        }

        for (word, score) in negative_words {
            self.negative_words.insert(word.to_string(), score);
        }
    }

    /// 分析一篇文章对指定股票的情感
    pub fn analyze(&self, content: &str, ticker: &str) -> NewsResult<SentimentReport> {
        if content.trim().is_empty() {
            return Err(NewsError::InvalidInput("文章内容不能为空".to_string()));
        }

        let text = content.to_lowercase();

        let mut positive_score = 0.0;
        let mut negative_score = 0.0;
        let mut hits = 0usize;
        let mut keyword_weights: HashMap<String, f64> = HashMap::new();

        for word in text.split_whitespace() {
            let cleaned_word = word.trim_matches(|c: char| !c.is_alphanumeric());

            if let Some(&score) = self.positive_words.get(cleaned_word) {
                positive_score += score;
                hits += 1;
                keyword_weights.insert(cleaned_word.to_string(), score.abs());
            }

            if let Some(&score) = self.negative_words.get(cleaned_word) {
                negative_score += score.abs();
                hits += 1;
                keyword_weights.insert(cleaned_word.to_string(), score.abs());
            }
        }

        // 按命中数与最大权重归一化到 [-1, 1]
        let score = if hits == 0 {
            0.0
        } else {
            let raw = (positive_score - negative_score) / (hits as f64 * MAX_WORD_WEIGHT);
            raw.clamp(-1.0, 1.0)
        };

        let label = SentimentLabel::from_score(score);

        // 权重最高的信号词排前面
        let mut ranked: Vec<(String, f64)> = keyword_weights.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        let keywords: Vec<String> = ranked.into_iter().take(3).map(|(word, _)| word).collect();

        let amounts: Vec<String> = self
            .amount_pattern
            .captures_iter(content)
            .filter_map(|cap| cap.get(0).map(|m| m.as_str().to_string()))
            .collect();

        let summary = build_summary(ticker, label, &keywords, &amounts);

        Ok(SentimentReport {
            score,
            label,
            summary,
        })
    }

}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_summary(
    ticker: &str,
    label: SentimentLabel,
    keywords: &[String],
    amounts: &[String],
) -> String {
    let mut summary = match label {
        SentimentLabel::Positive => format!("Coverage reads positive for {}", ticker),
        SentimentLabel::Negative => format!("Coverage reads negative for {}", ticker),
        SentimentLabel::Neutral => format!("Coverage reads neutral for {}", ticker),
    };

    if !keywords.is_empty() {
        let terms: Vec<String> = keywords.iter().map(|k| format!("\"{}\"", k)).collect();
        summary.push_str(&format!(", driven by terms like {}", terms.join(", ")));
    }

    if let Some(amount) = amounts.first() {
        summary.push_str(&format!("; figures such as {} are mentioned", amount));
    }

    summary.push('.');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_article() {
        let analyzer = SentimentAnalyzer::new();

        let content = "Visionary AI Inc. (ticker: AI-STOCK) today announced a breakthrough \
                       in their quantum computing division, which analysts predict could \
                       revolutionize the industry. The company's stock surged 15% in \
                       after-hours trading following the news.";

        let report = analyzer.analyze(content, "AI-STOCK").unwrap();

        assert!(report.score > 0.2, "score was {}", report.score);
        assert_eq!(report.label, SentimentLabel::Positive);
        assert!(report.summary.contains("AI-STOCK"));
    }

    #[test]
    fn test_negative_article() {
        let analyzer = SentimentAnalyzer::new();

        let content = "The EURUSD pair is facing significant resistance. Global trade \
                       tensions and a bearish outlook are fueling panic, with analysts \
                       warning of a possible crash. Caution is advised.";

        let report = analyzer.analyze(content, "EURUSD").unwrap();

        assert!(report.score < -0.2, "score was {}", report.score);
        assert_eq!(report.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_article() {
        let analyzer = SentimentAnalyzer::new();

        let content = "The company published its quarterly report on Tuesday morning \
                       before the opening bell.";

        let report = analyzer.analyze(content, "MSFT").unwrap();

        assert_eq!(report.score, 0.0);
        assert_eq!(report.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_summary_mentions_amounts() {
        let analyzer = SentimentAnalyzer::new();

        let content = "The fund raised $2.5B in record time, a strong signal of growth.";
        let report = analyzer.analyze(content, "FUND").unwrap();

        assert!(report.summary.contains("$2.5B"), "summary: {}", report.summary);
    }

    #[test]
    fn test_empty_content_rejected() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze("   ", "AAPL");

        assert!(matches!(result, Err(NewsError::InvalidInput(_))));
    }

    #[test]
    fn test_summary_leads_with_strongest_signal() {
        let analyzer = SentimentAnalyzer::new();

        // "adoption" (1.5) 按字母序在前，但 "crash" (2.5) 权重更高
        let content = "Analysts note adoption keeps rising, yet many fear a crash.";
        let report = analyzer.analyze(content, "AAPL").unwrap();

        let crash = report.summary.find("\"crash\"").expect("crash listed");
        let adoption = report.summary.find("\"adoption\"").expect("adoption listed");
        assert!(crash < adoption, "summary: {}", report.summary);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = SentimentAnalyzer::new();
        let content = "Bullish momentum and strong growth lifted the stock to a record high.";

        let a = analyzer.analyze(content, "AAPL").unwrap();
        let b = analyzer.analyze(content, "AAPL").unwrap();

        assert_eq!(a.score, b.score);
        assert_eq!(a.summary, b.summary);
    }
}
