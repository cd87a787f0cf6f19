//! 仪表盘演示
//!
//! 依次走一遍预测、训练与新闻情感三个面板

use dashboard::{DashboardBuilder, DashboardConfig};
use forecast::ModelType;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 仪表盘演示 ===\n");

    let config = DashboardConfig {
        simulate_latency_ms: 300,
        ..DashboardConfig::default()
    };
    let mut session = DashboardBuilder::new().with_config(config).build();

    // 1. 预测面板
    println!("1. 查询 AI-STOCK 并生成次日预测...");
    let outcome = session.search("AI-STOCK").await?;

    println!("   最近收盘价: ${:.2}", outcome.last_close);
    println!(
        "   次日预测 ({}): ${:.2} {}",
        outcome.prediction_date,
        outcome.predicted_close,
        if outcome.trending_up { "↑" } else { "↓" }
    );
    println!("   模型表现:");
    println!("     MSE:  {:.4}", outcome.metrics.mse);
    println!("     MAE:  {:.4}", outcome.metrics.mae);
    println!("     RMSE: {:.4}\n", outcome.metrics.rmse);

    // 2. 训练面板
    println!("2. 训练一个新的预测模型...");
    let report = session.train("AI-STOCK", ModelType::Lstm).await?;

    println!("   模型 ID: {}", report.model_id);
    println!("   状态: {:?}", report.status);
    if let Some(message) = &report.message {
        println!("   信息: {}", message);
    }
    println!(
        "   指标: mse={}, mae={}, rmse={}\n",
        report.metrics.mse, report.metrics.mae, report.metrics.rmse
    );

    // 3. 新闻与情感面板
    println!("3. 抓取 EURUSD 新闻并分析情感...");
    let articles = session.fetch_news("EURUSD").await?;

    for (i, article) in articles.iter().enumerate() {
        let sentiment = session
            .analyze_sentiment("EURUSD", &article.content)
            .await?;

        println!("   {}. [{}] {}", i + 1, article.source, article.headline);
        println!(
            "      情感: {} ({:.2})",
            sentiment.label, sentiment.score
        );
        println!("      总结: {}\n", sentiment.summary);
    }

    println!("=== 演示完成 ===");
    Ok(())
}
