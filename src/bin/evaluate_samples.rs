//! Demo: fetch the sample list and score every entry concurrently.
//! Uses the remote API from `PHONE_SCORE_API_URL` when reachable, the local engine otherwise.

use phone_score::{telemetry, EvaluationClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init();

    let client = EvaluationClient::from_env()?;

    let specs = client.fetch_samples().await;
    let evaluations = client.evaluate_all(&specs).await;

    for e in &evaluations {
        println!(
            "{}  {:>3}  {:<4}  {}  (gaming {}, battery {}, photo {}, display {})",
            e.id,
            e.overall_score,
            e.performance_category.as_str(),
            e.user_recommendation,
            e.metrics.gaming_potential,
            e.metrics.battery_performance,
            e.metrics.photography,
            e.metrics.display_quality,
        );
    }

    println!("evaluate-samples done ({} phones)", evaluations.len());
    Ok(())
}
