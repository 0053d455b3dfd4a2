use std::time::Duration;

use nycschools_client::banner;
use nycschools_client::config::ApiConfig;
use nycschools_client::outcome::Outcome;
use nycschools_client::sources::sat::SatResultsSource;
use nycschools_client::sources::schools::SchoolDirectorySource;

#[tokio::main]
async fn main() {
    // Print the startup banner
    banner::print_banner();

    // Load .env file - the API defaults are public, so missing is fine
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ApiConfig::from_env().expect("Failed to load API configuration from environment");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .expect("Failed to build HTTP client");

    let directory = SchoolDirectorySource::new(client.clone(), config.clone());

    println!("📡 Fetching the school directory from {}", config.api_base);

    match directory.fetch_schools().await {
        Outcome::Success(Some(schools)) => {
            println!(
                "✅ {} schools fetched at {}",
                schools.len(),
                chrono::Utc::now().to_rfc3339()
            );
            for school in schools.iter().take(10) {
                println!("   {}  {}", school.dbn, school.school_name);
            }
            if schools.len() > 10 {
                println!("   … and {} more", schools.len() - 10);
            }
        }
        Outcome::Success(None) => {
            println!("✅ Directory fetched, but the response body was empty");
        }
        Outcome::Error { message, .. } => eprintln!("❌ {}", message),
    }

    // Optional: SAT results for the DBN passed as the first argument
    if let Some(dbn) = std::env::args().nth(1) {
        let sat = SatResultsSource::new(client, config);

        println!("\n📡 Fetching SAT results for {}", dbn);

        match sat.fetch_sat_results(&dbn).await {
            Outcome::Success(Some(results)) if !results.is_empty() => {
                for row in results {
                    println!(
                        "   {}: reading {} / math {} / writing {} ({} test takers)",
                        row.school_name,
                        row.sat_critical_reading_avg_score.as_deref().unwrap_or("-"),
                        row.sat_math_avg_score.as_deref().unwrap_or("-"),
                        row.sat_writing_avg_score.as_deref().unwrap_or("-"),
                        row.num_of_sat_test_takers.as_deref().unwrap_or("-"),
                    );
                }
            }
            Outcome::Success(_) => println!("ℹ️  No SAT results reported for {}", dbn),
            Outcome::Error { message, .. } => eprintln!("❌ {}", message),
        }
    }
}
