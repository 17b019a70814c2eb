//! Entity extraction example: analyze a news article by URL and print the
//! most relevant entities.

use std::collections::HashSet;

use textrazor::{Extractor, TextRazorClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from TEXTRAZOR_API_KEY
    let client = TextRazorClient::from_env()?
        .with_extractors([Extractor::Entities, Extractor::Topics]);

    let response = client
        .analyze_url("https://www.bbc.co.uk/news/uk-politics-18640916")
        .await?;

    if !response.ok() {
        eprintln!("analysis failed: {}", response.error());
        return Ok(());
    }

    println!("=== Entities ===");
    let mut entities: Vec<_> = response.entities().iter().collect();
    entities.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut seen = HashSet::new();
    for entity in entities {
        let Some(id) = entity.entity_id.as_deref() else {
            continue;
        };
        if seen.insert(id.to_string()) {
            println!(
                "{} relevance={:.2} confidence={:.2} types={:?}",
                id,
                entity.relevance_score.unwrap_or(0.0),
                entity.confidence_score.unwrap_or(0.0),
                entity.dbpedia_types
            );
        }
    }

    println!("\n=== Topics ===");
    for topic in response.topics().iter().take(10) {
        println!("{} score={:.2}", topic.label, topic.score);
    }

    Ok(())
}
