//! Detect Command
//!
//! Detect the tech stack implied by an idea and suggest alternatives.

use console::style;
use std::sync::Arc;
use tracing::debug;

use super::OutputFormat;
use crate::ai::{GeminiProvider, TextProvider};
use crate::config::Config;
use crate::pipeline::StackAdvisor;
use crate::types::Result;

pub async fn run(
    config: &Config,
    idea: &str,
    project_type: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let provider = Arc::new(GeminiProvider::new(&config.llm)?);
    debug!(provider = provider.name(), model = provider.model(), "Detecting stack");
    let advisor = StackAdvisor::new(provider);

    let advice = match advisor.detect(idea, project_type).await {
        Ok(advice) => advice,
        Err(e) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string(&e.to_body())?);
            }
            return Err(e);
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&advice)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {}",
                style("Detected stack:").bold(),
                advice.detected_stack
            );
            if advice.suggestions.is_empty() {
                println!("{}", style("No alternative suggestions").dim());
            } else {
                println!("{}", style("Suggestions:").bold());
                for suggestion in &advice.suggestions {
                    println!("  - {}", suggestion);
                }
            }
        }
    }

    Ok(())
}
