//! Generate Command
//!
//! Run the full enrichment for an idea: idea-level resources, feature
//! breakdown, and per-feature repositories, videos, and snippets.
//!
//! When no tech stack is given, the stack advisor picks one first (the
//! detected stack, else the top suggestion).

use console::style;
use std::sync::Arc;
use tracing::{debug, info};

use super::OutputFormat;
use crate::ai::{GeminiProvider, TextProvider};
use crate::config::Config;
use crate::pipeline::{EnrichmentPipeline, StackAdvisor};
use crate::search::{GithubSearch, YoutubeSearch};
use crate::types::{EnrichmentResult, Result};

pub async fn run(
    config: &Config,
    idea: &str,
    tech_stack: Option<&str>,
    project_type: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let provider = Arc::new(GeminiProvider::new(&config.llm)?);
    debug!(provider = provider.name(), model = provider.model(), "Generating resources");
    let pipeline = EnrichmentPipeline::with_fanout(
        provider.clone(),
        Arc::new(GithubSearch::new(&config.github)?),
        Arc::new(YoutubeSearch::new(&config.youtube)?),
        config.pipeline.fanout,
    );

    let outcome = async {
        let tech_stack = match tech_stack {
            Some(stack) => stack.to_string(),
            None => {
                let advice = StackAdvisor::new(provider.clone())
                    .detect(idea, project_type)
                    .await?;
                let chosen = if !advice.detected_stack.is_empty()
                    && !advice.detected_stack.eq_ignore_ascii_case("none")
                {
                    advice.detected_stack
                } else {
                    advice.suggestions.into_iter().next().unwrap_or_default()
                };
                info!(stack = %chosen, "No stack given; using advisor's choice");
                chosen
            }
        };
        pipeline.run(idea, &tech_stack, project_type).await
    }
    .await;

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string(&e.to_body())?);
            }
            return Err(e);
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => print_text(&result),
    }

    Ok(())
}

/// Human-readable rendering. Empty lists print a "none found" line here;
/// that is presentation only, the JSON output carries empty arrays.
fn print_text(result: &EnrichmentResult) {
    println!("{}", style("Whole-project repositories").bold().underlined());
    print_repos(result, None);
    println!();
    println!("{}", style("Whole-project videos").bold().underlined());
    print_videos(result, None);

    if result.features.is_empty() {
        println!();
        println!(
            "{}",
            style("No features could be generated for the provided idea.").yellow()
        );
        return;
    }

    for feature in &result.features {
        println!();
        println!("{}", style(format!("Feature: {feature}")).bold().underlined());

        println!("{}", style("Repositories").bold());
        print_repos(result, Some(feature));

        println!("{}", style("Videos").bold());
        print_videos(result, Some(feature));

        println!("{}", style("Snippet").bold());
        match result.feature_codes.get(feature) {
            Some(code) => println!("{}", code),
            None => println!("  {}", style("(no snippet)").dim()),
        }
    }
}

fn print_repos(result: &EnrichmentResult, feature: Option<&str>) {
    let repos = match feature {
        Some(feature) => result.feature_repos.get(feature).map(Vec::as_slice).unwrap_or(&[]),
        None => result.whole_project_repos.as_slice(),
    };
    if repos.is_empty() {
        println!("  {}", style("No repositories found.").dim());
        return;
    }
    for repo in repos {
        println!(
            "  {} ({} stars{}) {}",
            repo.full_name,
            repo.stars,
            repo.language
                .as_deref()
                .map(|l| format!(", {l}"))
                .unwrap_or_default(),
            style(&repo.url).dim()
        );
    }
}

fn print_videos(result: &EnrichmentResult, feature: Option<&str>) {
    let videos = match feature {
        Some(feature) => result.feature_videos.get(feature).map(Vec::as_slice).unwrap_or(&[]),
        None => result.whole_project_videos.as_slice(),
    };
    if videos.is_empty() {
        println!("  {}", style("No videos found.").dim());
        return;
    }
    for video in videos {
        println!("  {} {}", video_line(video), style(&video.url).dim());
    }
}

fn video_line(video: &crate::types::VideoSummary) -> String {
    format!("{} - {}", video.title, video.channel)
}
