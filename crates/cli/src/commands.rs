//! # Command Handlers
//!
//! Each handler prints its result as pretty JSON on stdout.

use crate::{AnalyzeArgs, BackendArgs, BulkArgs, GenerateArgs, TextSource};
use anyhow::{bail, Context, Result};
use prodesc::{
    parsing::analyze, BulkDescriptionRequest, BulkDescriptionResponse, DescriptionGenerator,
    DescriptionRequest, DescriptionResponse, OllamaBackend, OllamaOptions,
};
use std::{fs, time::Duration};
use tracing::info;

/// Resolves the inline text or reads it from the given file.
pub fn read_text(source: &TextSource) -> Result<String> {
    match (&source.text, &source.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read text from '{}'", path.display())),
        (None, None) => bail!("Either --text or --file must be given"),
    }
}

fn build_generator(args: &BackendArgs) -> Result<DescriptionGenerator> {
    let backend = OllamaBackend::new(OllamaOptions {
        api_url: args.api_url.clone(),
        model: args.model.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    })?;
    Ok(DescriptionGenerator::builder()
        .backend(Box::new(backend))
        .build()?)
}

pub async fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let raw_text = read_text(&args.source)?;
    let mut request =
        DescriptionRequest::new(&args.name, raw_text).with_target_length(args.target_length);
    request.category = args.category.clone();

    info!("Generating description for product: {}", request.product_name);
    let generator = build_generator(&args.backend)?;
    let description = generator.generate_description(&request).await;
    generator.shutdown().await;

    let response = DescriptionResponse::success(request.product_name, description?);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub async fn handle_bulk(args: &BulkArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;
    let request: BulkDescriptionRequest = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not a valid bulk request", args.file.display()))?;

    let generator = build_generator(&args.backend)?;
    let results = generator.generate_bulk(&request.products).await;
    generator.shutdown().await;

    println!(
        "{}",
        serde_json::to_string_pretty(&BulkDescriptionResponse { results })?
    );
    Ok(())
}

pub fn handle_analyze(args: &AnalyzeArgs) -> Result<()> {
    let raw_text = read_text(&args.source)?;
    let analysis = analyze(&raw_text, args.max_features, args.max_keywords);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

pub async fn handle_health(args: &BackendArgs) -> Result<()> {
    let generator = build_generator(args)?;
    let healthy = generator.health_check().await;
    generator.shutdown().await;

    if !healthy {
        bail!("Generation backend at '{}' is unavailable", args.api_url);
    }
    println!("Generation backend at '{}' is healthy", args.api_url);
    Ok(())
}
