use std::io::Read;

use ai_text_detector::services::ConfigStore;
use ai_text_detector::{init_logging, AiTextDetector, DetectorConfig};
use anyhow::{Context, Result};
use tracing::warn;

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin failed")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read file failed: {}", path))
}

/// Stored settings, or the defaults when the stored file is unreadable.
fn stored_config(store: Option<&ConfigStore>) -> DetectorConfig {
    let Some(store) = store else {
        return DetectorConfig::default();
    };
    match store.detector_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("[CONFIG] {}; using defaults", e);
            DetectorConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin detect_text -- <path|-> [--strategy <version>] [--no-literary] [--metrics] [--out <json_path>] [--save-config]\n\nNotes:\n  - `-` reads the text from stdin.\n  - Strategies: adaptive-v3 (default), weighted-evidence-v1.\n  - Settings not given on the command line come from the stored config file.\n  - `--save-config` writes the effective settings back to that file (the previous file is backed up).\n  - AITEXT_DISABLE_FILE_LOG=1 keeps logging on the console only."
        );
        return Ok(());
    }

    init_logging();

    let path = args[1].clone();
    let show_metrics = has_flag(&args, "--metrics");
    let out_path = parse_arg_value(&args, "--out");

    let store = ConfigStore::default_config_dir().map(ConfigStore::new);
    let mut config = stored_config(store.as_ref());
    if let Some(strategy) = parse_arg_value(&args, "--strategy") {
        config.strategy = strategy;
    }
    if has_flag(&args, "--no-literary") {
        config.literary_heuristics = false;
    }

    if has_flag(&args, "--save-config") {
        let store = store
            .as_ref()
            .context("no config directory available on this platform")?;
        store
            .set_detector_config(config.clone())
            .context("save config failed")?;
        println!("Saved config: {}", store.config_file().display());
    }

    let text = read_input(&path)?;
    let detector = AiTextDetector::new(config);
    let detailed = detector
        .detect_with_metrics(&text)
        .with_context(|| format!("detection failed for {}", path))?;
    let result = &detailed.result;

    println!("Input: {}", if path == "-" { "(stdin)" } else { path.as_str() });
    println!("Text: {} chars  {}", text.trim().chars().count(), preview(text.trim(), 80));
    println!("Strategy: {}", detailed.strategy);
    println!();
    println!(
        "Verdict: {}",
        if result.is_ai_generated { "AI-generated" } else { "human-written" }
    );
    println!("Confidence: {:.2}", result.confidence);
    println!("Score: {:.4} (threshold {:.3})", result.score, detailed.threshold);
    println!("Perplexity: {:.3}", result.perplexity_score);
    println!("Burstiness: {:.3}", result.burstiness_score);

    if !result.reasons.is_empty() {
        println!();
        println!("Reasons: {}", result.reasons.len());
        for reason in &result.reasons {
            println!("  - {}", reason);
        }
    }

    if show_metrics {
        println!();
        println!("Metrics:");
        let metrics = serde_json::to_value(&detailed.metrics)?;
        if let Some(fields) = metrics.as_object() {
            for (name, value) in fields {
                println!("  {:<28} {}", name, value);
            }
        }
    }

    if let Some(out_path) = out_path {
        let json = serde_json::to_string_pretty(&detailed)?;
        std::fs::write(&out_path, json).with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
