// BoneScan Demo Entry Point
// Console stand-in for the upload and chat UI

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use bonescan_core::{thinking_delay, ChatSession, XrayAnalyzer, XrayUpload};

/// Size reported for labels passed on the command line, where no real
/// file is read.
const DEMO_FILE_SIZE_BYTES: u64 = 512 * 1024;

fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("bonescan-core".into(), io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .init();
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_telemetry();

    let file_names: Vec<String> = std::env::args().skip(1).collect();
    if file_names.is_empty() {
        run_interactive()
    } else {
        run_batch(&file_names)
    }
}

/// Analyzes each argument as an image label and prints the report as JSON.
fn run_batch(file_names: &[String]) -> Result<()> {
    let analyzer = XrayAnalyzer::new();

    for file_name in file_names {
        let upload = XrayUpload::new(file_name.clone(), DEMO_FILE_SIZE_BYTES);
        match analyzer.analyze(&upload) {
            Ok(report) => {
                let json = serde_json::to_string_pretty(&report)
                    .context("serializing analysis report")?;
                println!("{}", json);
            }
            Err(e) => eprintln!("cannot analyze '{}': {}", file_name, e),
        }
    }

    Ok(())
}

/// Interactive loop: `analyze <file>` runs detection, anything else goes
/// to the chat assistant, `quit` exits.
fn run_interactive() -> Result<()> {
    let analyzer = XrayAnalyzer::new();
    let mut session = ChatSession::new();
    let mut rng = rand::thread_rng();

    println!("BoneScan demo. Type 'analyze <file>' to classify an image name, 'quit' to exit.");
    if let Some(welcome) = session.messages().first() {
        println!("assistant> {}", welcome.text);
    }

    let mut lines = io::stdin().lock().lines();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("reading input line")?;
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            _ if line.starts_with("analyze ") => {
                let file_name = line["analyze ".len()..].trim();
                let upload = XrayUpload::new(file_name, DEMO_FILE_SIZE_BYTES);

                match analyzer.analyze(&upload) {
                    Ok(report) => {
                        simulate_progress(&mut rng);
                        println!("{}", serde_json::to_string_pretty(&report)?);
                        if let Some(record) = report.fracture_info() {
                            println!("see also: {} ({})", record.name, record.region.label());
                        }
                    }
                    Err(e) => eprintln!("cannot analyze '{}': {}", file_name, e),
                }
            }
            _ => match session.post(line) {
                Ok(reply) => {
                    thread::sleep(thinking_delay(&mut rng));
                    println!("assistant> {}", reply.text);
                }
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    info!("demo exiting after {} messages", session.messages().len());
    Ok(())
}

/// The upload view's fake progress bar: random 0-15% steps every 200ms
/// until full. Cosmetic only.
fn simulate_progress<R: Rng>(rng: &mut R) {
    let mut progress = 0.0_f32;
    while progress < 100.0 {
        progress = (progress + rng.gen_range(0.0..15.0)).min(100.0);
        print!("\ranalyzing... {:>3.0}%", progress);
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(200));
    }
    println!();
}
