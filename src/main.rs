//! Web-Hack - Crawl-and-Probe Web Vulnerability Scanner CLI

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use webhack::config;
use webhack::error::WebHackError;
use webhack::models::{OriginPolicy, ScanConfig, ScanResult, Severity};
use webhack::scanner::ScanEngine;

/// Web-Hack - crawl-and-probe web vulnerability scanner
#[derive(Parser)]
#[command(name = "webhack", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a security scan against a target
    Scan {
        /// Target URL or host to scan
        #[arg(short, long)]
        target: String,

        /// Modules to run (comma-separated: injection, discovery)
        #[arg(short, long, value_delimiter = ',')]
        modules: Option<Vec<String>>,

        /// Worker pool size for concurrent probing
        #[arg(long)]
        threads: Option<usize>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum number of pages fetched by the crawl loop
        #[arg(long)]
        max_pages: Option<usize>,

        /// Custom wordlist path for the discovery module
        #[arg(short, long)]
        wordlist: Option<String>,

        /// Byte threshold for the length-differential SQLi check
        #[arg(long)]
        length_threshold: Option<u64>,

        /// Form-action origin policy (strict or permissive)
        #[arg(long)]
        origin_policy: Option<OriginPolicy>,

        /// Courtesy delay between a worker's requests, in milliseconds
        #[arg(long)]
        delay: Option<u64>,

        /// Overall scan deadline in seconds
        #[arg(long)]
        deadline: Option<u64>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write results as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List available scanner modules
    Modules,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            target,
            modules,
            threads,
            timeout,
            max_pages,
            wordlist,
            length_threshold,
            origin_policy,
            delay,
            deadline,
            config: config_path,
            output,
            verbose,
        } => {
            init_tracing(verbose);

            let mut scan_config = match config_path {
                Some(ref path) => match config::load_config(path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{} {e}", "Failed to load config:".red());
                        std::process::exit(1);
                    }
                },
                None => ScanConfig::default(),
            };

            config::merge_cli_args(
                &mut scan_config,
                target,
                threads,
                timeout,
                modules,
                max_pages,
                wordlist,
                length_threshold,
                origin_policy,
                delay,
                deadline,
            );

            let engine = ScanEngine::with_defaults();
            match engine.run(&scan_config).await {
                Ok(result) => {
                    print_report(&result);
                    if let Some(path) = output {
                        if let Err(e) = write_json(&result, &path) {
                            eprintln!("{} {e}", "Failed to write output:".red());
                            std::process::exit(1);
                        }
                        println!("Results written to {}", path.display());
                    }
                }
                Err(WebHackError::TargetUnreachable(msg)) => {
                    eprintln!("{} {msg}", "Scan could not reach target:".red().bold());
                    std::process::exit(2);
                }
                Err(e) => {
                    eprintln!("{} {e}", "Scan failed:".red().bold());
                    std::process::exit(1);
                }
            }
        }

        Commands::Modules => {
            let engine = ScanEngine::with_defaults();
            println!("{}", "Available modules:".bold());
            for (name, description) in engine.list_modules() {
                println!("  {} - {description}", name.cyan());
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "webhack=debug" } else { "webhack=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_report(result: &ScanResult) {
    println!();
    println!("{}", "===== Scan Report =====".green().bold());
    println!("Target: {}", result.target);
    println!("Pages visited: {}", result.pages_visited);
    println!("Surfaces tested: {}", result.surfaces_tested);
    println!("Total requests: {}", result.total_requests);
    println!("Modules: {}", result.modules_executed.join(", "));
    println!();

    if result.findings.is_empty() {
        println!("{}", "No vulnerabilities found.".green());
        return;
    }

    for finding in &result.findings {
        let severity = match finding.severity {
            Severity::Critical | Severity::High => finding.severity.to_string().red().bold(),
            Severity::Medium => finding.severity.to_string().yellow(),
            Severity::Low | Severity::Info => finding.severity.to_string().blue(),
        };

        println!("[{severity}] {} at {}", finding.class, finding.url);
        println!("  Method: {}", finding.method);
        if let Some(ref param) = finding.parameter {
            println!("  Parameter: {param}");
        }
        if let Some(ref action) = finding.form_action {
            println!("  Form action: {action}");
        }
        if let Some(ref payload) = finding.payload {
            println!("  Payload: {payload}");
        }
        println!("  Evidence: {} ({})", finding.evidence, finding.detail);
        println!();
    }

    println!(
        "{} critical, {} high, {} medium, {} low",
        result.count_by_severity(&Severity::Critical),
        result.count_by_severity(&Severity::High),
        result.count_by_severity(&Severity::Medium),
        result.count_by_severity(&Severity::Low),
    );
}

fn write_json(result: &ScanResult, path: &std::path::Path) -> webhack::error::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)?;
    Ok(())
}
