use clap::Parser;
use prime_axioms::core::ConfigProvider;
use prime_axioms::utils::{logger, validation::Validate};
use prime_axioms::{render_report, AnalysisEngine, AnalysisPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-analysis")]
#[command(about = "Prime analysis driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "prime-axioms.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override archive setting from config
    #[arg(long)]
    archive: Option<bool>,

    /// Override the distribution upper bound
    #[arg(long)]
    max_n: Option<u64>,

    /// Show what would be computed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger_with_level(args.verbose, config.log_level());
    tracing::info!("🚀 Starting TOML-based prime analysis");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(archive) = args.archive {
        config.set_archive_enabled(archive);
        tracing::info!("🔧 Archive output overridden to: {}", archive);
    }
    if let Some(max_n) = args.max_n {
        config.distribution.max_n = Some(max_n);
        tracing::info!("🔧 Distribution bound overridden to: {}", max_n);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No computation will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = AnalysisPipeline::new(storage, config);
    let engine = AnalysisEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output) => {
            print!("{}", render_report(&output.report));
            println!();
            println!("📁 Plot data saved to: {}", output.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Analysis: {} v{}",
        config.analysis.name, config.analysis.version
    );
    if let Some(description) = &config.analysis.description {
        println!("  Description: {}", description);
    }
    println!("  Bases: 2..={}", config.max_base());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("🔢 Embedding:");
    println!("  Showcase numbers: {:?}", config.showcase_numbers());
    match config.product_operands() {
        Some((a, b)) => println!("  Product demo: {} * {}", a, b),
        None => println!("  Product demo: disabled"),
    }

    println!();
    println!("📈 Distribution:");
    println!(
        "  Classify 2..={} by trial division, sampling every {}",
        config.distribution_max(),
        config.distribution_step()
    );
    println!("  Checkpoints: {:?}", config.checkpoints());

    println!();
    println!("ζ Zeta comparison:");
    println!("  s = {}", config.zeta_s());
    println!("  Sum terms: {}", config.zeta_terms());
    println!("  Euler product primes <= {}", config.zeta_prime_bound());

    println!();
    println!("💾 Output:");
    if config.archive_enabled() {
        println!("  Archive: {}", config.archive_filename());
    } else {
        println!("  Plain files in {}", config.output_path());
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
