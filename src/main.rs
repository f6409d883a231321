use etf_sizer::cli::{self, FlowOutcome, TerminalPrompter};
use etf_sizer::{Config, PricingEngine};

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let engine = PricingEngine::new(config.portfolio_divisor)?;

    println!("{}", cli::BANNER);

    let mut prompter = TerminalPrompter::new();
    match cli::run_flow(&mut prompter, &config, &engine)? {
        FlowOutcome::Completed(report) => print!("{}", report.render()),
        FlowOutcome::Cancelled => println!("{}", cli::CANCELLED_MESSAGE),
    }
    Ok(())
}

fn main() {
    // Logs go to stderr so the prompt transcript on stdout stays readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}
