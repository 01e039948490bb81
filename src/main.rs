use clap::{Parser, ValueEnum};
use loan_engine::application::evaluator::LoanEvaluator;
use loan_engine::application::service::LoanService;
use loan_engine::application::strategy::{AmountStrategyBox, BinarySearchStrategy, ClosedFormStrategy};
use loan_engine::infrastructure::config::LoanConfig;
use loan_engine::infrastructure::in_memory::InMemorySegmentResolver;
use loan_engine::interfaces::csv::decision_writer::DecisionWriter;
use loan_engine::interfaces::csv::request_reader::RequestReader;
use loan_engine::interfaces::csv::segment_reader::read_segments;
use loan_engine::interfaces::validation::RequestValidator;
use loan_engine::telemetry;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    BinarySearch,
    ClosedForm,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input loan requests CSV file (identifier, amount, period)
    input: PathBuf,

    /// Segment directory CSV (identifier, segment, credit_modifier).
    /// Defaults to the built-in test applicants.
    #[arg(long)]
    segments: Option<PathBuf>,

    /// JSON file with loan bounds. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    min_amount: Option<Decimal>,

    #[arg(long)]
    max_amount: Option<Decimal>,

    #[arg(long)]
    min_period: Option<u32>,

    #[arg(long)]
    max_period: Option<u32>,

    /// How the largest approvable amount is found
    #[arg(long, value_enum, default_value_t = Strategy::BinarySearch)]
    strategy: Strategy,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn loan_config(&self) -> loan_engine::error::Result<LoanConfig> {
        let mut config = match &self.config {
            Some(path) => LoanConfig::from_json_file(path)?,
            None => LoanConfig::default(),
        };

        if let Some(min_amount) = self.min_amount {
            config.min_amount = min_amount;
        }
        if let Some(max_amount) = self.max_amount {
            config.max_amount = max_amount;
        }
        if let Some(min_period) = self.min_period {
            config.min_period = min_period;
        }
        if let Some(max_period) = self.max_period {
            config.max_period = max_period;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).into_diagnostic()?;

    let config = cli.loan_config().into_diagnostic()?;

    let resolver = match &cli.segments {
        Some(path) => read_segments(File::open(path).into_diagnostic()?).into_diagnostic()?,
        None => InMemorySegmentResolver::with_defaults(),
    };

    let strategy: AmountStrategyBox = match cli.strategy {
        Strategy::BinarySearch => Box::new(BinarySearchStrategy),
        Strategy::ClosedForm => Box::new(ClosedFormStrategy),
    };

    let evaluator = LoanEvaluator::new(strategy);
    info!(
        segments = resolver.len(),
        strategy = evaluator.strategy_name(),
        min_amount = %config.min_amount,
        max_amount = %config.max_amount,
        max_period = config.max_period,
        "starting evaluation"
    );

    let validator = RequestValidator::new(&config, config.min_period);
    let service = LoanService::new(
        Box::new(resolver),
        Box::new(config.clone()),
        evaluator,
    );

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = DecisionWriter::new(stdout.lock());
    let mut evaluated = 0usize;
    let mut skipped = 0usize;

    for request_result in reader.requests() {
        let request = match request_result {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Error reading request");
                skipped += 1;
                continue;
            }
        };

        if let Err(e) = validator.validate(&request) {
            warn!(identifier = %request.identifier, error = %e, "Request rejected");
            skipped += 1;
            continue;
        }

        match service.evaluate_loan(&request) {
            Ok(response) => {
                writer
                    .write_decision(&request.identifier, &response)
                    .into_diagnostic()?;
                evaluated += 1;
            }
            Err(e) => {
                warn!(identifier = %request.identifier, error = %e, "Error evaluating request");
                skipped += 1;
            }
        }
    }

    writer.flush().into_diagnostic()?;
    info!(evaluated, skipped, "evaluation finished");

    Ok(())
}
