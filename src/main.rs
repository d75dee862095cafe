use anyhow::Context;
use clap::Parser;
use hanoi_moves::utils::logger;
use hanoi_moves::{
    CliConfig, ConsoleSink, CsvSink, HanoiEngine, HanoiError, JsonLinesSink, MoveSink,
    OutputFormat, TextRenderer, VerifyingSink,
};
use std::io::{self, BufWriter};

fn exit_with(e: &HanoiError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn init_logging(json: bool, verbose: bool) {
    if json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }
}

fn main() -> anyhow::Result<()> {
    // --help / --version 由 clap 輸出並以 0 結束，其餘解析錯誤屬於輸入錯誤
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            init_logging(false, false);
            exit_with(&HanoiError::from(e));
        }
    };

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            init_logging(cli.json_logs, cli.verbose);
            exit_with(&e);
        }
    };

    // 初始化日誌
    init_logging(config.json_logs, config.verbose);
    tracing::debug!("Resolved config: {:?}", config);

    let puzzle = match config.puzzle() {
        Ok(puzzle) => puzzle,
        Err(e) => exit_with(&e),
    };

    let writer = BufWriter::new(io::stdout().lock());
    let sink: Box<dyn MoveSink> = match config.format {
        OutputFormat::Text => Box::new(TextRenderer::new(ConsoleSink::new(writer))),
        OutputFormat::Json => Box::new(JsonLinesSink::new(writer)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer)),
    };
    let sink: Box<dyn MoveSink> = if config.verify {
        tracing::info!("🔍 Verifying every move against a three-peg board");
        Box::new(VerifyingSink::new(&puzzle, sink))
    } else {
        sink
    };

    let mut engine = HanoiEngine::with_strategy(sink, config.strategy);
    let outcome = engine.run(&puzzle);
    // drop 時 BufWriter 會把已產生的移動寫出，process::exit 不會
    drop(engine);

    match outcome {
        Ok(summary) => {
            if config.summary {
                let json = serde_json::to_string(&summary).context("serializing run summary")?;
                eprintln!("{}", json);
            }
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}
