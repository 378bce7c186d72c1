use clap::Parser;
use proxy_singleton::utils::{logger, validation::Validate};
use proxy_singleton::{CliConfig, Demo};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 載入設定
    let config = match args.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(&config.logging, args.verbose);

    tracing::info!("Starting proxy-singleton demo");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let report = Demo::new(config, proxy_singleton::counter()).run(args.increments)?;

    if let Some(e) = &report.rejected_write {
        tracing::info!("Validating write rejected: {}", e.user_friendly_message());
    }
    tracing::debug!("Final record: {}", report.record.snapshot());

    for value in &report.counter_values {
        println!("{}", value);
    }

    Ok(())
}
