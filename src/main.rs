use clap::Parser;
use powcalc::utils::{logger, validation::Validate};
use powcalc::{CliConfig, PowerEngine};

fn main() {
    let config = CliConfig::parse();

    // 驗證命令列參數
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    // 合併設定檔與命令列設定
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌 (輸出到 stderr)
    logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Using {} backend", settings.backend);

    // 程式名稱照原樣放進用法說明，非 UTF-8 也不會 panic
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "powcalc".to_string());

    // 建立引擎並計算
    let engine = PowerEngine::from_config(&settings);
    match engine.run(&program, &config.positionals()) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            // 用法說明寫到 stdout，其他錯誤寫到 stderr
            if e.is_usage() {
                println!("{}", e);
            } else {
                tracing::error!("❌ {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
            }
            std::process::exit(e.exit_code());
        }
    }
}
