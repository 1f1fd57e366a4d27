use clap::Parser;
use math_api::api::routes;
use math_api::utils::{logger, validation::Validate};
use math_api::{ApiServer, CliConfig, MathService, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting math-api server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並合併配置
    let config = match ServerConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建服務與路由，並運行伺服器
    let server = ApiServer::new_with_monitoring(config, monitor_enabled);
    let router = routes::build_router(Arc::new(MathService::new()), server.monitor());

    match server.run(router).await {
        Ok(()) => {
            tracing::info!("✅ Server shut down cleanly");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                math_api::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                math_api::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                math_api::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                math_api::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
