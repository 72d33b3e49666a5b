use std::io;
use std::path::PathBuf;

use clap::Parser;
use receipt_app::utils::init_logger_with_file;
use receipt_app::{
    App, CommandSharer, Config, Console, EscPosQrRenderer, LocalPrintService, QrRenderer,
};

/// Build a receipt line by line, then print or export it
#[derive(Debug, Parser)]
#[command(name = "receipt-app", version, about)]
struct Cli {
    /// Working directory for logs and exports (overrides WORK_DIR)
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Log level (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    /// JSON console logs
    #[arg(long)]
    log_json: bool,

    /// Default printer url, e.g. tcp://192.168.1.50:9100 (overrides DEFAULT_PRINTER)
    #[arg(long)]
    printer: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.work_dir {
            config.work_dir = dir;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.log_json {
            config.log_json = true;
        }
        if let Some(url) = self.printer {
            config.default_printer = Some(url);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, CLI overrides)
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    // 2. Work directory and logging
    config.ensure_work_dir_structure()?;
    init_logger_with_file(&config.log_level, config.log_json, Some(&config.log_dir()))?;
    tracing::info!(
        work_dir = %config.work_dir.display(),
        environment = %config.environment,
        default_printer = ?config.default_printer,
        "Receipt app starting"
    );

    // 3. Collaborators
    let qr = EscPosQrRenderer;
    let qr_footer = config
        .qr_payload
        .as_deref()
        .map(|payload| qr.render(payload, config.qr_size));
    let service = LocalPrintService::from_config(&config, qr_footer);
    let sharer = CommandSharer::new(&config.share_command);

    // 4. Console loop
    let mut app = App::new(config.document_template(), config.timezone);
    let console = Console::new(io::stdin().lock(), io::stdout(), config.printers.clone());
    console
        .run(&mut app, &service, &sharer, &qr, config.qr_size)
        .await?;

    tracing::info!("Receipt app stopped");
    Ok(())
}
