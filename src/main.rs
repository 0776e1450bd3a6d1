use clap::Parser;

use bookmarker::cli::{Cli, Commands};
use bookmarker::config::init_config;
use bookmarker::interfaces::cli::run_cli_command;
use bookmarker::system::init_logging;

fn main() -> anyhow::Result<()> {
    // .env 文件可选
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());

    // TUI 自己占用 stderr，控制台日志会画进备用屏幕
    #[cfg(feature = "tui")]
    let console = !matches!(cli.command, Commands::Tui);
    #[cfg(not(feature = "tui"))]
    let console = true;

    // guard 必须活到进程结束，否则非阻塞日志会丢失
    let _log_guard = match init_logging(&config.logging, console) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("{}", e.format_colored());
            None
        }
    };

    match cli.command {
        #[cfg(feature = "tui")]
        Commands::Tui => bookmarker::interfaces::tui::run_tui(config)
            .map_err(|e| anyhow::anyhow!("TUI error: {}", e))?,
        command => {
            if let Err(e) = run_cli_command(command, config) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
