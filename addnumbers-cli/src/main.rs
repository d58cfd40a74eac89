use std::process;

use addnumbers_cli::cli::{Cli, Commands};
use addnumbers_cli::error::handle_cli_result;
use addnumbers_cli::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use addnumbers_cli::{add, logging, tools};
use clap::CommandFactory;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help
    if cli.command.is_none() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Failed to print help: {e}");
            process::exit(EXIT_WARNING);
        }
        process::exit(EXIT_SUCCESS);
    }

    let is_mcp_mode = cli.is_mcp_mode();
    let level = logging::log_level(cli.quiet, cli.debug, cli.verbose, is_mcp_mode);
    logging::init_logging(level, is_mcp_mode);

    let exit_code = match cli.command {
        Some(Commands::Serve) => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Some(Commands::Add {
            number1,
            number2,
            format,
            overflow,
        }) => handle_cli_result(add::run_add_command(
            number1,
            number2,
            format,
            overflow.map(Into::into),
        )),
        Some(Commands::Tools { format }) => handle_cli_result(tools::run_tools_command(format)),
        None => EXIT_SUCCESS,
    };

    process::exit(exit_code);
}

async fn run_server() -> i32 {
    use addnumbers::{mcp::McpServer, Config};
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let config = Config::new();
    tracing::info!(
        "Serving as '{}' with overflow policy '{}'",
        config.server_name,
        config.overflow_policy
    );
    let server = McpServer::new(config);

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl+c: {}", e),
        }
        ct_clone.cancel();
    });

    let running_service = match serve_server(server, stdio()).await {
        Ok(running_service) => running_service,
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            return EXIT_WARNING;
        }
    };
    tracing::info!("MCP server started successfully");

    tokio::select! {
        quit_reason = running_service.waiting() => {
            match quit_reason {
                Ok(reason) => {
                    tracing::info!("MCP server exited: {:?}", reason);
                    EXIT_SUCCESS
                }
                Err(e) => {
                    tracing::error!("MCP server task failed: {}", e);
                    EXIT_WARNING
                }
            }
        }
        _ = ct.cancelled() => {
            tracing::info!("MCP server cancelled");
            EXIT_SUCCESS
        }
    }
}
