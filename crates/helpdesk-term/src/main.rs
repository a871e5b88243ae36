use std::env;
use std::panic;

use anyhow::Result;
use helpdesk_term::application::cli;
use helpdesk_term::{destruct_terminal_for_panic, start_loop, Config};

fn init_tracing() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("helpdesk");
    let appender = tracing_appender::rolling::never(log_dir, "helpdesk-term.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let command = cli::build();
    let matches = command.clone().get_matches();

    if matches.get_flag("print-default-config") {
        println!("{}", Config::serialize_default(command));
        return Ok(());
    }

    let _guard = init_tracing()?;
    Config::load(&matches).await?;

    start_loop().await
}
