use std::{fs::OpenOptions, io::Write};

use env_logger::Env;
use monitor::{
    app::App,
    config::{Config, MonitorConfig},
};
use sync::kind::DataKind;
use sync::scope::ScopeKey;
use sync::view::RenderSignal;
use tokio::sync::mpsc;

#[tokio::main]
pub async fn main() {
    let log_file_path = "monitor.log";
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .expect("failed to open log file");

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let ts = buf.timestamp();
            writeln!(buf, "{} [{}] - {}", ts, record.level(), record.args())
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("monitor starting, logging to {}", log_file_path);

    let config = Config::from_toml("conf/monitor_conf.toml").unwrap();
    let monitor_config = MonitorConfig::from_config(&config).unwrap();

    let (render_tx, mut render_rx) = mpsc::unbounded_channel();
    let mut app = App::start(monitor_config, render_tx).await.unwrap();

    // land on the all-accounts balance view
    app.activate(DataKind::Balance, ScopeKey::All).unwrap();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutdown requested");
                break;
            }
            Some(signal) = render_rx.recv() => match signal {
                RenderSignal::Refresh { kind, scope } => {
                    if let Ok(Some(display)) = app.display_data().await {
                        log::info!(
                            "view {} {} page {} stale={} partial={} degraded={}",
                            kind,
                            scope,
                            display.page,
                            display.stale,
                            display.partial,
                            display.degraded
                        );
                    }
                }
                RenderSignal::Degraded { account_id, message } => {
                    log::warn!("account {} degraded: {}", account_id, message);
                }
            },
        }
    }

    app.stop().await;
}
