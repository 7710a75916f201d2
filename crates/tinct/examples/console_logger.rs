//! A minimal `log` backend assembled from the formatter.
//!
//! Run with `cargo run --example console_logger`.

use log::{Metadata, Record};
use tinct::{Arg, ColorScheme, Config, Severity, Strategy, format_message};

struct ConsoleLogger {
    config: Config,
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let severity = Severity::from(record.level());
        let args = vec![Arg::from(record.args().to_string())];
        let (line, _rest) = format_message(severity, &self.config, args);
        eprintln!("{line}");
    }

    fn flush(&self) {}
}

fn main() {
    let config = Config::builder()
        .strategy(Strategy::All)
        .color(ColorScheme::default_ansi())
        .template(|ctx| format!("{} {:5} {}", ctx.time24, ctx.label, ctx.msg))
        .build();

    log::set_boxed_logger(Box::new(ConsoleLogger { config })).expect("logger already installed");
    log::set_max_level(log::LevelFilter::Trace);

    log::trace!("handshake bytes: 16");
    log::debug!("resolved 3 upstream peers");
    log::info!("server started on :8080");
    log::warn!("low disk space");
    log::error!("connection lost");
}
