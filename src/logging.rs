use colored::*;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "warn";

/// Splits an event into the account it concerns, its message and the
/// remaining `key=value` pairs.
#[derive(Default)]
struct LedgerFields {
    account: Option<String>,
    message: String,
    rest: String,
}

impl Visit for LedgerFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "account" => self.account = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => {
                let _ = write!(self.rest, " {}={}", name, value);
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "account" => self.account = Some(format!("{:?}", value)),
            "message" => self.message = format!("{:?}", value),
            name => {
                let _ = write!(self.rest, " {}={:?}", name, value);
            }
        }
    }
}

/// Renders `[sym] <account>: <message> key=value ...`, falling back to the
/// event target when no account field is present.
pub struct LedgerFormatter;

impl<S, N> FormatEvent<S, N> for LedgerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let line = render(*meta.level(), meta.target(), event);
        writeln!(writer, "{}", line)
    }
}

fn render(level: Level, target: &str, event: &Event<'_>) -> String {
    let mut fields = LedgerFields::default();
    event.record(&mut fields);

    let symbol = match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    };

    let origin = match fields.account {
        Some(account) => account.cyan().bold(),
        None => target.dimmed(),
    };

    format!("{} {}: {}{}", symbol, origin, fields.message, fields.rest.dimmed())
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries account notices. `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a subscriber may already be installed (tests, embedding binaries)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(LedgerFormatter)
        .try_init();
}
