use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Install the global tracing subscriber. Falls back to `info` on an unparsable filter.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
