// Copyright 2023 Ulvetanna Inc.

use crate::env::boolean_env_flag_set;

/// Environment flag that enables span-close events, which carry busy/idle timings.
pub const LOG_SPANS_FLAG: &str = "SHA256SUM_LOG_SPANS";

/// Installs the global `tracing` subscriber.
///
/// Verbosity is controlled by `RUST_LOG` and defaults to `warn`. Output goes to stderr so that
/// it never interleaves with digests printed on stdout. Installing twice is a no-op.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let span_events = if boolean_env_flag_set(LOG_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_span_events(span_events),
		)
		.try_init();
}
