//! Phase timing for commands

/// Log time elapsed since startup for a named phase, only under `--verbose`
///
/// ```ignore
/// trace_command!(ctx.cli, ctx.start, "build_graph");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $phase:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), phase = $phase, "command phase");
        }
    };
}

pub(crate) use trace_command;
