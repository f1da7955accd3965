//! Consuming a run one step at a time
//!
//! The core never sleeps; pacing happens here, between steps. Ctrl-C sets a
//! flag that is checked before each step is pulled, so the run stops at the
//! next step boundary and the partial state is abandoned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphstep_core::error::{GraphError, Result};
use graphstep_core::graph::step::Algorithm;
use graphstep_core::graph::{Run, Step};
use graphstep_core::trace_time;

pub struct Playback {
    format: OutputFormat,
    quiet: bool,
    delay: Duration,
    interrupted: Arc<AtomicBool>,
}

impl Playback {
    pub fn new(ctx: &CommandContext, delay: Duration) -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));
        let interrupted_clone = Arc::clone(&interrupted);

        if let Err(e) = ctrlc::set_handler(move || {
            interrupted_clone.store(true, Ordering::SeqCst);
        }) {
            tracing::warn!(error = %e, "could not install Ctrl-C handler");
        }

        Self {
            format: ctx.cli.format,
            quiet: ctx.cli.quiet,
            delay,
            interrupted,
        }
    }

    /// Drive `run` to completion, printing and pacing every step
    pub fn play<A: Algorithm>(&self, mut run: Run<A>) -> Result<A::Output> {
        let start = Instant::now();

        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                tracing::info!(steps = run.steps_emitted(), "run interrupted");
                return Err(GraphError::Interrupted);
            }

            let Some(step) = run.next() else {
                break;
            };
            self.print_step(run.steps_emitted(), &step)?;

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        trace_time!(start, "playback", steps = run.steps_emitted());
        Ok(run.finish())
    }

    fn print_step(&self, number: usize, step: &Step) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match self.format {
            OutputFormat::Human => println!("{:>4}  {}", number, step),
            OutputFormat::Json => {
                let mut value = serde_json::to_value(step)?;
                value["step"] = serde_json::json!(number);
                println!("{}", serde_json::to_string(&value)?);
            }
        }
        Ok(())
    }
}
