use embassy_time::Instant;

use crate::color::{OFF, Rgb};
use crate::config::{ConfigError, ControllerConfig};
use crate::effect::EffectSlot;
use crate::logging::log;
use crate::monitor::SignalMonitor;
use crate::rng::Rng;
use crate::scheduler::{Decision, ProgramScheduler, SchedulerState};
use crate::signal::SignalLine;
use crate::wait::{WaitOutcome, interruptible_wait, wait_for_signal, wait_for_signal_until};
use crate::OutputDriver;

/// Remote light controller - the main loop
///
/// Owns the output and steps through the configured rotation each time
/// the remote signal is asserted.
pub struct Controller<'a, O: OutputDriver> {
    // External dependencies
    line: &'a SignalLine,
    output: O,

    // Internal state
    monitor: SignalMonitor<'a>,
    scheduler: ProgramScheduler<'a>,
    rng: Rng,
    started: bool,
}

impl<'a, O: OutputDriver> Controller<'a, O> {
    /// Create a controller with all channels turned off
    pub fn new(
        line: &'a SignalLine,
        mut output: O,
        config: &ControllerConfig<'a>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        output.write(OFF);

        Ok(Self {
            line,
            output,
            monitor: SignalMonitor::new(line, Instant::now()),
            scheduler: ProgramScheduler::new(config.rotation, config.idle_threshold),
            rng: Rng::new(config.seed),
            started: false,
        })
    }

    /// Run the control loop. Never returns.
    pub async fn run(&mut self) {
        loop {
            self.tick().await;
        }
    }

    /// Run one iteration of the control loop
    ///
    /// Returns the decision that was carried out. A `Run` decision only
    /// returns once the program has stopped and the output is off.
    pub async fn tick(&mut self) -> Decision {
        if !self.started {
            self.started = true;
            log!("remote-light: v{}", env!("CARGO_PKG_VERSION"));
        }

        let was_idle = self.scheduler.state() == SchedulerState::Idle;
        let mut decision = self.scheduler.poll(&mut self.monitor, Instant::now());
        match &mut decision {
            Decision::Run { index, effect } => {
                log!("remote-light: program {}: {}", index, effect.id().as_str());
                self.run_effect(effect).await;
                self.scheduler.complete();
            }
            Decision::Hold { until } => {
                wait_for_signal_until(self.line, *until).await;
            }
            Decision::Idle => {
                if !was_idle {
                    log!("remote-light: idle");
                }
                wait_for_signal(self.line).await;
            }
        }

        decision
    }

    /// Drive `effect` until the signal drops, then turn the output off
    ///
    /// A release seen by the wait ends the run even when the signal is
    /// already back on, so a quick press still advances the rotation.
    async fn run_effect(&mut self, effect: &mut EffectSlot) {
        let mut last: Option<Rgb> = None;

        while self.monitor.is_on(Instant::now()) {
            let frame = effect.step(&mut self.rng);
            if last != Some(frame.color) {
                self.output.write(frame.color);
                last = Some(frame.color);
            }
            if interruptible_wait(self.line, frame.hold).await == WaitOutcome::Interrupted {
                break;
            }
        }

        log!("remote-light: signal lost");
        self.output.write(OFF);
    }

    pub const fn monitor(&self) -> &SignalMonitor<'a> {
        &self.monitor
    }

    pub const fn scheduler(&self) -> &ProgramScheduler<'a> {
        &self.scheduler
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
