//! The scheduling loop tying a simulation to the host's frame clock.
//!
//! A `FieldDriver` owns one simulation and a two-state lifecycle:
//! `Stopped` and `Running`. Each iteration while running performs one
//! tick, one render, and one frame-boundary yield. The loop is
//! single-threaded and re-enters only after the previous iteration
//! completes, so at most one tick is ever pending.

use crate::clock::FrameClock;
use crate::error::FieldError;
use crate::simulation::Simulation;
use crate::surface::Surface;
use glam::DVec2;

/// Lifecycle state of a [`FieldDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Not advancing; `frame` calls are no-ops.
    Stopped,
    /// Advancing one tick per frame boundary.
    Running,
}

/// Drives a [`Simulation`] one tick-render cycle per display frame.
///
/// The driver holds the active flag as instance state; independent drivers
/// (one per visual context) share nothing and need no synchronization.
/// Cancellation is cooperative: `stop()` takes effect at the next
/// iteration boundary, never mid-tick.
pub struct FieldDriver<S> {
    sim: S,
    state: DriverState,
    frames_run: u64,
}

impl<S: Simulation> FieldDriver<S> {
    /// Creates a driver in the `Stopped` state.
    pub fn new(sim: S) -> Self {
        Self {
            sim,
            state: DriverState::Stopped,
            frames_run: 0,
        }
    }

    /// Transitions `Stopped -> Running`. No-op if already running, so a
    /// double start never produces a second loop.
    pub fn start(&mut self) {
        self.state = DriverState::Running;
    }

    /// Transitions `Running -> Stopped`. Safe to call repeatedly; the
    /// currently executing iteration (if any) finishes first.
    pub fn stop(&mut self) {
        self.state = DriverState::Stopped;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// True while the driver advances on frame boundaries.
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Total completed tick-render iterations.
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Read-only access to the driven simulation.
    pub fn sim(&self) -> &S {
        &self.sim
    }

    /// Mutable access to the driven simulation.
    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    /// Forwards a burst-spawn interaction to the simulation.
    ///
    /// Valid in any state; spawned entities first move on the next frame.
    pub fn spawn_burst(&mut self, origin: DVec2, count: usize) {
        self.sim.spawn_burst(origin, count);
    }

    /// Runs one loop iteration if the driver is running: tick, render,
    /// then yield until the next frame boundary.
    ///
    /// Returns `Ok(true)` if an iteration ran, `Ok(false)` if the driver
    /// was stopped (no side effects in that case).
    pub fn frame(
        &mut self,
        surface: &mut dyn Surface,
        clock: &mut dyn FrameClock,
    ) -> Result<bool, FieldError> {
        if self.state != DriverState::Running {
            return Ok(false);
        }
        self.sim.tick()?;
        self.sim.render(surface);
        clock.wait_next_frame();
        self.frames_run += 1;
        Ok(true)
    }

    /// Runs up to `frames` iterations, re-checking the active flag at each
    /// iteration boundary. Returns the number of iterations that ran.
    pub fn run(
        &mut self,
        frames: u64,
        surface: &mut dyn Surface,
        clock: &mut dyn FrameClock,
    ) -> Result<u64, FieldError> {
        let mut ran = 0;
        for _ in 0..frames {
            if !self.frame(surface, clock)? {
                break;
            }
            ran += 1;
        }
        Ok(ran)
    }
}
