//! Port traits: the boundary between the dispatcher and the outside world.
//!
//! ```text
//!   CommandService ──▶ ActuatorPort ──▶ indicator outputs
//!                  └─▶ EventSink    ──▶ log / telemetry
//! ```
//!
//! Driven adapters implement these traits; the
//! [`CommandService`](super::service::CommandService) takes them as
//! generics, so the dispatch logic never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: one boolean sink per device, plus the blocking hold
/// the feeder pulse needs.
pub trait ActuatorPort {
    /// Switch the pump output.
    fn set_pump(&mut self, on: bool);

    /// Switch the light output.
    fn set_light(&mut self, on: bool);

    /// Switch the feeder output.
    fn set_feeder(&mut self, on: bool);

    /// Flip the display-updated indicator.
    fn toggle_display(&mut self);

    /// Block the calling context for `ms` milliseconds.
    fn hold(&mut self, ms: u32);

    /// Drive every output to OFF.
    fn all_off(&mut self);

    /// Feeder ON, hold, feeder OFF. Blocks for the whole pulse.
    fn pulse_feeder(&mut self, hold_ms: u32) {
        self.set_feeder(true);
        self.hold(hold_ms);
        self.set_feeder(false);
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The dispatcher emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
