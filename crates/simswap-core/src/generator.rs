//! Mock Response Generator
//!
//! Simulates a backend "latest SIM change" lookup: each invocation
//! draws once in `[0, 100)` and answers with either the current UTC
//! instant or a fixed historical timestamp. No request input is
//! consulted and no state survives the invocation.

use tracing::debug;

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::context::{ResponseContext, CONTENT_TYPE_VAR, RESPONSE_CONTENT_VAR};
use crate::error::Result;
use crate::payload::SimChangePayload;
use crate::random::{RandomSource, ThreadRandom};

/// Content type of every mock response
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Historical timestamp returned when the draw lands at or above the threshold
pub const FIXED_SIM_CHANGE: &str = "2023-12-12T07:34:58.382Z";

/// Draws strictly below this take the current-time branch
pub const CURRENT_TIME_THRESHOLD: f64 = 50.0;

/// Output of one generator invocation
///
/// An explicit record rather than ambient context mutation; callers
/// publish it with [`MockResponse::apply_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    /// Value for the content-type header, always `application/json`
    pub content_type: String,
    /// Serialized [`SimChangePayload`] body
    pub body: String,
}

impl MockResponse {
    /// Publish this response into a gateway-style context
    ///
    /// The header variable is written before the body variable.
    pub fn apply_to(&self, ctx: &mut ResponseContext) {
        ctx.set_variable(CONTENT_TYPE_VAR, &self.content_type);
        ctx.set_variable(RESPONSE_CONTENT_VAR, &self.body);
    }
}

/// Mock retrieve-date generator with injected clock and random source
pub struct MockDateGenerator<R: RandomSource, C: Clock> {
    random: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> MockDateGenerator<R, C> {
    pub fn new(random: R, clock: C) -> Self {
        Self { random, clock }
    }

    /// Run one mock lookup
    ///
    /// Draws once, takes the current-time branch when the draw is
    /// strictly less than [`CURRENT_TIME_THRESHOLD`], and returns the
    /// serialized single-field payload with its content type.
    pub fn generate(&mut self) -> Result<MockResponse> {
        let draw = self.random.next_draw();
        debug!(draw, "mock retrieve-date draw");

        let latest_sim_change = if draw < CURRENT_TIME_THRESHOLD {
            format_timestamp(self.clock.now())
        } else {
            FIXED_SIM_CHANGE.to_string()
        };

        let payload = SimChangePayload::new(latest_sim_change);
        Ok(MockResponse {
            content_type: CONTENT_TYPE_JSON.to_string(),
            body: payload.to_json()?,
        })
    }
}

/// Run one mock lookup with the system clock and thread-local RNG
pub fn generate_default() -> Result<MockResponse> {
    MockDateGenerator::new(ThreadRandom, SystemClock).generate()
}
