//! Logging middleware
//!
//! This module provides logging for webhook traffic: inbound events, produced
//! replies, failures and per-request latency.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, instrument, warn, Span};

use crate::alice::{AliceRequest, AliceResponse};
use crate::utils::errors::{AliceSkillError, ErrorSeverity};

/// Requests slower than this are reported as slow
const SLOW_REQUEST: Duration = Duration::from_millis(1000);

/// Logging middleware for webhook interactions
#[derive(Clone, Debug)]
pub struct LoggingMiddleware {
    log_events: bool,
    log_performance: bool,
    log_errors: bool,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_events: bool, log_performance: bool, log_errors: bool) -> Self {
        Self {
            log_events,
            log_performance,
            log_errors,
        }
    }

    /// Log an inbound event
    #[instrument(skip_all)]
    pub fn log_event(&self, request: &AliceRequest) {
        if !self.log_events {
            return;
        }

        let identity = request.identity();
        info!(
            session_id = request.session_id(),
            identity = identity.as_ref().map(|i| i.as_str()),
            identity_kind = identity.as_ref().map(|i| i.kind()),
            prior_scene = request.prior_scene_id(),
            new_session = request.is_new_session(),
            "Alice event received"
        );
        debug!(command = request.command(), "Event utterance");
    }

    /// Log the reply sent back to the platform
    #[instrument(skip_all)]
    pub fn log_reply(&self, reply: &AliceResponse) {
        if !self.log_events {
            return;
        }

        info!(
            scene = reply.scene(),
            end_session = reply.response.end_session,
            "Reply produced"
        );
    }

    /// Log error with context, at a level matching its severity
    #[instrument(skip(self, error))]
    pub fn log_error(&self, error: &AliceSkillError, context: &str) {
        if !self.log_errors {
            return;
        }

        match error.severity() {
            ErrorSeverity::Info => info!(error = %error, context = context, "Request rejected"),
            ErrorSeverity::Warning => warn!(error = %error, context = context, "Request rejected"),
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                error!(error = %error, context = context, "Error occurred")
            }
        }
    }

    /// Create a performance tracking span
    pub fn create_performance_span(&self, operation: &str) -> Option<PerformanceTracker> {
        if self.log_performance {
            Some(PerformanceTracker::new(operation.to_string()))
        } else {
            None
        }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Performance tracker for measuring operation duration
pub struct PerformanceTracker {
    operation: String,
    start_time: Instant,
    _span: Span,
}

impl PerformanceTracker {
    fn new(operation: String) -> Self {
        let span = tracing::info_span!("performance", operation = %operation);

        Self {
            operation,
            start_time: Instant::now(),
            _span: span,
        }
    }

    /// Complete the performance tracking and log the result
    pub fn complete(self, success: bool) {
        let duration = self.start_time.elapsed();
        let duration_ms = duration.as_millis();

        if success {
            info!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation completed successfully"
            );
        } else {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        if duration > SLOW_REQUEST {
            warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Slow operation detected"
            );
        }
    }
}
