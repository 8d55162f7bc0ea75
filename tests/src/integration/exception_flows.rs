//! # Exception Flows
//!
//! Randomizer faults surfaced as security exceptions, and the detector
//! adapters composed the way a service wires them.

use std::sync::Arc;

use wd_01_randomizer::SecurityLogger;
use wd_02_security_errors::{ExceptionReporter, IntrusionDetector, SecurityErrorKind};

/// Routes the randomizer's critical log into intrusion detection.
pub struct DetectorSecurityLogger {
    reporter: ExceptionReporter,
}

impl DetectorSecurityLogger {
    pub fn new(reporter: ExceptionReporter) -> Self {
        Self { reporter }
    }
}

impl SecurityLogger for DetectorSecurityLogger {
    fn log_critical(&self, message: &str) {
        let _ = self.reporter.raise(
            SecurityErrorKind::Encryption,
            "Security service unavailable",
            message,
        );
    }
}

/// Shared reporter for a detector.
pub fn reporter_for(detector: Arc<dyn IntrusionDetector>) -> ExceptionReporter {
    ExceptionReporter::new(detector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    use warden_telemetry::{init_logging, security_event, TelemetryConfig, TelemetryError};
    use wd_01_randomizer::{
        Base64Encoder, CodecError, Encoder, MemorySecurityLogger, Randomizer, RandomizerApi,
        RandomizerError, SequenceRandomSource, Sha512Hasher, StaticConfigProvider,
    };
    use wd_02_security_errors::{
        FanOutIntrusionDetector, LoggingIntrusionDetector, RecordingIntrusionDetector,
        SecurityException, Severity,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct RejectingEncoder;

    impl Encoder for RejectingEncoder {
        fn decode_base64(&self, input: &str) -> Result<Vec<u8>, CodecError> {
            Err(CodecError::InvalidBase64(input.to_string()))
        }
    }

    // =============================================================================
    // RANDOMIZER FAULTS → INTRUSION DETECTION
    // =============================================================================

    #[test]
    fn test_degraded_randomizer_reported_to_detector() {
        let detector = Arc::new(RecordingIntrusionDetector::new());
        let logger = Arc::new(DetectorSecurityLogger::new(reporter_for(detector.clone())));

        let randomizer = Randomizer::from_config(
            &StaticConfigProvider::new().with_algorithm("SHA1PRNG"),
            logger,
        );

        assert!(randomizer.is_degraded());
        assert_eq!(detector.count(), 1);

        let record = &detector.recorded()[0];
        assert_eq!(record.kind, SecurityErrorKind::Encryption);
        assert_eq!(record.user_message, "Security service unavailable");
        assert!(record.log_message.contains("SHA1PRNG"));
    }

    #[test]
    fn test_guid_failure_wrapped_as_cause() {
        let detector = Arc::new(RecordingIntrusionDetector::new());
        let reporter = reporter_for(detector.clone());

        let randomizer = Randomizer::new(
            Arc::new(SequenceRandomSource::constant(1)),
            Arc::new(RejectingEncoder),
            Arc::new(Sha512Hasher::new("", 1)),
            Arc::new(DetectorSecurityLogger::new(reporter.clone())),
        );

        let failure = randomizer.random_guid().unwrap_err();
        // the randomizer's own critical log already reached the detector
        assert_eq!(detector.count(), 1);

        let err: SecurityException = reporter.raise_with_cause(
            SecurityErrorKind::Integrity,
            "Could not issue identifier",
            failure.to_string(),
            failure,
        );
        assert_eq!(detector.count(), 2);

        let source = err.source().unwrap();
        let randomizer_error = source.downcast_ref::<RandomizerError>().unwrap();
        assert!(matches!(randomizer_error, RandomizerError::DigestDecode { .. }));

        // decode error is the next link
        let codec = randomizer_error.source().unwrap();
        assert!(codec.downcast_ref::<CodecError>().is_some());
    }

    #[test]
    fn test_deferred_exception_during_bootstrap() {
        // raised before any detector exists
        let pending = SecurityException::deferred(SecurityErrorKind::Availability)
            .with_user_message("Starting up")
            .with_log_message("randomizer requested before detector wiring");

        let detector = Arc::new(RecordingIntrusionDetector::new());
        let reporter = reporter_for(detector.clone());
        assert_eq!(detector.count(), 0);

        let err = reporter.report(pending);
        assert_eq!(detector.count(), 1);
        assert_eq!(err.severity(), Severity::Medium);
    }

    // =============================================================================
    // DETECTOR COMPOSITION + TELEMETRY
    // =============================================================================

    #[test]
    fn test_fan_out_with_logging_after_telemetry_init() {
        let config = TelemetryConfig {
            console_output: false,
            log_level: "debug".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(init_logging(&config).is_ok());
        assert!(matches!(
            init_logging(&config),
            Err(TelemetryError::AlreadyInitialized)
        ));

        let recorder = Arc::new(RecordingIntrusionDetector::new());
        let detector = FanOutIntrusionDetector::default()
            .with(Arc::new(LoggingIntrusionDetector::new()))
            .with(recorder.clone());
        let reporter = reporter_for(Arc::new(detector));

        for kind in SecurityErrorKind::ALL {
            let _ = reporter.raise(kind, "denied", format!("{kind} fault"));
        }
        security_event!(info, "exception_flows", "All kinds raised", count = recorder.count());

        assert_eq!(recorder.count(), SecurityErrorKind::ALL.len());
        assert_eq!(recorder.count_of(SecurityErrorKind::Intrusion), 1);
    }

    #[test]
    fn test_randomizer_with_memory_logger_does_not_touch_detector() {
        let detector = Arc::new(RecordingIntrusionDetector::new());
        let _reporter = reporter_for(detector.clone());

        let randomizer = Randomizer::new(
            Arc::new(SequenceRandomSource::constant(2)),
            Arc::new(Base64Encoder::new()),
            Arc::new(Sha512Hasher::default()),
            Arc::new(MemorySecurityLogger::new()),
        );
        randomizer.random_guid().unwrap();
        assert_eq!(detector.count(), 0);
    }
}
