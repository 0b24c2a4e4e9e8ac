pub mod capture;
pub mod service;
pub mod soft;
pub mod verify;

pub use capture::{capture_panic, CapturedPanic};
pub use service::{AnswerService, MockAnswerService, StubAnswerService};
pub use soft::{assert_softly, Failure, FailureKind, SoftAssertionError, SoftAssertions};
pub use verify::{CallLog, CallRecord, VerificationError, VerificationResult};
