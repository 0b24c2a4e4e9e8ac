// ソフトアサーション(失敗の収集と集約報告)

pub mod block;
pub mod collector;
pub mod failure;

pub use block::assert_softly;
pub use collector::SoftAssertions;
pub use failure::{Failure, FailureKind, SoftAssertionError};
