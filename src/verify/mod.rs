// 呼び出し検証(記録されたジャーナルと期待回数の突き合わせ)
//
// `verify_*` 系はモックライブラリの流儀に合わせて失敗時に即パニックする。
// ソフトアサーションに集約したい場合は `try_verify_*` を使うか、
// `check_no_panic` で包むこと。

pub mod call_log;
pub mod error;

pub use call_log::{CallLog, CallRecord};
pub use error::{VerificationError, VerificationResult};

/// 実際の記録回数と期待回数を突き合わせる
fn check_call_count(method: &str, args: &str, actual: usize, expected: usize) -> VerificationResult {
    if actual == expected {
        Ok(())
    } else if actual == 0 && expected > 0 {
        Err(VerificationError::never_called(method, args, expected))
    } else {
        Err(VerificationError::call_count_mismatch(
            method, args, expected, actual,
        ))
    }
}

impl CallLog {
    /// 指定メソッドが期待回数だけ呼ばれたか検証する(引数は問わない)
    pub fn try_verify_called(&self, method: &str, expected: usize) -> VerificationResult {
        check_call_count(method, "..", self.count(method), expected)
    }

    /// 指定メソッドが指定引数で期待回数だけ呼ばれたか検証する
    ///
    /// `args` は [`record_call!`](crate::record_call) と同じ表記
    /// (`{:?}` 整形を `", "` で連結)で渡す。
    pub fn try_verify_called_with(
        &self,
        method: &str,
        args: &str,
        expected: usize,
    ) -> VerificationResult {
        check_call_count(method, args, self.count_with(method, args), expected)
    }

    /// [`try_verify_called`](Self::try_verify_called) のパニック版
    #[track_caller]
    pub fn verify_called(&self, method: &str, expected: usize) {
        if let Err(error) = self.try_verify_called(method, expected) {
            panic!("{error}");
        }
    }

    /// [`try_verify_called_with`](Self::try_verify_called_with) のパニック版
    #[track_caller]
    pub fn verify_called_with(&self, method: &str, args: &str, expected: usize) {
        if let Err(error) = self.try_verify_called_with(method, args, expected) {
            panic!("{error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::capture_panic;

    #[test]
    fn test_try_verify_called_passes_on_exact_count() {
        let log = CallLog::new();
        log.record("answer", "1, 2");
        log.record("answer", "3, 4");

        assert!(log.try_verify_called("answer", 2).is_ok());
    }

    #[test]
    fn test_try_verify_called_reports_never_called() {
        let log = CallLog::new();
        let error = log.try_verify_called("answer", 1).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Verification failed: answer(..) was not called (expected 1 call(s))"
        );
    }

    #[test]
    fn test_try_verify_called_reports_count_mismatch() {
        let log = CallLog::new();
        log.record("answer", "1, 2");

        let error = log.try_verify_called("answer", 2).unwrap_err();
        assert_eq!(
            error,
            VerificationError::call_count_mismatch("answer", "..", 2, 1)
        );
    }

    #[test]
    fn test_try_verify_called_with_distinguishes_args() {
        let log = CallLog::new();
        log.record("answer", "1, 2");

        assert!(log.try_verify_called_with("answer", "1, 2", 1).is_ok());

        let error = log.try_verify_called_with("answer", "3, 4", 1).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Verification failed: answer(3, 4) was not called (expected 1 call(s))"
        );
    }

    #[test]
    fn test_verify_absence_with_expected_zero() {
        let log = CallLog::new();
        assert!(log.try_verify_called("answer", 0).is_ok());

        log.record("answer", "1, 2");
        let error = log.try_verify_called("answer", 0).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Verification failed: answer(..) was called 1 time(s) but 0 call(s) were expected"
        );
    }

    #[test]
    fn test_verify_called_panics_with_error_message() {
        let log = CallLog::new();
        let caught = capture_panic(|| log.verify_called_with("answer", "1, 2", 1)).unwrap_err();

        assert_eq!(
            caught.message_lossy(),
            "Verification failed: answer(1, 2) was not called (expected 1 call(s))"
        );
    }

    #[test]
    fn test_verify_called_silent_on_success() {
        let log = CallLog::new();
        log.record("answer", "1, 2");

        log.verify_called("answer", 1);
        log.verify_called_with("answer", "1, 2", 1);
    }

    #[test]
    fn test_args_notation_matches_record_call_macro() {
        let log = CallLog::new();
        crate::record_call!(log, answer(1, 2));

        assert!(log.try_verify_called_with("answer", "1, 2", 1).is_ok());
    }
}
