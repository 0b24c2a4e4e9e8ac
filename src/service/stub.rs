// 手書きのスタブ実装(決め打ち応答 + 呼び出し記録)

use std::collections::HashMap;

use super::AnswerService;
use crate::record_call;
use crate::verify::CallLog;

/// 登録済みの入力に決め打ちの応答を返すスタブ
///
/// 受けた呼び出しは [`CallLog`] に記録され、`log()` 経由でテスト側から
/// 検証できる。`Clone` はジャーナルを共有したままスタブを複製する。
///
/// 登録されていない入力で呼ばれた場合はパニックする。未実装の本物を
/// 模しているため、黙って既定値を返すことはしない。
#[derive(Debug, Clone, Default)]
pub struct StubAnswerService {
    responses: HashMap<(i32, i32), i32>,
    log: CallLog,
    verbose: bool,
}

impl StubAnswerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力 (a, b) に対する応答を登録する
    pub fn with_response(mut self, a: i32, b: i32, answer: i32) -> Self {
        self.responses.insert((a, b), answer);
        self
    }

    /// 呼び出しごとの診断出力(`a: 1, b: 2` 形式)を有効にする
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// 呼び出し記録へのハンドル
    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl AnswerService for StubAnswerService {
    fn answer(&self, a: i32, b: i32) -> i32 {
        if self.verbose {
            println!("a: {a}, b: {b}");
        }
        // 未登録入力のパニックより先に記録する(診断しやすくするため)
        record_call!(self.log, answer(a, b));
        match self.responses.get(&(a, b)) {
            Some(answer) => *answer,
            None => panic!("StubAnswerService::answer({a}, {b}) has no stubbed response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::capture_panic;

    #[test]
    fn test_returns_registered_response() {
        let service = StubAnswerService::new().with_response(1, 2, 3);
        assert_eq!(service.answer(1, 2), 3);
    }

    #[test]
    fn test_multiple_responses() {
        let service = StubAnswerService::new()
            .with_response(1, 2, 3)
            .with_response(20, 22, 42);

        assert_eq!(service.answer(1, 2), 3);
        assert_eq!(service.answer(20, 22), 42);
    }

    #[test]
    fn test_records_calls_in_log() {
        let service = StubAnswerService::new().with_response(1, 2, 3);

        service.answer(1, 2);
        service.answer(1, 2);

        assert_eq!(service.log().count_with("answer", "1, 2"), 2);
        service.log().verify_called_with("answer", "1, 2", 2);
    }

    #[test]
    fn test_unregistered_input_panics() {
        let service = StubAnswerService::new().with_response(1, 2, 3);

        let caught = capture_panic(|| service.answer(5, 6)).unwrap_err();
        assert_eq!(
            caught.message_lossy(),
            "StubAnswerService::answer(5, 6) has no stubbed response"
        );
        // パニックした呼び出しも記録には残る
        assert_eq!(service.log().count_with("answer", "5, 6"), 1);
    }

    #[test]
    fn test_clone_shares_call_log() {
        let service = StubAnswerService::new().with_response(1, 2, 3);
        let cloned = service.clone();

        cloned.answer(1, 2);
        assert_eq!(service.log().count("answer"), 1);
    }

    #[test]
    fn test_verbose_stub_still_answers() {
        let service = StubAnswerService::new().with_response(1, 2, 3).verbose();

        assert_eq!(service.answer(1, 2), 3);
        assert_eq!(service.log().count("answer"), 1);
    }

    #[test]
    fn test_default_stub_has_no_responses() {
        let service = StubAnswerService::default();
        assert!(service.log().is_empty());
        assert!(capture_panic(|| service.answer(1, 2)).is_err());
    }
}
