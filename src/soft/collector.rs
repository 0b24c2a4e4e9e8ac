// ソフトアサーションの収集器
// チェックの失敗を即座にパニックさせず、終端でまとめて報告する

use std::fmt;
use std::mem;

use super::failure::{Failure, SoftAssertionError};
use crate::capture::capture_panic;

/// 失敗を収集するソフトアサーション
///
/// `check_*` 系のメソッドは失敗してもブロックを中断せず、失敗を記録して
/// 続行する。`assert_all()` か `into_result()` で記録をまとめて精算する。
///
/// 記録された失敗を精算しないまま破棄するとパニックする(検証漏れの防止)。
#[derive(Debug, Default)]
pub struct SoftAssertions {
    failures: Vec<Failure>,
}

impl SoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 等価チェック
    ///
    /// 不一致なら `expected:<E> but was:<A>` を記録する。
    /// チェックが通ったかどうかを返す。
    #[track_caller]
    pub fn check_eq<A, E>(&mut self, actual: A, expected: E) -> bool
    where
        A: fmt::Debug + PartialEq<E>,
        E: fmt::Debug,
    {
        if actual == expected {
            true
        } else {
            self.failures.push(Failure::mismatch(&actual, &expected));
            false
        }
    }

    /// 非等価チェック
    #[track_caller]
    pub fn check_ne<A, E>(&mut self, actual: A, banned: E) -> bool
    where
        A: fmt::Debug + PartialEq<E>,
        E: fmt::Debug,
    {
        if actual != banned {
            true
        } else {
            self.failures.push(Failure::unexpected_equal(&actual, &banned));
            false
        }
    }

    /// 条件チェック
    #[track_caller]
    pub fn check(&mut self, condition: bool, message: impl Into<String>) -> bool {
        if condition {
            true
        } else {
            self.failures.push(Failure::condition(message));
            false
        }
    }

    /// 無条件に失敗を記録する
    #[track_caller]
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(Failure::explicit(message));
    }

    /// クロージャを実行し、パニックしたら失敗として記録する
    ///
    /// 収集器を経由しない失敗(モック検証など)はそのままではブロックを
    /// 中断してしまう。このラッパーで包むと、パニックが収集器の失敗に
    /// 再分類され、他のチェックと同様に集約される。
    ///
    /// 正常終了なら `Some(値)`、パニックを記録したら `None` を返す。
    #[track_caller]
    pub fn check_no_panic<T>(&mut self, f: impl FnOnce() -> T) -> Option<T> {
        match capture_panic(f) {
            Ok(value) => Some(value),
            Err(caught) => {
                self.failures.push(Failure::panicked(caught.message_lossy()));
                None
            }
        }
    }

    /// 失敗が記録されていないかどうか
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// 記録された失敗の件数
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// 記録された失敗の一覧
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// 記録を精算し、値として取り出す
    pub fn into_result(mut self) -> Result<(), SoftAssertionError> {
        let failures = mem::take(&mut self.failures);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(SoftAssertionError::new(failures))
        }
    }

    /// 記録を精算し、失敗があれば集約レポートでパニックする
    ///
    /// 失敗がなければ何もしない。記録は drain されるため、同じ収集器を
    /// 続けて使っても二重報告にはならない。
    #[track_caller]
    pub fn assert_all(&mut self) {
        if self.failures.is_empty() {
            return;
        }
        let failures = mem::take(&mut self.failures);
        panic!("{}", SoftAssertionError::new(failures));
    }
}

impl Drop for SoftAssertions {
    fn drop(&mut self) {
        // パニック中の二重パニックは避ける
        if !self.failures.is_empty() && !std::thread::panicking() {
            panic!(
                "SoftAssertions dropped with {} unchecked failure(s); call assert_all() or into_result()",
                self.failures.len()
            );
        }
    }
}
