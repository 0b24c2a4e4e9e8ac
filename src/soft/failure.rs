// ソフトアサーションの失敗モデル
// 収集される失敗と、ブロック終端で報告される集約エラーを定義

use std::fmt;
use std::panic::Location;

/// 記録された失敗の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 等価・非等価チェックの不一致
    Mismatch,
    /// 条件チェックの失敗
    Condition,
    /// パニックを失敗として再分類したもの
    Panic,
    /// `fail()` による明示的な失敗
    Explicit,
}

impl FailureKind {
    /// 種別の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mismatch => "mismatch",
            Self::Condition => "condition",
            Self::Panic => "panic",
            Self::Explicit => "explicit",
        }
    }
}

/// 収集された 1 件の失敗
///
/// メッセージに加えて、記録時の呼び出し位置を保持する。
#[derive(Debug, Clone)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    location: &'static Location<'static>,
}

impl Failure {
    #[track_caller]
    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Location::caller(),
        }
    }

    /// 等価チェックの不一致
    #[track_caller]
    pub(crate) fn mismatch(actual: &dyn fmt::Debug, expected: &dyn fmt::Debug) -> Self {
        Self::new(
            FailureKind::Mismatch,
            format!("expected:<{expected:?}> but was:<{actual:?}>"),
        )
    }

    /// 非等価チェックの不一致
    #[track_caller]
    pub(crate) fn unexpected_equal(actual: &dyn fmt::Debug, banned: &dyn fmt::Debug) -> Self {
        Self::new(
            FailureKind::Mismatch,
            format!("expected not:<{banned:?}> but was:<{actual:?}>"),
        )
    }

    /// 条件チェックの失敗
    #[track_caller]
    pub(crate) fn condition(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Condition, message)
    }

    /// パニックから再分類された失敗
    #[track_caller]
    pub(crate) fn panicked(detail: &str) -> Self {
        Self::new(
            FailureKind::Panic,
            format!("expected no panic, but panicked with: {detail}"),
        )
    }

    /// 明示的な失敗
    #[track_caller]
    pub(crate) fn explicit(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Explicit, message)
    }

    /// 失敗の種別を取得
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// 失敗メッセージを取得
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 記録時の呼び出し位置を取得
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// 収集された失敗の集約エラー
///
/// 失敗が 1 件だけならそのメッセージをそのまま表示し、
/// 複数件なら番号付きの一覧として表示する:
///
/// ```text
/// The following 2 assertions failed:
/// 1) expected:<5> but was:<4>
///    at tests/test_interplay.rs:12:9
/// 2) expected:<3> but was:<4>
///    at tests/test_interplay.rs:13:9
/// ```
#[derive(Debug, Clone)]
pub struct SoftAssertionError {
    failures: Vec<Failure>,
}

impl SoftAssertionError {
    pub(crate) fn new(failures: Vec<Failure>) -> Self {
        debug_assert!(!failures.is_empty(), "集約エラーは失敗なしでは作らない");
        Self { failures }
    }

    /// 集約された失敗の一覧を取得
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// 集約された失敗の件数を取得
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

impl fmt::Display for SoftAssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.len() == 1 {
            return write!(f, "{}", self.failures[0].message());
        }

        write!(f, "The following {} assertions failed:", self.failures.len())?;
        for (index, failure) in self.failures.iter().enumerate() {
            write!(f, "\n{}) {}", index + 1, failure.message())?;
            write!(f, "\n   at {}", failure.location())?;
        }
        Ok(())
    }
}

impl std::error::Error for SoftAssertionError {}
