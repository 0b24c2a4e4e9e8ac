// 呼び出し検証のエラー型定義

use thiserror::Error;

/// 呼び出し検証固有のエラー型
///
/// メッセージは検証パニックの本文としてそのまま使われる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// 期待した呼び出しが一度も記録されていない
    #[error("Verification failed: {method}({args}) was not called (expected {expected} call(s))")]
    NeverCalled {
        method: String,
        args: String,
        expected: usize,
    },

    /// 呼び出されてはいるが回数が合わない
    #[error("Verification failed: {method}({args}) was called {actual} time(s) but {expected} call(s) were expected")]
    CallCountMismatch {
        method: String,
        args: String,
        expected: usize,
        actual: usize,
    },
}

impl VerificationError {
    /// 未呼び出しエラーの作成
    pub fn never_called(
        method: impl Into<String>,
        args: impl Into<String>,
        expected: usize,
    ) -> Self {
        Self::NeverCalled {
            method: method.into(),
            args: args.into(),
            expected,
        }
    }

    /// 回数不一致エラーの作成
    pub fn call_count_mismatch(
        method: impl Into<String>,
        args: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::CallCountMismatch {
            method: method.into(),
            args: args.into(),
            expected,
            actual,
        }
    }

    /// 検証対象のメソッド名
    pub fn method(&self) -> &str {
        match self {
            Self::NeverCalled { method, .. } => method,
            Self::CallCountMismatch { method, .. } => method,
        }
    }

    /// 期待していた呼び出し回数
    pub fn expected(&self) -> usize {
        match self {
            Self::NeverCalled { expected, .. } => *expected,
            Self::CallCountMismatch { expected, .. } => *expected,
        }
    }

    /// 実際に記録されていた呼び出し回数
    pub fn actual(&self) -> usize {
        match self {
            Self::NeverCalled { .. } => 0,
            Self::CallCountMismatch { actual, .. } => *actual,
        }
    }
}

/// 呼び出し検証の結果型
pub type VerificationResult = std::result::Result<(), VerificationError>;
