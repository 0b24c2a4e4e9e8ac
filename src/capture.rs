// Panic capture helpers
// パニックを値として捕捉し、メッセージを取り出せるようにする

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

/// 捕捉されたパニック
///
/// `panic!` / `assert!` 系のペイロード (`String` か `&'static str`) からは
/// メッセージを取り出せる。それ以外のペイロードは不透明なまま保持する。
pub struct CapturedPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CapturedPanic {
    fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// ペイロードが文字列ならそのメッセージを取得
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message.as_str())
        } else {
            None
        }
    }

    /// メッセージ、または文字列でないペイロードの代替表記を取得
    pub fn message_lossy(&self) -> &str {
        self.message().unwrap_or("<non-string panic payload>")
    }

    /// ペイロードを取り出す
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// 捕捉したパニックを同じペイロードで再開する
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl fmt::Debug for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedPanic")
            .field("message", &self.message())
            .finish()
    }
}

/// クロージャを実行し、パニックを `Err` として捕捉する
///
/// `AssertUnwindSafe` で包むため、呼び出し側に unwind 安全性の境界を
/// 要求しない。アサーションヘルパーとしての使い勝手を優先している。
pub fn capture_panic<T, F>(f: F) -> Result<T, CapturedPanic>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(CapturedPanic::from_payload)
}
