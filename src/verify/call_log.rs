// テストダブルの呼び出し記録

use std::sync::{Arc, Mutex};

/// 記録された 1 回の呼び出し
///
/// 引数は表示用に `"1, 2"` の形式へ整形済みの文字列で持つ。
/// 整形は [`record_call!`](crate::record_call) マクロに任せるのが前提。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub method: String,
    pub args: String,
}

/// テストダブルが受けた呼び出しのジャーナル
///
/// `Clone` はジャーナルを共有するハンドルを作る。サービス側にクローンを
/// 渡してテスト側で検証する、という使い方ができる。
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<CallRecord>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 呼び出しを 1 件記録する
    ///
    /// 通常は直接呼ばず [`record_call!`](crate::record_call) を使う。
    pub fn record(&self, method: impl Into<String>, args: impl Into<String>) {
        self.calls.lock().unwrap().push(CallRecord {
            method: method.into(),
            args: args.into(),
        });
    }

    /// 記録された呼び出しのスナップショット
    pub fn calls(&self) -> Vec<CallRecord> {
        self.calls.lock().unwrap().clone()
    }

    /// 記録件数(メソッドを問わない)
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// 指定メソッドの呼び出し回数
    pub fn count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// 指定メソッド・指定引数の呼び出し回数
    pub fn count_with(&self, method: &str, args: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method && call.args == args)
            .count()
    }

    /// 記録を全て破棄する
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// 呼び出し 1 件を `CallLog` に記録する
///
/// 引数は `{:?}` で整形して `", "` で連結する。検証側の
/// `verify_called_with` に渡す引数文字列と同じ表記になる。
///
/// # Examples
///
/// ```
/// use assert_softly::{record_call, CallLog};
///
/// let log = CallLog::new();
/// record_call!(log, answer(1, 2));
/// record_call!(log, reset());
///
/// assert_eq!(log.count_with("answer", "1, 2"), 1);
/// assert_eq!(log.count("reset"), 1);
/// ```
#[macro_export]
macro_rules! record_call {
    ($log:expr, $method:ident()) => {
        $log.record(stringify!($method), String::new())
    };
    ($log:expr, $method:ident($($arg:expr),+ $(,)?)) => {
        $log.record(
            stringify!($method),
            [$(format!("{:?}", $arg)),+].join(", "),
        )
    };
}
