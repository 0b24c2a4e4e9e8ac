use mockall::automock;

pub mod stub;

pub use stub::StubAnswerService;

/// 二つの整数から答えを計算するサービスのトレイト
///
/// 検証デモの被験者。本物の計算ロジックは存在せず、テストダブル
/// ([`StubAnswerService`] か mockall 生成の `MockAnswerService`)で
/// 差し替えて使う。
#[automock]
pub trait AnswerService: Send + Sync {
    /// 入力 (a, b) に対する答えを返す
    fn answer(&self, a: i32, b: i32) -> i32;
}

// AnswerService for Box<dyn AnswerService>
impl AnswerService for Box<dyn AnswerService> {
    fn answer(&self, a: i32, b: i32) -> i32 {
        self.as_ref().answer(a, b)
    }
}
