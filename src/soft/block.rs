// ソフトアサーションブロックの実行器

use super::collector::SoftAssertions;
use crate::capture::capture_panic;

/// ソフトアサーションブロックを実行する
///
/// クロージャに渡した収集器 (`SoftAssertions`) への `check_*` は失敗しても
/// 続行し、ブロック終端でまとめて精算される。失敗があれば集約レポートで
/// パニックし、なければクロージャの戻り値を返す。
///
/// 収集器を経由しないパニック(モック検証の失敗など)はブロックを即座に
/// 中断する。その時点で記録済みの失敗があれば集約レポートが優先され、
/// 中断させたパニック自体は報告に含まれない。記録がなければ元のパニックが
/// そのまま伝播する。集約に含めたい場合は `check_no_panic` で包むこと。
///
/// # Examples
///
/// ```should_panic
/// use assert_softly::assert_softly;
///
/// assert_softly(|soft| {
///     soft.check_eq(2 * 2, 5); // 記録されるが続行する
///     soft.check_eq(2 + 2, 4); // 通る
///     soft.check_eq(2 + 2, 3); // 記録される
/// }); // ここで 2 件をまとめて報告する
/// ```
#[track_caller]
pub fn assert_softly<T>(f: impl FnOnce(&mut SoftAssertions) -> T) -> T {
    let mut soft = SoftAssertions::new();
    match capture_panic(|| f(&mut soft)) {
        Ok(value) => {
            soft.assert_all();
            value
        }
        Err(caught) => {
            // 記録済みの失敗があれば集約レポートで上書きし、
            // なければ中断させたパニックをそのまま再送出する
            soft.assert_all();
            caught.resume()
        }
    }
}
