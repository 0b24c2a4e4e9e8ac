use anyhow::Result;
use assert_softly::{assert_softly, capture_panic, SoftAssertions};

fn main() -> Result<()> {
    println!("=== ソフトアサーションのデモ ===\n");

    // 捕捉するパニックの既定フック出力(backtrace 等)を抑制する
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));

    println!("--- 1. 全て通るブロック ---");
    let answer = assert_softly(|soft| {
        soft.check_eq(2 * 2, 4);
        soft.check_eq(2 + 2, 4);
        42
    });
    println!("全チェック通過。ブロックの戻り値: {answer}\n");

    println!("--- 2. 失敗しても最後まで走り、まとめて報告する ---");
    if let Err(caught) = capture_panic(|| {
        assert_softly(|soft| {
            soft.check_eq(2 * 2, 5);
            soft.check_eq(2 + 2, 4);
            soft.check_eq(2 + 2, 3);
        });
    }) {
        println!("集約レポート:");
        println!("{}\n", caught.message_lossy());
    }

    println!("--- 3. パニックする代わりに Result で精算する ---");
    let mut soft = SoftAssertions::new();
    soft.check_eq("rust", "rust");
    soft.check(1 + 1 == 3, "算数が壊れている");
    match soft.into_result() {
        Ok(()) => println!("全チェック通過"),
        Err(error) => println!("{} 件の失敗: {error}", error.failure_count()),
    }

    println!("\n--- 4. 各失敗は発生位置を覚えている ---");
    let mut soft = SoftAssertions::new();
    soft.check_eq(2 * 2, 5);
    soft.fail("ここには来ないはずだった");
    if let Err(error) = soft.into_result() {
        for failure in error.failures() {
            println!(
                "[{}] {} at {}",
                failure.kind().as_str(),
                failure.message(),
                failure.location()
            );
        }
    }

    std::panic::set_hook(default_hook);
    println!("\n=== デモ終了 ===");
    Ok(())
}
