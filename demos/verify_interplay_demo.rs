use anyhow::Result;
use assert_softly::{assert_softly, capture_panic, AnswerService, StubAnswerService};

/// デモ用サービスを作成(入力 (1, 2) に 3 を返す)
fn demo_service() -> StubAnswerService {
    StubAnswerService::new().with_response(1, 2, 3)
}

fn main() -> Result<()> {
    println!("=== モック検証とソフトアサーションの相互作用デモ ===\n");

    // 捕捉するパニックの既定フック出力(backtrace 等)を抑制する
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));

    println!("--- 1. 検証が通る場合 ---");
    let service = demo_service().verbose();
    assert_softly(|soft| {
        soft.check_eq(service.answer(1, 2), 3);
        service.log().verify_called_with("answer", "1, 2", 1);
    });
    println!("検証を含むブロックが正常終了\n");

    println!("--- 2. 検証失敗はブロックを即座に中断する ---");
    let service = demo_service();
    if let Err(caught) = capture_panic(|| {
        assert_softly(|soft| {
            // 一度も呼んでいないのでここでパニックし、後続は走らない
            service.log().verify_called_with("answer", "1, 2", 1);
            soft.check_eq(2 * 2, 5);
        });
    }) {
        println!("伝播したパニック:");
        println!("{}\n", caught.message_lossy());
    }

    println!("--- 3. 収集済みの失敗があると検証パニックは報告から消える ---");
    let service = demo_service();
    if let Err(caught) = capture_panic(|| {
        assert_softly(|soft| {
            soft.check_eq(2 * 2, 5);
            service.log().verify_called_with("answer", "1, 2", 1);
            soft.check_eq(2 + 2, 3);
        });
    }) {
        println!("報告されたのは収集済みの失敗だけ:");
        println!("{}\n", caught.message_lossy());
    }

    println!("--- 4. check_no_panic で包むと検証失敗も集約される ---");
    let service = demo_service();
    if let Err(caught) = capture_panic(|| {
        assert_softly(|soft| {
            soft.check_eq(2 * 2, 5);
            soft.check_no_panic(|| service.log().verify_called_with("answer", "1, 2", 1));
            soft.check_eq(2 + 2, 3);
        });
    }) {
        println!("検証失敗も番号付きで並ぶ:");
        println!("{}\n", caught.message_lossy());
    }

    std::panic::set_hook(default_hook);
    println!("=== デモ終了 ===");
    Ok(())
}
