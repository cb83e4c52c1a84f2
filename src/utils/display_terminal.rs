//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 생명주기(조립, 기동, 종료) 진행 상황을 눈에 띄게 출력합니다.
//! 로그 필터와 무관하게 항상 표준 출력으로 나갑니다.

const CONTENT_WIDTH: usize = 50;

/// 박스로 둘러싼 제목 문자열을 만듭니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               BLOG SERVICE STARTING              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = CONTENT_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 조립 단계를 표시합니다.
///
/// ```text
/// → Step 3: Repository (MongoDB)
/// ```
pub fn print_step_start(step: u8, capability: &str, strategy: &str) {
    println!("→ Step {}: {} ({})", step, capability, strategy);
}

pub fn print_step_complete(step: u8, capability: &str) {
    println!("✓ Step {}: {} ready", step, capability);
}

/// 하위 작업 상태
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 요약
pub fn print_startup_summary(bind_address: &str, server_group: &str) {
    println!();
    print_boxed_title("🚀 BLOG SERVICE RUNNING");
    println!("   🌐 Address: http://{}", bind_address);
    println!("   📍 API: http://{}{}", bind_address, server_group);
    println!("   📍 Health check: http://{}{}/health", bind_address, server_group);
    println!();
}

/// 종료 요약
pub fn print_shutdown_summary(exit_code: i32) {
    println!();
    print_boxed_title("🛑 BLOG SERVICE STOPPED");
    println!("   ├─ Exit code: {}", exit_code);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered_in_fixed_width() {
        let boxed = boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[1].contains("READY"));
        assert!(lines[2].starts_with('╚'));
    }
}
