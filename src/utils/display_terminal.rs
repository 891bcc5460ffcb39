//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부팅 후 바이너리가 출력하는 배너와 요약을 만듭니다.
//! 박스 형태의 제목, 프로바이더/바인딩/라우트 목록을 트리 형태로 표현합니다.

use crate::core::Application;

/// 박스 내부 너비
const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 세 줄을 만듭니다
///
/// # Examples
///
/// ```rust
/// use app_kernel::utils::display_terminal::boxed_title;
///
/// let lines = boxed_title("System Started");
/// assert_eq!(lines.len(), 3);
/// assert!(lines[1].contains("System Started"));
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> Vec<String> {
    let border = "═".repeat(CONTENT_WIDTH);
    vec![
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = CONTENT_WIDTH),
        format!("╚{}╝", border),
    ]
}

pub fn print_boxed_title(title: &str) {
    for line in boxed_title(title) {
        println!("{}", line);
    }
}

/// 서브 항목 한 줄 (`   ├─ name: status`)
pub fn sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 부팅 요약을 만듭니다
///
/// # Arguments
///
/// * `providers` - 등록 순서대로의 프로바이더 이름
/// * `bindings` - 컨테이너에 바인딩된 식별자
/// * `routes` - `METHOD /path` 형식의 라우트
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               🎉 APPLICATION BOOTED              ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Providers: 3
///    ├─ ConfigProvider: registered
///    🔧 Bindings: 3
///    ├─ app.config: bound
///    🚀 Routes: 1
///    ├─ GET /health: ready
/// ```
pub fn boot_summary(providers: &[String], bindings: &[String], routes: &[String]) -> Vec<String> {
    let mut lines = boxed_title("🎉 APPLICATION BOOTED");

    lines.push(format!("   📦 Providers: {}", providers.len()));
    lines.extend(providers.iter().map(|name| sub_task(name, "registered")));

    lines.push(format!("   🔧 Bindings: {}", bindings.len()));
    lines.extend(bindings.iter().map(|id| sub_task(id, "bound")));

    lines.push(format!("   🚀 Routes: {}", routes.len()));
    lines.extend(routes.iter().map(|route| sub_task(route, "ready")));

    lines
}

/// 부팅된 애플리케이션의 요약을 출력합니다. 라우터가 없으면 라우트는 비어 있습니다.
pub fn print_boot_summary(app: &Application) {
    let routes: Vec<String> = app
        .router()
        .map(|router| {
            router
                .routes()
                .iter()
                .map(|route| format!("{} {}", route.method(), route.path()))
                .collect()
        })
        .unwrap_or_default();

    println!();
    for line in boot_summary(&app.provider_names(), &app.container().identifiers(), &routes) {
        println!("{}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let lines = boxed_title("abc");

        assert_eq!(lines[0].chars().count(), CONTENT_WIDTH + 2);
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[1].starts_with("║  "));
    }

    #[test]
    fn test_boot_summary_lists_everything() {
        let providers = vec!["ConfigProvider".to_string()];
        let bindings = vec!["app.config".to_string(), "app.router".to_string()];
        let routes = vec!["GET /health".to_string()];

        let lines = boot_summary(&providers, &bindings, &routes);

        assert!(lines.contains(&"   📦 Providers: 1".to_string()));
        assert!(lines.contains(&"   ├─ app.router: bound".to_string()));
        assert!(lines.contains(&"   ├─ GET /health: ready".to_string()));
        assert_eq!(lines.len(), 3 + 3 + 3 + 1);
    }

    #[test]
    fn test_print_boot_summary_without_router() {
        let app = Application::bare();
        app.boot().unwrap();

        print_boot_summary(&app);
    }
}
