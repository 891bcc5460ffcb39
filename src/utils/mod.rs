//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 부팅 결과를 터미널에 출력하는 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use app_kernel::utils::display_terminal::{print_boot_summary, print_boxed_title};
//!
//! print_boxed_title("app_kernel");
//! print_boot_summary(&app);
//! ```

pub mod display_terminal;
