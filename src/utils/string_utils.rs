//! # 문자열 유틸리티
//!
//! 입력 정규화에 사용되는 공통 문자열 처리 함수들입니다.

/// 문자열 정리 (trim 후 반환)
///
/// 단순히 앞뒤 공백을 제거합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(trim_string("  Hello World  "), "Hello World");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}
