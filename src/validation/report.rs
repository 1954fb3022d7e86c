//! # 검증 실패 보고 타입
//!
//! 필드 단위 검증 실패를 표현하는 에러 타입들을 정의합니다.
//! 한 번의 구성 시도에서 발생한 모든 위반 사항을 `ValidationReport`에
//! 모아서 반환하므로, 호출자는 모든 문제를 한 번에 사용자에게 보여줄 수 있습니다.
//! (첫 실패에서 중단하지 않습니다)

use serde::Serialize;
use thiserror::Error;

/// 하나의 필드가 위반한 규칙의 종류
///
/// 각 변형은 고유한 에러 코드를 가지며, 클라이언트 응답에서
/// 기계 판독 가능한 식별자로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum FieldErrorKind {
    /// 필수 필드가 없거나 비어 있음
    #[error("필수 필드가 누락되었습니다")]
    MissingField,

    /// 필드는 존재하지만 기본 타입이 다름
    #[error("{expected} 타입의 값이어야 합니다")]
    InvalidType { expected: &'static str },

    /// 타입은 맞지만 형식 규칙을 통과하지 못함 (이메일, 식별자 등)
    #[error("{rule} 형식 검증에 실패했습니다")]
    InvalidFormat { rule: &'static str },

    /// 식별자 외에 수정할 필드가 하나도 없는 부분 수정 요청
    #[error("수정할 필드가 최소 하나 필요합니다")]
    EmptyUpdate,

    /// 스키마에 선언되지 않은 필드가 입력에 포함됨
    #[error("스키마에 정의되지 않은 필드입니다")]
    UnknownField,
}

impl FieldErrorKind {
    /// 기계 판독용 에러 코드를 반환합니다.
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingField => "missing_field",
            FieldErrorKind::InvalidType { .. } => "invalid_type",
            FieldErrorKind::InvalidFormat { .. } => "invalid_format",
            FieldErrorKind::EmptyUpdate => "empty_update",
            FieldErrorKind::UnknownField => "unknown_field",
        }
    }
}

/// 하나의 필드에서 발생한 하나의 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    /// 위반이 발생한 필드 이름
    pub field: String,
    /// 위반한 규칙의 종류
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// 한 번의 구성 시도에서 수집된 모든 필드 에러
///
/// 구성은 전부 성공(유효한 디스크립터)하거나 전부 실패(이 보고서)합니다.
/// 부분적으로 채워진 디스크립터는 절대 반환되지 않습니다.
///
/// # 예제
///
/// ```rust,ignore
/// let report = match CreateUserRequest::construct(&raw) {
///     Ok(request) => return dispatch(request),
///     Err(report) => report,
/// };
///
/// // 모든 위반 사항을 한 번에 응답으로 변환
/// let body = serde_json::json!({
///     "error": "ValidationError",
///     "details": report.details(),
/// });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// 빈 보고서를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 단일 에러만 담은 보고서를 생성합니다.
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// 에러를 추가합니다.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// 수집된 에러가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 수집된 에러 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// 수집된 에러 목록을 반환합니다.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// 특정 필드에 대한 에러가 있는지 확인합니다.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// 특정 필드가 특정 종류의 규칙을 위반했는지 확인합니다.
    pub fn has_error(&self, field: &str, kind: &FieldErrorKind) -> bool {
        self.errors
            .iter()
            .any(|e| e.field == field && &e.kind == kind)
    }

    /// 필드 이름 → 메시지 목록 형태의 JSON 객체로 변환합니다.
    ///
    /// HTTP 에러 응답 본문의 `details` 항목에 그대로 사용되는 형태입니다:
    ///
    /// ```json
    /// {
    ///   "email": ["email 형식 검증에 실패했습니다"],
    ///   "name": ["필수 필드가 누락되었습니다"]
    /// }
    /// ```
    pub fn details(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for error in &self.errors {
            let entry = map
                .entry(error.field.clone())
                .or_insert_with(|| serde_json::Value::Array(Vec::new()));
            if let serde_json::Value::Array(messages) = entry {
                messages.push(serde_json::Value::String(error.kind.to_string()));
            }
        }
        serde_json::Value::Object(map)
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(FieldError::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(FieldErrorKind::MissingField.code(), "missing_field");
        assert_eq!(
            FieldErrorKind::InvalidType { expected: "string" }.code(),
            "invalid_type"
        );
        assert_eq!(
            FieldErrorKind::InvalidFormat { rule: "email" }.code(),
            "invalid_format"
        );
        assert_eq!(FieldErrorKind::EmptyUpdate.code(), "empty_update");
        assert_eq!(FieldErrorKind::UnknownField.code(), "unknown_field");
    }

    #[test]
    fn test_report_collects_multiple_errors() {
        let mut report = ValidationReport::new();
        report.push(FieldError::new("name", FieldErrorKind::MissingField));
        report.push(FieldError::new(
            "email",
            FieldErrorKind::InvalidFormat { rule: "email" },
        ));

        assert_eq!(report.len(), 2);
        assert!(report.has_field("name"));
        assert!(report.has_error("name", &FieldErrorKind::MissingField));
        assert!(!report.has_field("id"));
    }

    #[test]
    fn test_display_joins_all_errors() {
        let mut report = ValidationReport::new();
        report.push(FieldError::new("name", FieldErrorKind::MissingField));
        report.push(FieldError::new("id", FieldErrorKind::UnknownField));

        let rendered = report.to_string();
        assert!(rendered.contains("name"));
        assert!(rendered.contains("; "));
        assert!(rendered.contains("id"));
    }

    #[test]
    fn test_details_groups_messages_by_field() {
        let mut report = ValidationReport::new();
        report.push(FieldError::new("email", FieldErrorKind::MissingField));
        report.push(FieldError::new(
            "email",
            FieldErrorKind::InvalidFormat { rule: "email" },
        ));

        let details = report.details();
        let messages = details["email"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
    }
}
