//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력의 검증·정규화를 거쳐야만 인스턴스가 만들어지며,
//! 생성 이후에는 변경되지 않는 값 객체입니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 필수, 1-50자
//!
//! ### 이메일 (`email`)
//! - 필수, RFC 5322 표준 이메일 형식
//! - 중복 여부는 영속 계층에서 별도 검증
//!
//! ### 표시 이름 (`display_name`)
//! - 선택, 1-50자, 유니코드 지원 (한글, 이모지 포함)
//!
//! 식별자는 포함하지 않습니다. 영속 계층이 부여합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::{evaluate, FieldRule, FieldSchema, ValidationReport};

/// 생성 요청의 정적 필드 스키마
///
/// 여기 선언되지 않은 입력 필드는 `UnknownField`로 거부됩니다.
pub static CREATE_USER_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        name: "name",
        required: true,
        rules: &[FieldRule::Text, FieldRule::Length { min: 1, max: 50 }],
    },
    FieldSchema {
        name: "email",
        required: true,
        rules: &[FieldRule::Text, FieldRule::Email],
    },
    FieldSchema {
        name: "display_name",
        required: false,
        rules: &[FieldRule::Text, FieldRule::Length { min: 1, max: 50 }],
    },
];

/// 새로운 사용자 생성을 위한 검증 완료 디스크립터
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@x.com",
///   "display_name": "앤"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// 사용자 이름 (필수)
    pub name: String,

    /// 사용자 이메일 주소 (필수)
    ///
    /// - 로그인 인증과 알림 발송에 사용
    /// - 시스템 내 유일성 보장은 영속 계층에서 검증
    pub email: String,

    /// 표시 이름 (선택, 화면에 보여지는 이름)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl CreateUserRequest {
    /// 원시 입력으로부터 검증 완료 디스크립터를 구성합니다.
    ///
    /// 모든 필드의 위반 사항이 하나의 보고서에 수집됩니다.
    /// 부분적으로 채워진 디스크립터는 반환되지 않습니다.
    ///
    /// # 인자
    ///
    /// * `raw` - 전송 계층이 파싱한 원시 입력 (필드 이름 → 값)
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserRequest)` - 모든 필수 필드가 존재하고 형식이 유효한 경우
    /// * `Err(ValidationReport)` - 위반된 모든 필드를 나열한 보고서
    pub fn construct(raw: &Map<String, Value>) -> Result<Self, ValidationReport> {
        let fields = evaluate(CREATE_USER_SCHEMA, raw)?;
        Ok(Self {
            name: fields.required_text("name"),
            email: fields.required_text("email"),
            display_name: fields.text("display_name"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrorKind;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_input_constructs_descriptor() {
        let request =
            CreateUserRequest::construct(&raw(json!({"name": "Ann", "email": "ann@x.com"})))
                .expect("유효한 생성 요청");

        assert_eq!(request.name, "Ann");
        assert_eq!(request.email, "ann@x.com");
        assert_eq!(request.display_name, None);
    }

    #[test]
    fn test_missing_email_is_reported_by_name() {
        let report = CreateUserRequest::construct(&raw(json!({"name": "Ann"}))).unwrap_err();
        assert!(report.has_error("email", &FieldErrorKind::MissingField));
    }

    #[test]
    fn test_all_violations_are_reported_together() {
        let input = raw(json!({"email": "not-an-email", "role": "admin"}));
        let report = CreateUserRequest::construct(&input).unwrap_err();

        assert_eq!(report.len(), 3);
        assert!(report.has_error("name", &FieldErrorKind::MissingField));
        assert!(report.has_error("email", &FieldErrorKind::InvalidFormat { rule: "email" }));
        assert!(report.has_error("role", &FieldErrorKind::UnknownField));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let input = raw(json!({"name": "Ann", "email": "ann@x.com", "admin": true}));
        let report = CreateUserRequest::construct(&input).unwrap_err();
        assert!(report.has_error("admin", &FieldErrorKind::UnknownField));
    }

    #[test]
    fn test_values_are_normalized() {
        let request =
            CreateUserRequest::construct(&raw(json!({"name": " Ann ", "email": "ann@x.com"})))
                .unwrap();
        assert_eq!(request.name, "Ann");
    }

    #[test]
    fn test_construction_is_idempotent() {
        let input = raw(json!({"name": "Ann", "email": "ann@x.com", "display_name": "앤"}));
        let first = CreateUserRequest::construct(&input).unwrap();
        let second = CreateUserRequest::construct(&input).unwrap();
        assert_eq!(first, second);
    }
}
