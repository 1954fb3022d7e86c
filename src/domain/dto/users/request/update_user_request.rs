//! # 사용자 수정 요청 DTO
//!
//! 기존 사용자에 대한 부분 수정 요청 데이터 구조를 정의합니다.
//! 식별자는 필수이고(대상 존재 여부는 여기서 검증하지 않습니다),
//! 수정 가능한 필드는 모두 선택이되 최소 하나는 포함되어야 합니다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::{
    evaluate, FieldError, FieldErrorKind, FieldRule, FieldSchema, ValidationReport,
};

/// 식별자 필드 이름
const ID_FIELD: &str = "id";

/// 수정 요청의 정적 필드 스키마
///
/// `id`를 제외한 모든 필드가 선택이며, 존재하는 필드만 형식 검사를 받습니다.
pub static UPDATE_USER_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        name: "id",
        required: true,
        rules: &[FieldRule::NumericId],
    },
    FieldSchema {
        name: "name",
        required: false,
        rules: &[FieldRule::Text, FieldRule::Length { min: 1, max: 50 }],
    },
    FieldSchema {
        name: "email",
        required: false,
        rules: &[FieldRule::Text, FieldRule::Email],
    },
    FieldSchema {
        name: "display_name",
        required: false,
        rules: &[FieldRule::Text, FieldRule::Length { min: 1, max: 50 }],
    },
];

/// 기존 사용자 부분 수정을 위한 검증 완료 디스크립터
///
/// # JSON 예제
///
/// ```json
/// {
///   "id": "42",
///   "email": "new@x.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// 수정 대상 사용자의 식별자
    pub id: u64,

    /// 필드 이름 → 새 값 매핑 (검증·정규화 완료 상태)
    ///
    /// 최소 하나의 항목을 가집니다. 비어 있는 수정은 구성 단계에서
    /// `EmptyUpdate`로 거부됩니다.
    pub fields: BTreeMap<String, String>,
}

impl UpdateUserRequest {
    /// 원시 입력으로부터 검증 완료 디스크립터를 구성합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UpdateUserRequest)` - 식별자가 유효하고 수정 필드가 하나 이상인 경우
    /// * `Err(ValidationReport)` - 필드 위반 목록, 또는 수정 필드가 없는 경우
    ///   `EmptyUpdate` 하나를 담은 보고서
    pub fn construct(raw: &Map<String, Value>) -> Result<Self, ValidationReport> {
        let normalized = evaluate(UPDATE_USER_SCHEMA, raw)?;

        // 식별자 외의 필드만 수정 대상으로 수집
        let fields: BTreeMap<String, String> = normalized
            .iter()
            .filter(|(name, _)| *name != ID_FIELD)
            .filter_map(|(name, value)| {
                value.as_str().map(|text| (name.to_string(), text.to_owned()))
            })
            .collect();

        if fields.is_empty() {
            return Err(ValidationReport::single(FieldError::new(
                "fields",
                FieldErrorKind::EmptyUpdate,
            )));
        }

        Ok(Self {
            id: normalized.required_id(ID_FIELD),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_partial_update_constructs_descriptor() {
        let request =
            UpdateUserRequest::construct(&raw(json!({"id": "42", "email": "new@x.com"})))
                .expect("유효한 수정 요청");

        assert_eq!(request.id, 42);
        assert_eq!(request.fields.len(), 1);
        assert_eq!(request.fields.get("email").map(String::as_str), Some("new@x.com"));
    }

    #[test]
    fn test_identifier_only_input_is_empty_update() {
        let report = UpdateUserRequest::construct(&raw(json!({"id": "42"}))).unwrap_err();
        assert!(report.has_error("fields", &FieldErrorKind::EmptyUpdate));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_missing_identifier_is_reported() {
        let report =
            UpdateUserRequest::construct(&raw(json!({"email": "new@x.com"}))).unwrap_err();
        assert!(report.has_error("id", &FieldErrorKind::MissingField));
    }

    #[test]
    fn test_malformed_identifier_is_reported() {
        let report =
            UpdateUserRequest::construct(&raw(json!({"id": "abc!", "email": "new@x.com"})))
                .unwrap_err();
        assert!(report.has_error("id", &FieldErrorKind::InvalidFormat { rule: "numeric_id" }));
    }

    #[test]
    fn test_numeric_identifier_value_is_accepted() {
        let request =
            UpdateUserRequest::construct(&raw(json!({"id": 42, "name": "Ann"}))).unwrap();
        assert_eq!(request.id, 42);
    }

    #[test]
    fn test_invalid_optional_field_fails_whole_construction() {
        let report =
            UpdateUserRequest::construct(&raw(json!({"id": "42", "email": "broken"})))
                .unwrap_err();
        assert!(report.has_error("email", &FieldErrorKind::InvalidFormat { rule: "email" }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let report =
            UpdateUserRequest::construct(&raw(json!({"id": "42", "password": "hunter2"})))
                .unwrap_err();
        assert!(report.has_error("password", &FieldErrorKind::UnknownField));
    }
}
