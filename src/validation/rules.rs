//! # 필드 검증 규칙
//!
//! 하나의 필드 값에 대한 하나의 제약을 검사하는 순수 규칙들입니다.
//! 규칙은 부작용 없이 입력 값만으로 판정하며, 스키마에서 여러 규칙을
//! 조합해 사용합니다 (모든 규칙을 통과해야 필드가 유효합니다).
//!
//! 이메일 형식은 `validator` 크레이트의 `ValidateEmail` 구현을 그대로
//! 사용하고, 숫자 식별자처럼 크레이트가 제공하지 않는 형식은
//! 커스텀 검사로 처리합니다.

use serde_json::Value;
use validator::ValidateEmail;

use super::report::FieldErrorKind;

/// 하나의 필드 값에 적용되는 검증 규칙
///
/// 타입 규칙(`Text`, `Numeric`)은 `InvalidType`을, 형식 규칙(`Email`,
/// `NumericId`, `Length`)은 `InvalidFormat`을 실패로 보고합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// 문자열 타입이어야 함
    Text,
    /// 숫자 타입이어야 함
    Numeric,
    /// RFC 5322 이메일 형식이어야 함 (문자열 전제)
    Email,
    /// 숫자 식별자 형식이어야 함 (`"42"` 또는 `42`)
    NumericId,
    /// 문자 수가 min-max 범위 안이어야 함 (문자열 전제)
    Length { min: usize, max: usize },
}

impl FieldRule {
    /// 정규화된 값 하나에 이 규칙을 적용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 규칙을 통과한 경우
    /// * `Err(FieldErrorKind)` - 위반한 규칙의 종류
    pub fn check(&self, value: &Value) -> Result<(), FieldErrorKind> {
        match self {
            FieldRule::Text => match value {
                Value::String(_) => Ok(()),
                _ => Err(FieldErrorKind::InvalidType { expected: "string" }),
            },
            FieldRule::Numeric => match value {
                Value::Number(_) => Ok(()),
                _ => Err(FieldErrorKind::InvalidType { expected: "number" }),
            },
            FieldRule::Email => match value {
                Value::String(s) if s.validate_email() => Ok(()),
                Value::String(_) => Err(FieldErrorKind::InvalidFormat { rule: "email" }),
                _ => Err(FieldErrorKind::InvalidType { expected: "string" }),
            },
            FieldRule::NumericId => check_numeric_id(value),
            FieldRule::Length { min, max } => match value {
                Value::String(s) => {
                    let count = s.chars().count();
                    if count >= *min && count <= *max {
                        Ok(())
                    } else {
                        Err(FieldErrorKind::InvalidFormat { rule: "length" })
                    }
                }
                _ => Err(FieldErrorKind::InvalidType { expected: "string" }),
            },
        }
    }
}

/// 숫자 식별자 형식을 검사합니다.
///
/// 영속 계층이 부여하는 식별자는 부호 없는 정수이므로,
/// 숫자 값이거나 십진수 문자열(`"42"`)만 통과합니다.
/// `"abc!"`처럼 파싱되지 않는 문자열은 `InvalidFormat`입니다.
fn check_numeric_id(value: &Value) -> Result<(), FieldErrorKind> {
    match value {
        Value::Number(n) if n.as_u64().is_some() => Ok(()),
        Value::Number(_) => Err(FieldErrorKind::InvalidFormat { rule: "numeric_id" }),
        Value::String(s) if s.parse::<u64>().is_ok() => Ok(()),
        Value::String(_) => Err(FieldErrorKind::InvalidFormat { rule: "numeric_id" }),
        _ => Err(FieldErrorKind::InvalidType {
            expected: "string | number",
        }),
    }
}
