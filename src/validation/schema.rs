//! # 필드 스키마와 공통 평가 루틴
//!
//! 각 요청 디스크립터의 스키마는 (필드 이름 → 규칙 목록)의 정적 테이블로
//! 선언되고, 종류에 상관없이 하나의 `evaluate` 루틴이 균일하게 평가합니다.
//! 디스크립터마다 별도의 검증 코드를 작성하지 않기 위한 구조입니다.
//!
//! ## 평가 순서
//!
//! 1. 스키마에 없는 입력 필드 → `UnknownField` (선언되지 않은 필드는 거부)
//! 2. 필드별 정규화: 문자열은 앞뒤 공백 제거, `null`과 공백뿐인 값은 부재로 취급
//! 3. 부재 + 필수 → `MissingField`, 존재 → 규칙 목록을 순서대로 적용
//! 4. 에러가 하나라도 있으면 전체 실패 (모든 에러를 모아 반환)

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::report::{FieldError, FieldErrorKind, ValidationReport};
use super::rules::FieldRule;
use crate::utils::string_utils::{is_valid_string, trim_string};

/// 하나의 필드에 대한 스키마 항목
///
/// `name`과 `rules`가 `'static`인 이유는 스키마가 디스크립터별
/// 정적 테이블로 선언되어 프로세스 수명 동안 변하지 않기 때문입니다.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// 입력에서 찾을 필드 이름
    pub name: &'static str,
    /// 부재 시 `MissingField`로 처리할지 여부
    pub required: bool,
    /// 순서대로 적용되는 규칙 목록 (모두 통과해야 함)
    pub rules: &'static [FieldRule],
}

/// 평가를 통과한 정규화된 필드 값들
///
/// `evaluate`가 성공했을 때만 생성되므로, 스키마에서 필수로 선언된
/// 필드는 반드시 존재하고 타입 규칙을 만족합니다.
#[derive(Debug, Default)]
pub struct NormalizedFields(BTreeMap<&'static str, Value>);

impl NormalizedFields {
    /// 필드가 존재하는지 확인합니다.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// 존재하는 필드 개수를 반환합니다.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 문자열 필드 값을 반환합니다 (정규화 완료 상태).
    pub fn text(&self, name: &str) -> Option<String> {
        self.0.get(name).and_then(Value::as_str).map(str::to_owned)
    }

    /// 숫자 식별자 필드 값을 반환합니다 (`"42"`와 `42` 모두 지원).
    pub fn id(&self, name: &str) -> Option<u64> {
        self.0.get(name).and_then(|value| match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse::<u64>().ok(),
            _ => None,
        })
    }

    /// 필수 문자열 필드 값을 반환합니다.
    ///
    /// 평가된 스키마에서 `required` + `Text` 규칙으로 선언된 필드에만
    /// 사용해야 합니다. 그 불변 조건이 깨진 경우에만 패닉합니다.
    pub fn required_text(&self, name: &str) -> String {
        self.text(name)
            .expect("required text field missing after successful evaluation")
    }

    /// 필수 식별자 필드 값을 반환합니다.
    ///
    /// 평가된 스키마에서 `required` + `NumericId` 규칙으로 선언된
    /// 필드에만 사용해야 합니다.
    pub fn required_id(&self, name: &str) -> u64 {
        self.id(name)
            .expect("required id field missing after successful evaluation")
    }

    /// (필드 이름, 정규화된 값) 쌍을 이름순으로 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.0.iter().map(|(name, value)| (*name, value))
    }
}

/// 스키마 테이블에 대해 원시 입력을 평가합니다.
///
/// 모든 디스크립터 종류가 공유하는 단일 구성 루틴입니다.
/// 첫 에러에서 중단하지 않고 모든 필드의 위반 사항을 수집하며,
/// 에러가 하나라도 있으면 정규화 결과 없이 보고서만 반환합니다.
///
/// # 인자
///
/// * `schema` - 디스크립터의 정적 필드 스키마
/// * `raw` - 전송 계층이 파싱한 원시 입력 (필드 이름 → 값)
///
/// # 반환값
///
/// * `Ok(NormalizedFields)` - 모든 필드가 유효한 경우
/// * `Err(ValidationReport)` - 하나 이상의 필드가 규칙을 위반한 경우
pub fn evaluate(
    schema: &[FieldSchema],
    raw: &Map<String, Value>,
) -> Result<NormalizedFields, ValidationReport> {
    let mut report = ValidationReport::new();

    // 선언되지 않은 필드는 거부 (조용한 데이터 유실 방지)
    for name in raw.keys() {
        if !schema.iter().any(|field| field.name == name) {
            report.push(FieldError::new(name, FieldErrorKind::UnknownField));
        }
    }

    let mut fields = BTreeMap::new();
    for field in schema {
        match normalize(raw.get(field.name)) {
            None => {
                if field.required {
                    report.push(FieldError::new(field.name, FieldErrorKind::MissingField));
                }
            }
            Some(value) => {
                // 필드당 첫 번째 위반만 기록하고 다음 필드로 진행
                match field.rules.iter().find_map(|rule| rule.check(&value).err()) {
                    Some(kind) => report.push(FieldError::new(field.name, kind)),
                    None => {
                        fields.insert(field.name, value);
                    }
                }
            }
        }
    }

    if report.is_empty() {
        Ok(NormalizedFields(fields))
    } else {
        Err(report)
    }
}

/// 원시 값 하나를 정규화합니다.
///
/// `null`과 공백뿐인 문자열은 부재와 동일하게 취급하고,
/// 문자열은 앞뒤 공백을 제거한 사본으로 바꿉니다.
fn normalize(value: Option<&Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            if is_valid_string(s) {
                Some(Value::String(trim_string(s)))
            } else {
                None
            }
        }
        Some(other) => Some(other.clone()),
    }
}
