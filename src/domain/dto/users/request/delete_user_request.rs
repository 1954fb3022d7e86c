//! # 사용자 삭제 요청 DTO
//!
//! 기존 사용자 삭제 요청 데이터 구조를 정의합니다.
//! 식별자 하나만 받으며, 형식이 유효해야 디스크립터가 만들어집니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::{evaluate, FieldRule, FieldSchema, ValidationReport};

/// 삭제 요청의 정적 필드 스키마
pub static DELETE_USER_SCHEMA: &[FieldSchema] = &[FieldSchema {
    name: "id",
    required: true,
    rules: &[FieldRule::NumericId],
}];

/// 기존 사용자 삭제를 위한 검증 완료 디스크립터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    /// 삭제 대상 사용자의 식별자
    pub id: u64,
}

impl DeleteUserRequest {
    /// 원시 입력으로부터 검증 완료 디스크립터를 구성합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(DeleteUserRequest)` - 식별자가 존재하고 숫자 형식인 경우
    /// * `Err(ValidationReport)` - 식별자 누락, 형식 위반 또는 알 수 없는 필드
    pub fn construct(raw: &Map<String, Value>) -> Result<Self, ValidationReport> {
        let fields = evaluate(DELETE_USER_SCHEMA, raw)?;
        Ok(Self {
            id: fields.required_id("id"),
        })
    }
}
