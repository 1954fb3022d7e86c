//! # Request Registry - 요청 정의 등록 표면
//!
//! 사용자 리소스의 생성/수정/삭제 요청 정의를 하나의 읽기 전용 테이블로
//! 모아 외부 프레임워크(라우트 등록, 디스패치 계층)에 노출합니다.
//!
//! ## 주요 특성
//!
//! - **명시적 구성**: 모듈 로드 부수 효과에 의존하지 않고
//!   `RequestRegistry::new()`가 세 정의를 고정 순서로 직접 등록합니다.
//! - **시작 후 불변**: 프로세스 시작 시 한 번 만들어지고 이후 변경되지 않으므로
//!   잠금 없이 여러 스레드에서 조회할 수 있습니다.
//! - **순수 조회 테이블**: 레지스트리 자체는 검증을 수행하지 않습니다.
//!   검증은 각 정의가 가리키는 `construct` 루틴의 몫입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_request_backend::core::registry::{OperationKind, RequestRegistry};
//!
//! // 시작 시 등록 표면을 순회하여 라우트에 연결
//! for definition in RequestRegistry::global().definitions() {
//!     router.register(definition.name, definition.kind);
//! }
//!
//! // 들어온 작업 종류에 맞는 디스크립터 구성
//! let request = RequestRegistry::global().construct(OperationKind::Create, &raw)?;
//! ```

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::domain::dto::users::request::{
    CreateUserRequest, DeleteUserRequest, UpdateUserRequest, CREATE_USER_SCHEMA,
    DELETE_USER_SCHEMA, UPDATE_USER_SCHEMA,
};
use crate::errors::errors::{AppError, AppResult};
use crate::validation::{FieldSchema, ValidationReport};

/// 클라이언트가 요청할 수 있는 작업의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
}

impl OperationKind {
    /// 로그와 등록 이름에 쓰이는 소문자 표기를 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Create => "create",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        }
    }
}

/// 디스패치 계층에 전달되는 검증 완료 요청
///
/// 세 디스크립터 종류를 하나의 타입으로 묶어, 작업 종류에 따라
/// 레지스트리가 "어느 디스크립터든" 반환할 수 있게 합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum UserRequest {
    Create(CreateUserRequest),
    Update(UpdateUserRequest),
    Delete(DeleteUserRequest),
}

impl UserRequest {
    /// 이 요청이 속한 작업 종류를 반환합니다.
    pub fn kind(&self) -> OperationKind {
        match self {
            UserRequest::Create(_) => OperationKind::Create,
            UserRequest::Update(_) => OperationKind::Update,
            UserRequest::Delete(_) => OperationKind::Delete,
        }
    }
}

/// 하나의 요청 종류에 대한 등록 정보
///
/// 작업 종류, 등록 이름, 정적 필드 스키마, 그리고 원시 입력을
/// 디스크립터로 바꾸는 구성 함수를 담습니다.
pub struct RequestDefinition {
    /// 이 정의가 처리하는 작업 종류 (조회 키)
    pub kind: OperationKind,
    /// 등록 표면에서 쓰이는 안정적인 이름
    pub name: &'static str,
    /// 이 요청 종류의 정적 필드 스키마
    pub schema: &'static [FieldSchema],
    /// 원시 입력 → 검증 완료 디스크립터 구성 함수
    pub construct: fn(&Map<String, Value>) -> Result<UserRequest, ValidationReport>,
}

fn construct_create(raw: &Map<String, Value>) -> Result<UserRequest, ValidationReport> {
    CreateUserRequest::construct(raw).map(UserRequest::Create)
}

fn construct_update(raw: &Map<String, Value>) -> Result<UserRequest, ValidationReport> {
    UpdateUserRequest::construct(raw).map(UserRequest::Update)
}

fn construct_delete(raw: &Map<String, Value>) -> Result<UserRequest, ValidationReport> {
    DeleteUserRequest::construct(raw).map(UserRequest::Delete)
}

/// 사용자 리소스의 요청 정의 테이블
///
/// 정의 순서는 고정입니다: Create, Update, Delete.
/// 시작 이후 동적 등록은 지원하지 않습니다.
pub struct RequestRegistry {
    definitions: Vec<RequestDefinition>,
}

impl RequestRegistry {
    /// 세 요청 정의를 고정 순서로 등록한 레지스트리를 만듭니다.
    fn new() -> Self {
        let definitions = vec![
            RequestDefinition {
                kind: OperationKind::Create,
                name: "create_user",
                schema: CREATE_USER_SCHEMA,
                construct: construct_create,
            },
            RequestDefinition {
                kind: OperationKind::Update,
                name: "update_user",
                schema: UPDATE_USER_SCHEMA,
                construct: construct_update,
            },
            RequestDefinition {
                kind: OperationKind::Delete,
                name: "delete_user",
                schema: DELETE_USER_SCHEMA,
                construct: construct_delete,
            },
        ];

        for definition in &definitions {
            log::debug!("📦 요청 정의 등록: {}", definition.name);
        }

        Self { definitions }
    }

    /// 전역 레지스트리 인스턴스를 반환합니다.
    ///
    /// 첫 접근 시 한 번만 구성되며, 외부 등록 메커니즘에
    /// 참조로 전달할 수 있습니다.
    pub fn global() -> &'static RequestRegistry {
        &REGISTRY
    }

    /// 등록된 모든 요청 정의를 등록 순서대로 반환합니다.
    pub fn definitions(&self) -> &[RequestDefinition] {
        &self.definitions
    }

    /// 작업 종류에 해당하는 요청 정의를 찾습니다.
    ///
    /// `new()`가 모든 `OperationKind`를 등록하므로 항상 존재합니다.
    /// 그 불변 조건이 깨진 경우에만 패닉합니다.
    pub fn definition(&self, kind: OperationKind) -> &RequestDefinition {
        self.definitions
            .iter()
            .find(|definition| definition.kind == kind)
            .expect("every OperationKind is registered at construction")
    }

    /// 작업 종류에 맞는 디스크립터를 구성합니다.
    ///
    /// 정의 조회 후 해당 `construct` 루틴에 위임하는 편의 메서드입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserRequest)` - 검증 완료 디스크립터
    /// * `Err(AppError::ValidationError)` - 위반된 모든 필드를 담은 보고서
    pub fn construct(&self, kind: OperationKind, raw: &Map<String, Value>) -> AppResult<UserRequest> {
        let definition = self.definition(kind);
        (definition.construct)(raw).map_err(AppError::from)
    }
}

/// 전역 요청 레지스트리 인스턴스
///
/// 첫 접근 시에만 초기화되고 이후 읽기 전용으로 공유됩니다.
static REGISTRY: Lazy<RequestRegistry> = Lazy::new(RequestRegistry::new);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_definitions_are_ordered_create_update_delete() {
        let kinds: Vec<OperationKind> = RequestRegistry::global()
            .definitions()
            .iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                OperationKind::Create,
                OperationKind::Update,
                OperationKind::Delete
            ]
        );
    }

    #[test]
    fn test_lookup_by_kind_returns_matching_definition() {
        let definition = RequestRegistry::global().definition(OperationKind::Delete);
        assert_eq!(definition.name, "delete_user");
        assert_eq!(definition.schema.len(), 1);
    }

    #[test]
    fn test_construct_dispatches_to_the_right_descriptor() {
        let registry = RequestRegistry::global();

        let request = registry
            .construct(OperationKind::Delete, &raw(json!({"id": "42"})))
            .unwrap();
        assert_eq!(request, UserRequest::Delete(DeleteUserRequest { id: 42 }));
        assert_eq!(request.kind(), OperationKind::Delete);
    }

    #[test]
    fn test_construct_surfaces_validation_report() {
        let error = RequestRegistry::global()
            .construct(OperationKind::Create, &raw(json!({"name": "Ann"})))
            .unwrap_err();

        match error {
            AppError::ValidationError(report) => assert!(report.has_field("email")),
            other => panic!("예상하지 못한 에러: {other}"),
        }
    }

    #[test]
    fn test_registry_is_shared_between_accesses() {
        let first = RequestRegistry::global() as *const RequestRegistry;
        let second = RequestRegistry::global() as *const RequestRegistry;
        assert_eq!(first, second);
    }
}
