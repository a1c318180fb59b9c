//! # タスクハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /tasks/` - タスク一覧
//! - `POST /tasks/` - タスク作成（操作主体が所有者になる）
//! - `PUT /tasks/{id}` - タイトルと説明の更新
//! - `PATCH /tasks/update-status/{id}` - ステータスの更新
//! - `PATCH /tasks/update-category/{id}` - 所属カテゴリの付け替え
//! - `DELETE /tasks/{id}` - タスク削除
//!
//! 更新系はすべて「読み込み → 所有者確認 → 上書き → 保存」の順で処理する。
//! 読み込みに失敗した時点で 404 を返し、上書きには進まない。

use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use kanban_domain::{
    category::CategoryId,
    task::{Task, TaskDescription, TaskId, TaskTitle},
};
use kanban_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    auth::AuthenticatedUser,
    error::ApiError,
    extract::{IdPath, ValidatedJson},
    usecase::{StoreTaskInput, TaskUseCase},
};

/// タスク API の共有状態
pub struct TaskState {
    pub usecase: Arc<dyn TaskUseCase>,
}

// --- リクエスト型 ---

/// タスク作成リクエスト
///
/// `user_id` は受け付けない。所有者は常に操作主体になる。
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title は必須です"))]
    pub title:       String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description は必須です"))]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "category_id は必須です"))]
    pub category_id: i64,
}

/// タイトルと説明の更新リクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title は必須です"))]
    pub title:       String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description は必須です"))]
    pub description: String,
}

impl UpdateTaskRequest {
    pub fn apply_to(self, task: Task) -> Result<Task, ApiError> {
        let title = TaskTitle::new(self.title)?;
        let description = TaskDescription::new(self.description)?;
        Ok(task.with_details(title, description))
    }
}

/// ステータス更新リクエスト
///
/// `status` は省略と `null` を拒否し、`false` は受け付ける。
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskStatusRequest {
    #[serde(default)]
    #[validate(required(message = "status は必須です"))]
    pub status: Option<bool>,
}

impl UpdateTaskStatusRequest {
    pub fn apply_to(self, task: Task) -> Result<Task, ApiError> {
        let status = self
            .status
            .ok_or_else(|| ApiError::Validation("status は必須です".to_string()))?;
        Ok(task.with_status(status))
    }
}

/// カテゴリ付け替えリクエスト
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskCategoryRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "category_id は必須です"))]
    pub category_id: i64,
}

impl UpdateTaskCategoryRequest {
    pub fn apply_to(self, task: Task) -> Result<Task, ApiError> {
        Ok(task.with_category(CategoryId::new(self.category_id)))
    }
}

// --- レスポンス型 ---

/// タスク DTO（一覧）
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskDto {
    pub id:          i64,
    pub title:       String,
    pub description: String,
    pub status:      bool,
    pub user_id:     i64,
    pub category_id: i64,
    pub created_at:  DateTime<Utc>,
    pub updated_at:  DateTime<Utc>,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id:          task.id().as_i64(),
            title:       task.title().to_string(),
            description: task.description().to_string(),
            status:      task.status(),
            user_id:     task.user_id().as_i64(),
            category_id: task.category_id().as_i64(),
            created_at:  task.created_at(),
            updated_at:  task.updated_at(),
        }
    }
}

/// 作成直後のタスク DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskCreatedDto {
    pub id:          i64,
    pub title:       String,
    pub description: String,
    pub status:      bool,
    pub user_id:     i64,
    pub category_id: i64,
    pub created_at:  DateTime<Utc>,
}

impl From<&Task> for TaskCreatedDto {
    fn from(task: &Task) -> Self {
        Self {
            id:          task.id().as_i64(),
            title:       task.title().to_string(),
            description: task.description().to_string(),
            status:      task.status(),
            user_id:     task.user_id().as_i64(),
            category_id: task.category_id().as_i64(),
            created_at:  task.created_at(),
        }
    }
}

/// 更新直後のタスク DTO
///
/// 更新日時の比較ができるよう `created_at` も含める。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskUpdatedDto {
    pub id:          i64,
    pub title:       String,
    pub description: String,
    pub status:      bool,
    pub user_id:     i64,
    pub category_id: i64,
    pub created_at:  DateTime<Utc>,
    pub updated_at:  DateTime<Utc>,
}

impl From<&Task> for TaskUpdatedDto {
    fn from(task: &Task) -> Self {
        Self {
            id:          task.id().as_i64(),
            title:       task.title().to_string(),
            description: task.description().to_string(),
            status:      task.status(),
            user_id:     task.user_id().as_i64(),
            category_id: task.category_id().as_i64(),
            created_at:  task.created_at(),
            updated_at:  task.updated_at(),
        }
    }
}

// --- ハンドラ ---

/// 所有者確認済みのタスクを読み込む
async fn load_owned_task(
    state: &TaskState,
    id: i64,
    user: &AuthenticatedUser,
) -> Result<Task, ApiError> {
    let task = state.usecase.get(TaskId::new(id)).await?;
    task.ensure_owned_by(user.id)?;
    Ok(task)
}

/// 上書き済みのタスクを保存し、更新レスポンスを組み立てる
async fn save_updated(
    state: &TaskState,
    task: Task,
) -> Result<(StatusCode, Json<ApiResponse<TaskUpdatedDto>>), ApiError> {
    let updated = state.usecase.update(task).await?;
    let response = ApiResponse::ok(TaskUpdatedDto::from(&updated));
    Ok((StatusCode::OK, Json(response)))
}

/// GET /tasks/
#[tracing::instrument(skip_all)]
pub async fn list_tasks(State(state): State<Arc<TaskState>>) -> Result<impl IntoResponse, ApiError> {
    let tasks = state.usecase.list().await?;

    let items: Vec<TaskDto> = tasks.iter().map(TaskDto::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(items))))
}

/// POST /tasks/
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたタスク（`status` は常に `false`）
/// - `400 Bad Request`: 必須項目の欠落
/// - `404 Not Found`: カテゴリが存在しない
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn store_task(
    State(state): State<Arc<TaskState>>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = StoreTaskInput {
        title:       TaskTitle::new(req.title)?,
        description: TaskDescription::new(req.description)?,
        user_id:     user.id,
        category_id: CategoryId::new(req.category_id),
    };

    let task = state.usecase.store(input).await?;

    let response = ApiResponse::created(TaskCreatedDto::from(&task));
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /tasks/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のタスク
/// - `400 Bad Request`: 必須項目の欠落
/// - `403 Forbidden`: 所有者以外
/// - `404 Not Found`: タスクが存在しない
#[tracing::instrument(skip_all, fields(task_id = id, user_id = %user.id))]
pub async fn update_task(
    State(state): State<Arc<TaskState>>,
    Extension(user): Extension<AuthenticatedUser>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let task = load_owned_task(&state, id, &user).await?;
    let task = req.apply_to(task)?;

    save_updated(&state, task).await
}

/// PATCH /tasks/update-status/{id}
///
/// 同じ値を何度送っても結果のステータスは変わらない。
#[tracing::instrument(skip_all, fields(task_id = id, user_id = %user.id))]
pub async fn update_task_status(
    State(state): State<Arc<TaskState>>,
    Extension(user): Extension<AuthenticatedUser>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateTaskStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let task = load_owned_task(&state, id, &user).await?;
    let task = req.apply_to(task)?;

    save_updated(&state, task).await
}

/// PATCH /tasks/update-category/{id}
///
/// 付け替え先のカテゴリが存在しない場合は 404。
#[tracing::instrument(skip_all, fields(task_id = id, user_id = %user.id))]
pub async fn update_task_category(
    State(state): State<Arc<TaskState>>,
    Extension(user): Extension<AuthenticatedUser>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateTaskCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let task = load_owned_task(&state, id, &user).await?;
    let task = req.apply_to(task)?;

    save_updated(&state, task).await
}

/// DELETE /tasks/{id}
#[tracing::instrument(skip_all, fields(task_id = id, user_id = %user.id))]
pub async fn delete_task(
    State(state): State<Arc<TaskState>>,
    Extension(user): Extension<AuthenticatedUser>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, ApiError> {
    let task = load_owned_task(&state, id, &user).await?;

    state.usecase.delete(task.id()).await?;

    Ok((StatusCode::OK, Json(MessageResponse::deleted("task"))))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request},
        routing::{get, patch, put},
    };
    use chrono::Duration;
    use kanban_domain::{
        category::{Category, CategoryType},
        clock::SteppingClock,
        user::{Role, UserId},
    };
    use kanban_infra::mock::{MockCategoryRepository, MockTaskRepository};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;
    use crate::usecase::TaskUseCaseImpl;

    // --- ヘルパー ---

    const OWNER_ID: i64 = 42;
    const OTHER_ID: i64 = 7;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    struct Fixture {
        tasks:      MockTaskRepository,
        categories: MockCategoryRepository,
    }

    impl Fixture {
        fn new() -> Self {
            let categories = MockCategoryRepository::new();
            for (id, name) in [(1, "Backlog"), (2, "Done")] {
                categories.add_category(Category::from_db(
                    CategoryId::new(id),
                    CategoryType::new(name).unwrap(),
                    fixed_now(),
                    fixed_now(),
                ));
            }
            Self {
                tasks: MockTaskRepository::new(),
                categories,
            }
        }

        fn seed_task(&self, id: i64, owner: i64, status: bool) -> Task {
            let task = Task::from_db(
                TaskId::new(id),
                TaskTitle::new("Fix bug").unwrap(),
                TaskDescription::new("desc").unwrap(),
                status,
                UserId::new(owner),
                CategoryId::new(1),
                fixed_now(),
                fixed_now(),
            );
            self.tasks.add_task(task.clone());
            task
        }

        fn app_as(&self, user_id: i64) -> Router {
            let usecase = TaskUseCaseImpl::new(
                Arc::new(self.tasks.clone()),
                Arc::new(self.categories.clone()),
                Arc::new(SteppingClock::new(
                    fixed_now() + Duration::seconds(1),
                    Duration::seconds(1),
                )),
            );
            let state = Arc::new(TaskState {
                usecase: Arc::new(usecase),
            });
            let user = AuthenticatedUser::new(
                UserId::new(user_id),
                "user@example.com",
                Role::User,
            );

            Router::new()
                .route("/tasks/", get(list_tasks).post(store_task))
                .route("/tasks/{id}", put(update_task).delete(delete_task))
                .route("/tasks/update-status/{id}", patch(update_task_status))
                .route("/tasks/update-category/{id}", patch(update_task_category))
                .layer(Extension(user))
                .with_state(state)
        }
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_body<T: serde::de::DeserializeOwned>(
        response: axum::http::Response<Body>,
    ) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // --- 作成 ---

    #[tokio::test]
    async fn test_post_操作主体が所有者の未完了タスクを201で返す() {
        // Given
        let fixture = Fixture::new();
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(json_request(
                Method::POST,
                "/tasks/",
                serde_json::json!({ "title": "Fix bug", "description": "desc", "category_id": 1 }),
            ))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: ApiResponse<TaskCreatedDto> = response_body(response).await;
        assert_eq!(body.code, 201);
        assert_eq!(body.data.user_id, OWNER_ID);
        assert!(!body.data.status);
        assert_eq!(body.data.category_id, 1);
        assert_eq!(fixture.tasks.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_post_ボディのuser_idは無視される() {
        let fixture = Fixture::new();
        let sut = fixture.app_as(OWNER_ID);

        let response = sut
            .oneshot(json_request(
                Method::POST,
                "/tasks/",
                serde_json::json!({
                    "title": "Fix bug",
                    "description": "desc",
                    "category_id": 1,
                    "user_id": 999,
                    "status": true
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let stored = fixture.tasks.snapshot();
        assert_eq!(stored[0].user_id(), UserId::new(OWNER_ID));
        assert!(!stored[0].status());
    }

    #[rstest]
    #[case::titleなし(serde_json::json!({ "description": "desc", "category_id": 1 }), "title は必須です")]
    #[case::descriptionなし(serde_json::json!({ "title": "Fix bug", "category_id": 1 }), "description は必須です")]
    #[case::category_idなし(serde_json::json!({ "title": "Fix bug", "description": "desc" }), "category_id は必須です")]
    #[tokio::test]
    async fn test_post_必須項目が欠けると400で何も保存しない(
        #[case] body: serde_json::Value,
        #[case] expected: &str,
    ) {
        // Given
        let fixture = Fixture::new();
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(json_request(Method::POST, "/tasks/", body))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = response_body(response).await;
        assert_eq!(body.message, expected);
        assert!(fixture.tasks.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_post_存在しないカテゴリは404を返す() {
        let fixture = Fixture::new();
        let sut = fixture.app_as(OWNER_ID);

        let response = sut
            .oneshot(json_request(
                Method::POST,
                "/tasks/",
                serde_json::json!({ "title": "Fix bug", "description": "desc", "category_id": 99 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(fixture.tasks.snapshot().is_empty());
    }

    // --- 一覧 ---

    #[tokio::test]
    async fn test_get_全タスクを一覧で返す() {
        // Given
        let fixture = Fixture::new();
        fixture.seed_task(1, OWNER_ID, false);
        fixture.seed_task(2, OTHER_ID, true);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(Request::builder().uri("/tasks/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Vec<TaskDto>> = response_body(response).await;
        let ids: Vec<i64> = body.data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    // --- 更新 ---

    #[tokio::test]
    async fn test_put_タイトルと説明だけを上書きする() {
        // Given
        let fixture = Fixture::new();
        let original = fixture.seed_task(1, OWNER_ID, true);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(json_request(
                Method::PUT,
                "/tasks/1",
                serde_json::json!({ "title": "Write docs", "description": "README" }),
            ))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<TaskUpdatedDto> = response_body(response).await;
        assert_eq!(body.data.title, "Write docs");
        assert_eq!(body.data.description, "README");
        assert_eq!(body.data.status, original.status());
        assert_eq!(body.data.user_id, OWNER_ID);
        assert_eq!(body.data.category_id, 1);
        assert_eq!(body.data.created_at, original.created_at());
        assert!(body.data.updated_at > original.updated_at());
    }

    #[tokio::test]
    async fn test_put_所有者以外は403でタスクは変わらない() {
        // Given
        let fixture = Fixture::new();
        let original = fixture.seed_task(1, OWNER_ID, false);
        let sut = fixture.app_as(OTHER_ID);

        // When
        let response = sut
            .oneshot(json_request(
                Method::PUT,
                "/tasks/1",
                serde_json::json!({ "title": "Hijack", "description": "x" }),
            ))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(fixture.tasks.snapshot(), vec![original]);
    }

    #[tokio::test]
    async fn test_put_存在しないタスクは404を返す() {
        let fixture = Fixture::new();
        let sut = fixture.app_as(OWNER_ID);

        let response = sut
            .oneshot(json_request(
                Method::PUT,
                "/tasks/99",
                serde_json::json!({ "title": "Write docs", "description": "README" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(fixture.tasks.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_put_数値でないidは400を返す() {
        let fixture = Fixture::new();
        let sut = fixture.app_as(OWNER_ID);

        let response = sut
            .oneshot(json_request(
                Method::PUT,
                "/tasks/abc",
                serde_json::json!({ "title": "Write docs", "description": "README" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // --- ステータス ---

    #[rstest]
    #[case::完了にする(false, true)]
    #[case::未完了に戻す(true, false)]
    #[tokio::test]
    async fn test_patch_status_両方向の遷移ができる(#[case] before: bool, #[case] after: bool) {
        // Given
        let fixture = Fixture::new();
        fixture.seed_task(7, OWNER_ID, before);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(json_request(
                Method::PATCH,
                "/tasks/update-status/7",
                serde_json::json!({ "status": after }),
            ))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<TaskUpdatedDto> = response_body(response).await;
        assert_eq!(body.data.status, after);
        assert!(body.data.updated_at > body.data.created_at);
    }

    #[tokio::test]
    async fn test_patch_status_同じ値を2回送っても結果は同じ() {
        // Given
        let fixture = Fixture::new();
        fixture.seed_task(7, OWNER_ID, false);
        let request = || {
            json_request(
                Method::PATCH,
                "/tasks/update-status/7",
                serde_json::json!({ "status": true }),
            )
        };

        // When
        let first = fixture.app_as(OWNER_ID).oneshot(request()).await.unwrap();
        let second = fixture.app_as(OWNER_ID).oneshot(request()).await.unwrap();

        // Then
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        let stored = fixture.tasks.snapshot();
        assert!(stored[0].status());
        assert_eq!(stored[0].title().as_str(), "Fix bug");
    }

    #[rstest]
    #[case::省略(serde_json::json!({}))]
    #[case::null(serde_json::json!({ "status": null }))]
    #[tokio::test]
    async fn test_patch_status_値が無いと400でタスクは変わらない(#[case] body: serde_json::Value) {
        // Given
        let fixture = Fixture::new();
        let original = fixture.seed_task(7, OWNER_ID, true);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(json_request(Method::PATCH, "/tasks/update-status/7", body))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = response_body(response).await;
        assert_eq!(body.message, "status は必須です");
        assert_eq!(fixture.tasks.snapshot(), vec![original]);
    }

    // --- カテゴリ付け替え ---

    #[tokio::test]
    async fn test_patch_category_所属カテゴリだけを変更する() {
        // Given
        let fixture = Fixture::new();
        let original = fixture.seed_task(1, OWNER_ID, false);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(json_request(
                Method::PATCH,
                "/tasks/update-category/1",
                serde_json::json!({ "category_id": 2 }),
            ))
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<TaskUpdatedDto> = response_body(response).await;
        assert_eq!(body.data.category_id, 2);
        assert_eq!(body.data.title, original.title().as_str());
        assert_eq!(body.data.status, original.status());
    }

    #[tokio::test]
    async fn test_patch_category_存在しないカテゴリは404でタスクは変わらない() {
        let fixture = Fixture::new();
        let original = fixture.seed_task(1, OWNER_ID, false);
        let sut = fixture.app_as(OWNER_ID);

        let response = sut
            .oneshot(json_request(
                Method::PATCH,
                "/tasks/update-category/1",
                serde_json::json!({ "category_id": 99 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(fixture.tasks.snapshot(), vec![original]);
    }

    // --- 削除 ---

    #[tokio::test]
    async fn test_delete_所有者は削除できる() {
        // Given
        let fixture = Fixture::new();
        fixture.seed_task(1, OWNER_ID, false);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/tasks/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = response_body(response).await;
        assert_eq!(body.message, "task has been successfully deleted");
        assert!(fixture.tasks.snapshot().is_empty());
    }

    #[rstest]
    #[case::存在しない(99, StatusCode::NOT_FOUND)]
    #[case::所有者以外(1, StatusCode::FORBIDDEN)]
    #[tokio::test]
    async fn test_delete_削除できない場合はタスクが残る(
        #[case] target: i64,
        #[case] expected: StatusCode,
    ) {
        // Given
        let fixture = Fixture::new();
        fixture.seed_task(1, OTHER_ID, false);
        let sut = fixture.app_as(OWNER_ID);

        // When
        let response = sut
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/tasks/{target}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Then
        assert_eq!(response.status(), expected);
        assert_eq!(fixture.tasks.snapshot().len(), 1);
    }
}
