//! # ルーター構築
//!
//! ## ミドルウェアの順序（外側から）
//!
//! ```text
//! SetRequestId → Trace → PropagateRequestId → authenticate → require_role → handler
//! ```
//!
//! - `/health` は認証を通らない
//! - 一覧（GET）は認証のみ、作成・更新・削除は `user` ロールも要求する
//! - コレクションのパスは末尾スラッシュの有無どちらでも受け付ける

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
};
use kanban_domain::user::Role;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    auth::JwtCodec,
    handler::{
        CategoryState,
        TaskState,
        delete_category,
        delete_task,
        health_check,
        list_categories,
        list_tasks,
        store_category,
        store_task,
        update_category,
        update_task,
        update_task_category,
        update_task_status,
    },
    middleware::{AuthzState, authenticate, require_role},
    usecase::{CategoryUseCase, TaskUseCase},
};

/// ルーターが必要とする依存関係
pub struct AppDependencies {
    pub categories: Arc<dyn CategoryUseCase>,
    pub tasks:      Arc<dyn TaskUseCase>,
    pub jwt:        Arc<JwtCodec>,
}

/// アプリケーション全体のルーターを構築する
pub fn build_router(deps: AppDependencies) -> Router {
    let category_state = Arc::new(CategoryState {
        usecase: deps.categories,
    });
    let task_state = Arc::new(TaskState { usecase: deps.tasks });

    // 変更系ルートの認可状態
    let writer_authz = AuthzState::new([Role::User]);

    let api = Router::new()
        // カテゴリ API
        .merge(
            Router::new()
                .route("/categories", get(list_categories))
                .route("/categories/", get(list_categories))
                .with_state(category_state.clone()),
        )
        .merge(
            Router::new()
                .route("/categories", post(store_category))
                .route("/categories/", post(store_category))
                .route(
                    "/categories/{id}",
                    patch(update_category).delete(delete_category),
                )
                .route_layer(from_fn_with_state(writer_authz.clone(), require_role))
                .with_state(category_state),
        )
        // タスク API
        .merge(
            Router::new()
                .route("/tasks", get(list_tasks))
                .route("/tasks/", get(list_tasks))
                .with_state(task_state.clone()),
        )
        .merge(
            Router::new()
                .route("/tasks", post(store_task))
                .route("/tasks/", post(store_task))
                .route("/tasks/{id}", put(update_task).delete(delete_task))
                .route("/tasks/update-status/{id}", patch(update_task_status))
                .route("/tasks/update-category/{id}", patch(update_task_category))
                .route_layer(from_fn_with_state(writer_authz, require_role))
                .with_state(task_state),
        )
        .route_layer(from_fn_with_state(deps.jwt, authenticate));

    // Request ID + TraceLayer により、すべてのリクエストのログに request_id が付く
    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
