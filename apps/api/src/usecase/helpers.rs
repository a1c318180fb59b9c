//! ユースケース層の共通ヘルパー

use kanban_infra::InfraError;

use crate::error::ApiError;

/// リポジトリの `Result<Option<T>, InfraError>` を `Result<T, ApiError>` に変換する
///
/// `None` は `ApiError::NotFound`、`InfraError` は `ApiError::Database` になる。
///
/// ```ignore
/// let task = self.task_repo.find_by_id(id).await.or_not_found("タスク", id)?;
/// ```
pub(crate) trait FindResultExt<T> {
    fn or_not_found(self, entity_name: &str, id: impl std::fmt::Display) -> Result<T, ApiError>;
}

impl<T> FindResultExt<T> for Result<Option<T>, InfraError> {
    fn or_not_found(self, entity_name: &str, id: impl std::fmt::Display) -> Result<T, ApiError> {
        self?.ok_or_else(|| ApiError::NotFound(format!("{entity_name}が見つかりません: {id}")))
    }
}
