//! # API レスポンスエンベロープ
//!
//! 成功レスポンスの統一形式 `{ "code": <HTTP ステータス>, "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功レスポンスの統一型
///
/// `code` には HTTP ステータスコードをそのまま入れる。クライアントはヘッダを
/// 見なくてもボディだけで結果を判別できる。
///
/// ## 使用例
///
/// ```
/// use kanban_shared::ApiResponse;
///
/// let response = ApiResponse::new(201, "hello");
/// assert_eq!(response.code, 201);
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(code: u16, data: T) -> Self {
        Self { code, data }
    }

    /// 200 OK のレスポンスを作成する
    pub fn ok(data: T) -> Self {
        Self::new(200, data)
    }

    /// 201 Created のレスポンスを作成する
    pub fn created(data: T) -> Self {
        Self::new(201, data)
    }
}
