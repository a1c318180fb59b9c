//! # ユーザー
//!
//! 操作主体の識別子とロールを定義する。
//!
//! ユーザー自体の管理（登録・ログイン）はこのシステムの外側にあり、
//! ここではトークンから復元される属性だけを扱う。

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

define_i64_id! {
    /// ユーザーの一意識別子
    ///
    /// タスクの所有者判定に使う。
    pub struct UserId;
}

/// ユーザーのロール
///
/// ルート単位の認可に使う。文字列表現は小文字（`"admin"`, `"user"`）。
///
/// トークンに未知のロールが書かれていても認証は通し、[`Role::Unknown`] として
/// 認可の段階で拒否する。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    /// 上記以外。どのルートグループにも許可されない
    Unknown,
}

impl Role {
    /// トークンのロール文字列を解釈する。未知の値は [`Role::Unknown`]
    pub fn from_claim(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}
