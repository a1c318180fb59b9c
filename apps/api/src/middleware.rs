//! # ミドルウェア
//!
//! 認証（アクセストークンの検証）と認可（ロールの検証）を提供する。
//!
//! ```text
//! request → authenticate → require_role（書き込み系のみ）→ handler
//!              401             403
//! ```

mod authn;
mod authz;

pub use authn::authenticate;
pub use authz::{AuthzState, require_role};
