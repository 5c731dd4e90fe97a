//! アンラップ系アクセサが発生させる失敗シグナル。
//!
//! 失敗は 3 種類に分かれ、互いに混同しない。
//!
//! - [`UnwrapError`]: `unwrap` / `expect` 系を「値を持たない側」で呼んだ。
//! - [`AccessError`]: `Result` の反対側アクセサ（`unwrap_err` など）を誤用した。
//! - [`InvalidArgument`]: 構築ヘルパ [`some`](crate::some) に不在値が渡された。
//!
//! いずれも元のペイロードへの参照を持たず、メッセージのみを保持する。
//!
//! panic するアクセサはシグナルのメッセージをそのまま panic メッセージにする。
//! 種類を型で判別したい呼び出し側は `try_` 版を使う。

use std::fmt::{self, Debug};
use thiserror::Error;

/// `unwrap` 系が値を取り出せなかったことを示すシグナル。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// 任意のメッセージからシグナルを生成する。
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// メッセージを取得する。
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn on_err<E: Debug>(err: &E) -> Self {
        Self::new(format!("Called unwrap on Err value: {err:?}"))
    }

    pub(crate) fn on_nothing() -> Self {
        Self::new("Called unwrap on Nothing")
    }

    pub(crate) fn expect_on_nothing(msg: &str) -> Self {
        Self::new(format!("{msg}: called expect on Nothing"))
    }
}

/// `Result` の片側専用アクセサを反対側のバリアントで呼んだことを示すシグナル。
///
/// `unwrap` の失敗 ([`UnwrapError`]) とは型で区別されるため、
/// 呼び出し側はどのアクセサを誤用したかを判別できる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct AccessError {
    message: String,
}

impl AccessError {
    /// 任意のメッセージからシグナルを生成する。
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// メッセージを取得する。
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn unwrap_err_on_ok<T: Debug>(value: &T) -> Self {
        Self::new(format!("Called unwrap_err on Ok value: {value:?}"))
    }

    pub(crate) fn expect_err_on_ok<T: Debug>(msg: &str, value: &T) -> Self {
        Self::new(format!("{msg}: called expect_err on Ok value: {value:?}"))
    }

    pub(crate) fn expect_on_err<E: Debug>(msg: &str, err: &E) -> Self {
        Self::new(format!("{msg}: {err:?}"))
    }
}

/// 構築ヘルパへ不正な引数が渡されたことを示すシグナル。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    message: String,
}

impl InvalidArgument {
    /// 任意のメッセージからシグナルを生成する。
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// メッセージを取得する。
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn absent_payload() -> Self {
        Self::new("Cannot create Some from an absent value")
    }
}

/// panic メッセージとして送出できるシグナル。
pub(crate) trait Signal: fmt::Display {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    const KIND: &'static str;
}

impl Signal for UnwrapError {
    const KIND: &'static str = "unwrap";
}

impl Signal for AccessError {
    const KIND: &'static str = "access";
}

impl Signal for InvalidArgument {
    const KIND: &'static str = "invalid_argument";
}

/// シグナルのメッセージで panic する。
///
/// ペイロードは描画済みの `String` なので、既定の panic フックや
/// `#[should_panic(expected = ...)]` からメッセージが見える。
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise<S: Signal>(signal: S) -> ! {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "adt_prelude::raise",
        kind = S::KIND,
        detail = %signal,
        "failure signal raised"
    );
    panic!("{signal}")
}
