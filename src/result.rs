//! `Result` 型の実装。
//!
//! すべての操作は `Ok` / `Err` の 2 アームを網羅する `match` で書かれており、
//! ワイルドカードによる既定動作は持たない。

use crate::{
    error::{raise, AccessError, UnwrapError},
    iter::{IntoIter, Iter},
};
use std::fmt::{self, Debug, Display};

type StdResult<T, E> = std::result::Result<T, E>;

/// 成功 (`Ok`) か失敗 (`Err`) のどちらか一方を保持する閉じた和型。
///
/// 生成後に値が変化することはなく、各コンビネータは `self` を消費して
/// 新しい値を返す。ペイロードはムーブされるだけで複製されない。
#[must_use = "Err を捨てると失敗が黙って消えます"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// 正常系。
    Ok(T),
    /// 異常系。
    Err(E),
}

impl<T, E> Result<T, E> {
    /// `Ok` であるかどうかを返す。
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// `Err` であるかどうかを返す。
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// 成功値を取り出す。
    ///
    /// # Panics
    ///
    /// `Err` の場合は [`UnwrapError`] のメッセージで panic する。
    /// `E` の型に関わらず送出されるのは常に `UnwrapError` であり、
    /// 元のエラー値は [`unwrap_err`](Self::unwrap_err) か `match` でのみ得られる。
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => raise(UnwrapError::on_err(&err)),
        }
    }

    /// [`unwrap`](Self::unwrap) の panic しない版。
    #[inline]
    pub fn try_unwrap(self) -> StdResult<T, UnwrapError>
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(err) => StdResult::Err(UnwrapError::on_err(&err)),
        }
    }

    /// エラー時に既定値を返す。
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// エラー時にエラー値から計算した値を返す。
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => f(err),
        }
    }

    /// 成功値を取り出し、エラー時は `msg` を含む [`AccessError`] で panic する。
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => raise(AccessError::expect_on_err(msg, &err)),
        }
    }

    /// [`expect`](Self::expect) の panic しない版。
    #[inline]
    pub fn try_expect(self, msg: &str) -> StdResult<T, AccessError>
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(err) => StdResult::Err(AccessError::expect_on_err(msg, &err)),
        }
    }

    /// エラー値を取り出す。
    ///
    /// # Panics
    ///
    /// `Ok` の場合は [`AccessError`] で panic する（[`UnwrapError`] ではない）。
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => raise(AccessError::unwrap_err_on_ok(&value)),
            Self::Err(err) => err,
        }
    }

    /// [`unwrap_err`](Self::unwrap_err) の panic しない版。
    #[inline]
    pub fn try_unwrap_err(self) -> StdResult<E, AccessError>
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => StdResult::Err(AccessError::unwrap_err_on_ok(&value)),
            Self::Err(err) => StdResult::Ok(err),
        }
    }

    /// エラー値を取り出し、`Ok` の場合は `msg` を含む [`AccessError`] で panic する。
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => raise(AccessError::expect_err_on_ok(msg, &value)),
            Self::Err(err) => err,
        }
    }

    /// [`expect_err`](Self::expect_err) の panic しない版。
    #[inline]
    pub fn try_expect_err(self, msg: &str) -> StdResult<E, AccessError>
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => StdResult::Err(AccessError::expect_err_on_ok(msg, &value)),
            Self::Err(err) => StdResult::Ok(err),
        }
    }

    /// `Ok` の値だけを `f` で写す。`Err` は同じエラー値のまま型だけが変わる。
    #[inline]
    #[must_use = "map は self を消費して新しい Result を返します"]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// `Err` の値だけを `f` で写す。エラー型を載せ替える唯一の手段。
    #[inline]
    #[must_use = "map_err は self を消費して新しい Result を返します"]
    pub fn map_err<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(f(err)),
        }
    }

    /// 正常値なら写像を適用し、エラーなら既定値を返す。
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// 両側それぞれに写像を用意し、単一の値へ畳み込む。
    #[inline]
    pub fn map_or_else<U, D, F>(self, err_f: D, ok_f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => ok_f(value),
            Self::Err(err) => err_f(err),
        }
    }

    /// `Ok` の値を `f` に渡し、その `Result` をそのまま返す。
    ///
    /// エラー型 `E` は連鎖を通じて固定される。`From<E>` による変換は行わないので、
    /// 別のエラー型へ移るときは先に [`map_err`](Self::map_err) を呼ぶ。
    #[inline]
    #[must_use = "and_then の戻り値が連鎖の結果そのものです"]
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// `Err` のときだけ `f` でエラー値から新しい `Result` を作る。
    #[inline]
    #[must_use = "or_else の戻り値を使わないと回復した値も失われます"]
    pub fn or_else<F, O>(self, f: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    /// `Ok` なら `other` を、`Err` なら自身のエラーを返す。
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(err) => Result::Err(err),
        }
    }

    /// `Ok` なら自身を、`Err` なら `other` を返す。
    #[inline]
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// 正常値を覗き見る。自身はそのまま返す。
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        match &self {
            Self::Ok(value) => f(value),
            Self::Err(_) => {}
        }
        self
    }

    /// エラー値を覗き見る。自身はそのまま返す。
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        match &self {
            Self::Ok(_) => {}
            Self::Err(err) => f(err),
        }
        self
    }

    /// バリアントごとの関数を適用して単一の値を得る。
    #[inline]
    pub fn match_with<U, O, D>(self, ok: O, err: D) -> U
    where
        O: FnOnce(T) -> U,
        D: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }

    /// 借用した `Result` を得る。
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// 成功値への参照を 0 または 1 要素で列挙する。
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Ok(value) => Iter::new(Some(value)),
            Self::Err(_) => Iter::new(None),
        }
    }

    /// 標準ライブラリの `Result` へ変換する。`?` 演算子と組み合わせる際に使う。
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        match self {
            Self::Ok(value) => StdResult::Ok(value),
            Self::Err(err) => StdResult::Err(err),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        match self {
            Self::Ok(value) => IntoIter::new(Some(value)),
            Self::Err(_) => IntoIter::new(None),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            StdResult::Ok(value) => Self::Ok(value),
            StdResult::Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

impl<T: Display, E: Display> Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(err) => write!(f, "Err({err})"),
        }
    }
}
