//! `Option` 型と、そのための構築ヘルパ。
//!
//! 不在を表すバリアントは `Nothing` であり、標準ライブラリの `None`
//! （ホスト言語側の不在センチネル）とは区別される。`None` を受け付けるのは
//! [`as_option`] / [`some`] / [`try_some`] の構築ヘルパだけである。

use crate::{
    error::{raise, InvalidArgument, UnwrapError},
    iter::{IntoIter, Iter},
};
use std::fmt::{self, Display};

type StdOption<T> = std::option::Option<T>;
type StdResult<T, E> = std::result::Result<T, E>;

/// 値の存在 (`Some`) か不在 (`Nothing`) を表す閉じた和型。
///
/// `Some` のペイロードはどんな値でもよい。`0` や空文字列が不在として
/// 扱われることはない。
#[must_use = "Nothing を捨てると不在の判定が失われます"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// 値を保持するケース。
    Some(T),
    /// 値が存在しないケース。
    Nothing,
}

impl<T> Option<T> {
    /// `Some` であるかどうかを判定する。
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// `Nothing` であるかどうかを判定する。
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// 値を取り出す。
    ///
    /// # Panics
    ///
    /// `Nothing` の場合は [`UnwrapError`] のメッセージで panic する。
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => raise(UnwrapError::on_nothing()),
        }
    }

    /// [`unwrap`](Self::unwrap) の panic しない版。
    #[inline]
    pub fn try_unwrap(self) -> StdResult<T, UnwrapError> {
        match self {
            Self::Some(value) => StdResult::Ok(value),
            Self::Nothing => StdResult::Err(UnwrapError::on_nothing()),
        }
    }

    /// 値を取り出し、`Nothing` の場合は `msg` を含む [`UnwrapError`] で panic する。
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => raise(UnwrapError::expect_on_nothing(msg)),
        }
    }

    /// [`expect`](Self::expect) の panic しない版。
    #[inline]
    pub fn try_expect(self, msg: &str) -> StdResult<T, UnwrapError> {
        match self {
            Self::Some(value) => StdResult::Ok(value),
            Self::Nothing => StdResult::Err(UnwrapError::expect_on_nothing(msg)),
        }
    }

    /// `Nothing` のときに既定値を返す。
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// `Nothing` のときに遅延評価した既定値を返す。
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => f(),
        }
    }

    /// `Some` の値だけを `f` で写す。`Nothing` は型だけが変わる。
    #[inline]
    #[must_use = "map は self を消費して新しい Option を返します"]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(f(value)),
            Self::Nothing => Option::Nothing,
        }
    }

    /// 値があれば写像を適用し、なければ既定値を返す。
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => default,
        }
    }

    /// 値があれば写像を適用し、なければ `default_f` の結果を返す。
    #[inline]
    pub fn map_or_else<U, D, F>(self, default_f: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => default_f(),
        }
    }

    /// `Some` の値を `f` に渡し、その `Option` をそのまま返す。
    #[inline]
    #[must_use = "and_then の戻り値が連鎖の結果そのものです"]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::Nothing => Option::Nothing,
        }
    }

    /// `Nothing` のときに代替の `Option` を計算する。
    #[inline]
    #[must_use = "or_else の戻り値を使わないと補った値も失われます"]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => f(),
        }
    }

    /// 述語を満たす値だけを残す。
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Option::Some(value)
                } else {
                    Option::Nothing
                }
            }
            Self::Nothing => Option::Nothing,
        }
    }

    /// `Some` なら `other` を、`Nothing` なら `Nothing` を返す。
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::Nothing => Option::Nothing,
        }
    }

    /// `Some` なら自身を、`Nothing` なら `other` を返す。
    #[inline]
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => other,
        }
    }

    /// 値を覗き見る。自身はそのまま返す。
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        match &self {
            Self::Some(value) => f(value),
            Self::Nothing => {}
        }
        self
    }

    /// バリアントごとの関数を適用して単一の値を得る。
    #[inline]
    pub fn match_with<U, S, N>(self, some: S, nothing: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some(value),
            Self::Nothing => nothing(),
        }
    }

    /// 借用した `Option` を得る。
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }

    /// 値への参照を 0 または 1 要素で列挙する。
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Some(value) => Iter::new(StdOption::Some(value)),
            Self::Nothing => Iter::new(StdOption::None),
        }
    }

    /// 標準ライブラリの `Option` へ変換する。
    #[inline]
    pub fn into_std(self) -> StdOption<T> {
        match self {
            Self::Some(value) => StdOption::Some(value),
            Self::Nothing => StdOption::None,
        }
    }
}

impl<T> Default for Option<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_std())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    #[inline]
    fn from(value: StdOption<T>) -> Self {
        as_option(value)
    }
}

impl<T: Display> Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({value})"),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

/// 不在センチネル (`None`) を `Nothing` に、それ以外を `Some` に変換する。
#[inline]
pub fn as_option<T>(value: StdOption<T>) -> Option<T> {
    match value {
        StdOption::Some(value) => Option::Some(value),
        StdOption::None => Option::Nothing,
    }
}

/// 値を必ず `Some` に包む。`Nothing` を返すことはない。
///
/// この呼び出し位置での不在はプログラムの誤りとみなす。
///
/// # Panics
///
/// `value` が `None` の場合は [`InvalidArgument`] のメッセージで panic する。
#[inline]
#[track_caller]
pub fn some<T>(value: StdOption<T>) -> Option<T> {
    match value {
        StdOption::Some(value) => Option::Some(value),
        StdOption::None => raise(InvalidArgument::absent_payload()),
    }
}

/// [`some`] の panic しない版。
#[inline]
pub fn try_some<T>(value: StdOption<T>) -> StdResult<Option<T>, InvalidArgument> {
    match value {
        StdOption::Some(value) => StdResult::Ok(Option::Some(value)),
        StdOption::None => StdResult::Err(InvalidArgument::absent_payload()),
    }
}
