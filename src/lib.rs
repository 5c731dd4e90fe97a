//! `Result` / `Option` の 2 つの和型と、そのコンビネータ群。
//!
//! 失敗しうる値や欠けうる値を、例外やヌル参照を使わずに表現する。
//!
//! ## モジュール
//!
//! - `result`: `Ok` / `Err` の 2 バリアントを持つ [`Result`]。
//! - `option`: `Some` / `Nothing` の 2 バリアントを持つ [`Option`] と、
//!   構築ヘルパ [`as_option`] / [`some`] / [`try_some`]。
//! - `error`: 失敗シグナル [`UnwrapError`] / [`AccessError`] / [`InvalidArgument`]。
//! - `iter`: 0 または 1 要素のイテレータ [`IntoIter`] / [`Iter`]。
//!
//! ## 失敗の扱い
//!
//! `Err` と `Nothing` は通常の戻り値であり、送出されるものではない。
//! `unwrap` 系アクセサを「値を持たない側」で呼んだときだけ、シグナルの
//! メッセージで panic する。各アクセサには型付きのシグナルを値として返す
//! `try_` 版があり、失敗の種類はそちらで判別する。
//!
//! ## 名前の衝突
//!
//! クレートルートの `Ok` / `Err` / `Some` / `Result` / `Option` を `use` すると、
//! そのスコープでは標準ライブラリのプレリュードが隠れる。`None` はこの
//! クレートに存在しないので標準のままになる。プレリュードの名前を参照する
//! マクロ（`insta::assert_snapshot!` など）と同じスコープで使う場合は、
//! `use adt_prelude as adt;` のように別名で取り込む。
//!
//! ```
//! use adt_prelude::{Err, Ok, Result};
//!
//! let halved: Result<i32, &str> = Ok(100)
//!     .map(|x| x / 2)
//!     .and_then(|x| if x > 10 { Ok(x - 10) } else { Err("too small") })
//!     .map(|x| x * 2);
//! assert_eq!(halved, Ok(80));
//! ```
//!
//! ```
//! use adt_prelude::{as_option, Nothing, Some};
//!
//! assert_eq!(as_option(None::<i32>), Nothing);
//! assert_eq!(as_option(std::option::Option::Some(0)), Some(0));
//! ```

pub mod error;
pub mod iter;
pub mod option;
pub mod result;

pub use error::{AccessError, InvalidArgument, UnwrapError};
pub use iter::{IntoIter, Iter};
pub use option::Option::{self, Nothing, Some};
pub use option::{as_option, some, try_some};
pub use result::Result::{self, Err, Ok};
