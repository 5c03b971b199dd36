//! # Identity Value Objects
//!
//! エンティティ識別子とパスワードのバリューオブジェクト

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// 種別ごとの識別子型を定義する
///
/// UUID v4 を内部に持ち、JSON上はハイフン区切りの文字列として表現される。
/// 種別ごとに別の型とすることで、教師IDと科目IDの取り違えをコンパイル時に防ぐ。
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// 新しい識別子を割り当てる
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// 内部のUUIDを返す
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// 受講者ID
    StudentId
);
entity_id!(
    /// 教師ID
    TeacherId
);
entity_id!(
    /// 科目ID
    SubjectId
);

/// 重複のないID列としてデシリアライズする
///
/// 同じIDが二度現れる保存内容は形式エラーとして拒否する。
pub(crate) fn deserialize_unique_ids<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Eq + Hash + fmt::Display,
{
    let ids = Vec::<T>::deserialize(deserializer)?;

    let mut seen = HashSet::with_capacity(ids.len());
    for id in &ids {
        if !seen.insert(id) {
            return Err(de::Error::custom(format!("duplicate id {}", id)));
        }
    }

    Ok(ids)
}

/// パスワード
///
/// 中身は不透明な文字列として扱う（ハッシュ化は呼び出し側の責務）。
/// `Debug` では値を伏せるため、ログに混入しない。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// 平文との一致を確認
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// 永続化・認証処理向けに生の値を返す
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
