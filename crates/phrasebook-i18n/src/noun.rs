//! Countable noun categories and their grammatical gender
//!
//! Gender only matters for Hebrew zero-count phrases, where "no item found"
//! and "no error found" agree with the noun.

use crate::error::I18nError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical gender of a noun category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrammaticalGender {
    /// Masculine gender
    Masculine,
    /// Feminine gender
    Feminine,
    /// Neuter gender
    Neuter,
}

impl GrammaticalGender {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
        }
    }

    /// Suffix of the gender-specific zero key, if this gender has one
    pub fn zero_key_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Masculine => Some("Masc"),
            Self::Feminine => Some("Fem"),
            Self::Neuter => None,
        }
    }
}

/// Noun used when localizing a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountNoun {
    /// item, elemento, élément, Element, элемент, פריט, 项目, 項目, 항목
    Item,
    /// result, resultado, résultat, Ergebnis, результат, תוצאה, 结果, 結果, 결과
    Result,
    /// file, archivo, fichier, arquivo, Datei, файл, קובץ, 文件, ファイル, 파일
    File,
    /// user, usuario, utilisateur, usuário, Benutzer, пользователь, משתמש, 用户, ユーザー, 사용자
    User,
    /// warning, advertencia, avertissement, aviso, Warnung, предупреждение, אזהרה, 警告, 경고
    Warning,
    /// error, erreur, erro, Fehler, ошибка, שגיאה, 错误, エラー, 오류
    Error,
    /// record, registro, enregistrement, Datensatz, запись, רשומה, 记录, レコード, 레코드
    Record,
    /// device, dispositivo, appareil, Gerät, устройство, התקן, 设备, デバイス, 장치
    Device,
}

impl CountNoun {
    /// Key fragment used in `Noun.<Noun>.<Form>` and friends
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Result => "Result",
            Self::File => "File",
            Self::User => "User",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Record => "Record",
            Self::Device => "Device",
        }
    }

    /// Hebrew grammatical gender of this noun
    pub fn gender(&self) -> GrammaticalGender {
        match self {
            Self::Item | Self::User | Self::File | Self::Device => GrammaticalGender::Masculine,
            Self::Result | Self::Error | Self::Warning | Self::Record => {
                GrammaticalGender::Feminine
            }
        }
    }

    /// Get all noun categories
    pub fn all() -> [Self; 8] {
        [
            Self::Item,
            Self::Result,
            Self::File,
            Self::User,
            Self::Warning,
            Self::Error,
            Self::Record,
            Self::Device,
        ]
    }
}

impl fmt::Display for CountNoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountNoun {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|noun| noun.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| I18nError::InvalidArgument(format!("unknown count noun '{s}'")))
    }
}
