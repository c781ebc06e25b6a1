use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_plurals::PluralCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A CLDR plural category.
///
/// Which category applies to a given number is decided by the caller (for
/// example with ICU4X `PluralRules`); this crate only selects the message
/// variant registered under the category it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralForm {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralForm {
    /// All six categories in CLDR order.
    pub const ALL: [PluralForm; 6] = [
        PluralForm::Zero,
        PluralForm::One,
        PluralForm::Two,
        PluralForm::Few,
        PluralForm::Many,
        PluralForm::Other,
    ];

    /// The lowercase CLDR keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralForm::Zero => "zero",
            PluralForm::One => "one",
            PluralForm::Two => "two",
            PluralForm::Few => "few",
            PluralForm::Many => "many",
            PluralForm::Other => "other",
        }
    }

    /// Position of this category within [`PluralForm::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            PluralForm::Zero => 0,
            PluralForm::One => 1,
            PluralForm::Two => 2,
            PluralForm::Few => 3,
            PluralForm::Many => 4,
            PluralForm::Other => 5,
        }
    }
}

impl Display for PluralForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A keyword that does not name a CLDR plural category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plural form '{keyword}', expected one of: zero, one, two, few, many, other")]
pub struct UnknownPluralForm {
    pub keyword: String,
}

impl FromStr for PluralForm {
    type Err = UnknownPluralForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralForm::ALL
            .into_iter()
            .find(|form| form.as_str() == s)
            .ok_or_else(|| UnknownPluralForm {
                keyword: s.to_string(),
            })
    }
}

impl From<PluralCategory> for PluralForm {
    fn from(category: PluralCategory) -> Self {
        match category {
            PluralCategory::Zero => PluralForm::Zero,
            PluralCategory::One => PluralForm::One,
            PluralCategory::Two => PluralForm::Two,
            PluralCategory::Few => PluralForm::Few,
            PluralCategory::Many => PluralForm::Many,
            PluralCategory::Other => PluralForm::Other,
        }
    }
}
