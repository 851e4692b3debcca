//! Extension traits for calling the localizer from values
//!
//! ```rust
//! use phrasebook_i18n::{Culture, Localizer, OrdinalExt, YesNoExt};
//!
//! # fn example() -> Result<(), phrasebook_i18n::I18nError> {
//! let localizer = Localizer::builder().default_culture(Culture::english()).build()?;
//! assert_eq!(22.to_ordinal(&localizer, None)?, "22nd");
//! assert_eq!(true.to_yes_no(&localizer, None)?, "Yes");
//! # Ok(())
//! # }
//! ```

use crate::culture::Culture;
use crate::error::{I18nError, I18nResult};
use crate::localizer::Localizer;
use crate::noun::CountNoun;
use chrono::{DateTime, TimeZone};

pub trait YesNoExt {
    fn to_yes_no(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String>;
}

impl YesNoExt for bool {
    fn to_yes_no(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String> {
        localizer.yes_no(*self, culture)
    }
}

impl YesNoExt for Option<bool> {
    fn to_yes_no(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String> {
        localizer.yes_no_opt(*self, culture)
    }
}

pub trait OrdinalExt {
    fn to_ordinal(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String>;
}

pub trait LocalizedCountExt {
    fn to_localized_count(
        &self,
        localizer: &Localizer,
        noun: CountNoun,
        culture: Option<&Culture>,
    ) -> I18nResult<String>;
}

macro_rules! impl_integer_ext {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OrdinalExt for $ty {
                fn to_ordinal(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String> {
                    localizer.ordinal(to_i64(*self)?, culture)
                }
            }

            impl LocalizedCountExt for $ty {
                fn to_localized_count(
                    &self,
                    localizer: &Localizer,
                    noun: CountNoun,
                    culture: Option<&Culture>,
                ) -> I18nResult<String> {
                    localizer.to_localized_count(to_i64(*self)?, noun, culture)
                }
            }
        )*
    };
}

impl_integer_ext!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn to_i64<T>(value: T) -> I18nResult<i64>
where
    T: TryInto<i64> + Copy + std::fmt::Display,
{
    value
        .try_into()
        .map_err(|_| I18nError::InvalidArgument(format!("{value} does not fit in a 64-bit count")))
}

pub trait RelativeTimeExt {
    /// See [`Localizer::time_ago`]; measured from now
    fn time_ago(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String>;

    /// See [`Localizer::time_until`]; measured from now
    fn time_until(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String>;
}

impl<Tz: TimeZone> RelativeTimeExt for DateTime<Tz> {
    fn time_ago(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String> {
        localizer.time_ago(self, culture, None)
    }

    fn time_until(&self, localizer: &Localizer, culture: Option<&Culture>) -> I18nResult<String> {
        localizer.time_until(self, culture, None)
    }
}
