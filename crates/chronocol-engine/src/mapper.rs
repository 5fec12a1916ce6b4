use chrono::NaiveDateTime;
use chronocol_columnar::packed::datetime as packed_datetime;
use chronocol_columnar::{
    AppendColumn, DateColumn, NumberColumn, StringColumn, TemporalColumn, TimeColumn,
};

use crate::difference;
use crate::error::{TemporalError, TemporalResult};
use crate::options::DeriveOptions;
use crate::unit::TemporalUnit;
use crate::window;

/// Row-wise driver: apply `transform` to every non-missing packed value of `source`.
///
/// Missing source rows become missing output rows and never reach `transform`. The output has
/// the same size and row alignment as the source.
pub fn map_column<C, O, F>(source: &C, name: String, mut transform: F) -> O
where
    C: TemporalColumn + ?Sized,
    O: AppendColumn,
    F: FnMut(i64) -> O::Value,
{
    let rows = source.size();
    log::trace!("deriving `{name}` from `{}` ({rows} rows)", source.name());
    let mut output = O::allocate(name, rows);
    for row in 0..rows {
        let packed = source.packed_value(row);
        if packed_datetime::is_missing(packed) {
            output.append_missing();
        } else {
            output.append_value(transform(packed));
        }
    }
    output
}

/// Fallible form of [`map_column`]; the first error aborts the whole column.
pub fn try_map_column<C, O, F>(source: &C, name: String, mut transform: F) -> TemporalResult<O>
where
    C: TemporalColumn + ?Sized,
    O: AppendColumn,
    F: FnMut(i64) -> TemporalResult<O::Value>,
{
    let rows = source.size();
    log::trace!("deriving `{name}` from `{}` ({rows} rows)", source.name());
    let mut output = O::allocate(name, rows);
    for row in 0..rows {
        let packed = source.packed_value(row);
        if packed_datetime::is_missing(packed) {
            output.append_missing();
        } else {
            output.append_value(transform(packed)?);
        }
    }
    Ok(output)
}

/// Two-column driver: a row is missing when either input row is missing.
///
/// Both columns must have the same number of rows.
pub fn try_map_pairs<L, R, O, F>(
    left: &L,
    right: &R,
    name: String,
    mut transform: F,
) -> TemporalResult<O>
where
    L: TemporalColumn + ?Sized,
    R: TemporalColumn + ?Sized,
    O: AppendColumn,
    F: FnMut(i64, i64) -> TemporalResult<O::Value>,
{
    if left.size() != right.size() {
        return Err(TemporalError::LengthMismatch {
            left: left.size(),
            right: right.size(),
        });
    }
    let rows = left.size();
    log::trace!(
        "deriving `{name}` from `{}` and `{}` ({rows} rows)",
        left.name(),
        right.name()
    );
    let mut output = O::allocate(name, rows);
    for row in 0..rows {
        let a = left.packed_value(row);
        let b = right.packed_value(row);
        if packed_datetime::is_missing(a) || packed_datetime::is_missing(b) {
            output.append_missing();
        } else {
            output.append_value(transform(a, b)?);
        }
    }
    Ok(output)
}

/// Derived-column operations for any [`TemporalColumn`].
pub trait DateTimeMapFunctions: TemporalColumn {
    fn derive(&self) -> DateTimeMapper<'_, Self> {
        DateTimeMapper::new(self)
    }

    fn derive_with(&self, options: DeriveOptions) -> DateTimeMapper<'_, Self> {
        DateTimeMapper::with_options(self, options)
    }
}

impl<C: TemporalColumn + ?Sized> DateTimeMapFunctions for C {}

/// Builds new columns from a borrowed source column.
///
/// The source is only read. Each call allocates and returns a fresh column owned by the caller.
pub struct DateTimeMapper<'a, C: ?Sized> {
    source: &'a C,
    options: DeriveOptions,
}

impl<'a, C: TemporalColumn + ?Sized> DateTimeMapper<'a, C> {
    pub fn new(source: &'a C) -> Self {
        Self::with_options(source, DeriveOptions::default())
    }

    pub fn with_options(source: &'a C, options: DeriveOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &'a C {
        self.source
    }

    pub fn options(&self) -> DeriveOptions {
        self.options
    }

    fn name(&self) -> &str {
        self.source.name()
    }

    fn integer_column(&self, name: String, extract: impl Fn(i64) -> f64) -> NumberColumn {
        let mut column: NumberColumn = map_column(self.source, name, extract);
        column.set_print_formatter(self.options.integer_formatter);
        column
    }

    fn text_column(&self, name: String, render: impl Fn(i64) -> String) -> StringColumn {
        map_column(self.source, name, render)
    }

    /// Time-of-day portion of every value.
    pub fn time(&self) -> TimeColumn {
        map_column(
            self.source,
            format!("{} time", self.name()),
            packed_datetime::time,
        )
    }

    /// Date portion of every value.
    pub fn date(&self) -> DateColumn {
        map_column(
            self.source,
            format!("{} date", self.name()),
            packed_datetime::date,
        )
    }

    pub fn hour(&self) -> NumberColumn {
        self.integer_column(format!("{}[hour]", self.name()), |p| {
            f64::from(packed_datetime::hour(p))
        })
    }

    pub fn minute(&self) -> NumberColumn {
        self.integer_column(format!("{}[minute]", self.name()), |p| {
            f64::from(packed_datetime::minute(p))
        })
    }

    pub fn second(&self) -> NumberColumn {
        self.integer_column(format!("{}[second]", self.name()), |p| {
            f64::from(packed_datetime::second(p))
        })
    }

    pub fn minute_of_day(&self) -> NumberColumn {
        self.integer_column(format!("{}[minute-of-day]", self.name()), |p| {
            f64::from(packed_datetime::minute_of_day(p))
        })
    }

    pub fn second_of_day(&self) -> NumberColumn {
        self.integer_column(format!("{}[second-of-day]", self.name()), |p| {
            f64::from(packed_datetime::second_of_day(p))
        })
    }

    pub fn year(&self) -> NumberColumn {
        self.integer_column(format!("{} year", self.name()), |p| {
            f64::from(packed_datetime::year(p))
        })
    }

    pub fn quarter(&self) -> NumberColumn {
        self.integer_column(format!("{} quarter", self.name()), |p| {
            f64::from(packed_datetime::quarter(p))
        })
    }

    /// Month number, 1 = January.
    pub fn month_value(&self) -> NumberColumn {
        self.integer_column(format!("{} month", self.name()), |p| {
            f64::from(packed_datetime::month_value(p))
        })
    }

    pub fn day_of_month(&self) -> NumberColumn {
        self.integer_column(format!("{} day of month", self.name()), |p| {
            f64::from(packed_datetime::day_of_month(p))
        })
    }

    pub fn day_of_year(&self) -> NumberColumn {
        self.integer_column(format!("{} day of year", self.name()), |p| {
            f64::from(packed_datetime::day_of_year(p))
        })
    }

    /// 1 = Monday .. 7 = Sunday.
    pub fn day_of_week_value(&self) -> NumberColumn {
        self.integer_column(format!("{} day of week", self.name()), |p| {
            f64::from(packed_datetime::day_of_week_value(p))
        })
    }

    pub fn week_of_year(&self) -> NumberColumn {
        let weeks = self.options.week_definition;
        self.integer_column(format!("{} week of year", self.name()), move |p| {
            f64::from(packed_datetime::week_of_year(p, weeks))
        })
    }

    /// Upper-case English month names.
    pub fn month(&self) -> StringColumn {
        self.text_column(format!("{} month", self.name()), |p| {
            packed_datetime::month_name(p).to_string()
        })
    }

    /// Upper-case English day names.
    pub fn day_of_week(&self) -> StringColumn {
        self.text_column(format!("{} day of week", self.name()), |p| {
            packed_datetime::day_of_week_name(p).to_string()
        })
    }

    // The grouping labels below pad every field (the year to four digits) so that sorting the
    // strings sorts the underlying instants.

    /// `"2020-03"` style labels.
    pub fn year_month(&self) -> StringColumn {
        self.text_column(format!("{} year & month", self.name()), |p| {
            format!(
                "{:04}-{:02}",
                packed_datetime::year(p),
                packed_datetime::month_value(p)
            )
        })
    }

    /// `"2020-1"` style labels.
    pub fn year_quarter(&self) -> StringColumn {
        self.text_column(format!("{} year & quarter", self.name()), |p| {
            format!(
                "{:04}-{}",
                packed_datetime::year(p),
                packed_datetime::quarter(p)
            )
        })
    }

    /// `"2020-010"` style labels.
    pub fn year_day(&self) -> StringColumn {
        self.text_column(format!("{} year & day", self.name()), |p| {
            format!(
                "{:04}-{:03}",
                packed_datetime::year(p),
                packed_datetime::day_of_year(p)
            )
        })
    }

    /// `"2020-07"` style labels, numbered with the configured week definition.
    pub fn year_week(&self) -> StringColumn {
        let weeks = self.options.week_definition;
        self.text_column(format!("{} year & week", self.name()), move |p| {
            format!(
                "{:04}-{:02}",
                packed_datetime::year(p),
                packed_datetime::week_of_year(p, weeks)
            )
        })
    }

    /// `"09:05"` style labels.
    pub fn hour_minute(&self) -> StringColumn {
        self.text_column(format!("{} hour & minute", self.name()), |p| {
            format!(
                "{:02}:{:02}",
                packed_datetime::hour(p),
                packed_datetime::minute(p)
            )
        })
    }

    /// Whole `unit`s from each value of this column to the matching value of `other`.
    ///
    /// Positive where `other` is later. Fails with [`TemporalError::LengthMismatch`] when the
    /// columns differ in size.
    pub fn difference<O>(&self, other: &O, unit: TemporalUnit) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        let name = format!("{} - {}", self.name(), other.name());
        let mut column: NumberColumn = try_map_pairs(self.source, other, name, |a, b| {
            Ok(difference::packed_between(unit, a, b)? as f64)
        })?;
        column.set_print_formatter(self.options.integer_formatter);
        Ok(column)
    }

    pub fn difference_in_milliseconds<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Millis)
    }

    pub fn difference_in_seconds<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Seconds)
    }

    pub fn difference_in_minutes<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Minutes)
    }

    pub fn difference_in_hours<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Hours)
    }

    pub fn difference_in_days<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Days)
    }

    pub fn difference_in_weeks<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Weeks)
    }

    pub fn difference_in_months<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Months)
    }

    pub fn difference_in_years<O>(&self, other: &O) -> TemporalResult<NumberColumn>
    where
        O: TemporalColumn + ?Sized,
    {
        self.difference(other, TemporalUnit::Years)
    }

    /// Assign every row to a zero-based window of `n` `unit`s counted from `start`.
    ///
    /// Window 0 holds `start` and the following `n - 1` units; rows before `start` get negative
    /// indices. Only days, weeks, months and years are supported.
    pub fn time_window(
        &self,
        unit: TemporalUnit,
        n: i64,
        start: NaiveDateTime,
    ) -> TemporalResult<NumberColumn> {
        window::validate(unit, n)?;
        let start = packed_datetime::pack(start)?;
        self.window_column(unit, n, Some(start))
    }

    /// [`Self::time_window`] starting at the earliest non-missing value of the column.
    ///
    /// A column without any value produces a column of missing rows.
    pub fn time_window_from_min(&self, unit: TemporalUnit, n: i64) -> TemporalResult<NumberColumn> {
        window::validate(unit, n)?;
        let start = (0..self.source.size())
            .map(|row| self.source.packed_value(row))
            .filter(|&packed| !packed_datetime::is_missing(packed))
            .min();
        match start {
            Some(start) => log::debug!(
                "time window over `{}` starts at packed value {start:#x}",
                self.name()
            ),
            None => log::debug!(
                "time window over `{}` has no non-missing values; every row is missing",
                self.name()
            ),
        }
        self.window_column(unit, n, start)
    }

    fn window_column(
        &self,
        unit: TemporalUnit,
        n: i64,
        start: Option<i64>,
    ) -> TemporalResult<NumberColumn> {
        let name = format!("{n} {unit} window [{}]", self.name());
        let mut column: NumberColumn = match start {
            Some(start) => try_map_column(self.source, name, |packed| {
                Ok(window::bucket(unit, n, start, packed)? as f64)
            })?,
            None => map_column(self.source, name, |_| NumberColumn::MISSING_VALUE),
        };
        column.set_print_formatter(self.options.integer_formatter);
        Ok(column)
    }
}

impl<'a, C: TemporalColumn> DateTimeMapper<'a, C> {
    /// The source shifted down by `n` rows, named `"<name> lag(<n>)"`.
    pub fn lag(&self, n: isize) -> C {
        self.source.lag(n)
    }

    /// The source shifted up by `n` rows, named `"<name> lead(<n>)"`.
    pub fn lead(&self, n: isize) -> C {
        let mut column = self.source.lag(n.saturating_neg());
        column.set_name(format!("{} lead({n})", self.name()));
        column
    }
}
