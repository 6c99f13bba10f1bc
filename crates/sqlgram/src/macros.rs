//! Variadic front-ends for the builders.

/// Start a SELECT from heterogeneous items.
///
/// Each item may be anything that converts into an
/// [`Operand`](crate::coerce::Operand): tables, columns, aggregates, string
/// functions, nested selections or plain literals.
///
/// # Example
///
/// ```ignore
/// let q = sqlgram::select![articles.c("id").unwrap(), count![].alias("n")]
///     .group_by([articles.c("id").unwrap()]);
/// ```
#[macro_export]
macro_rules! select {
    ($($item:expr),* $(,)?) => {
        $crate::stmt::select(::std::vec![$($crate::coerce::Operand::from($item)),*])
    };
}

/// `COUNT(*)` with no arguments, `COUNT(x)` with one.
///
/// More than one argument aborts with a `TooManyArguments` diagnostic.
#[macro_export]
macro_rules! count {
    () => {
        $crate::expr::count_star()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::expr::count_of(::std::vec![$($crate::coerce::Operand::from($arg)),+])
    };
}

/// Build a column/value list for `insert` and `update`.
///
/// # Example
///
/// ```ignore
/// let stmt = sqlgram::insert(&users, sqlgram::values! { "id" => 1, "name" => "alice" })?;
/// ```
#[macro_export]
macro_rules! values {
    ($($column:expr => $value:expr),* $(,)?) => {
        ::std::vec![$(
            (
                ::std::string::String::from($column),
                $crate::coerce::Operand::from($value),
            )
        ),*]
    };
}
