//! DDL file name composition.
//!
//! `<YYYYMMDD>_<sort>_<ticket>_<when>_<explanation>.sql`

use chrono::NaiveDate;

/// Token separator.
pub const DELIMITER: &str = "_";

/// File suffix, including the dot.
pub const SUFFIX: &str = ".sql";

/// Date format of the leading token.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Compose a DDL file name from its tokens.
///
/// Tokens are used verbatim; callers validate them beforehand.
pub fn compose(
    date: NaiveDate,
    sort_number: &str,
    ticket_number: &str,
    when: &str,
    explanation: &str,
) -> String {
    let date = date.format(DATE_FORMAT).to_string();
    let tokens = [date.as_str(), sort_number, ticket_number, when, explanation];
    format!("{}{}", tokens.join(DELIMITER), SUFFIX)
}
