//! Console rendering of search results

use std::io::{self, Write};

use crate::catalog::Book;

pub const RESULTS_HEADER: &str = "===== 検索結果 =====";
pub const KEYWORD_LABEL: &str = "キーワード: ";
pub const NO_MATCHES: &str = "検索条件に一致する書籍が見つかりませんでした。";

/// Horizontal rule around the result rows (60 dashes)
pub const RULE: &str = "------------------------------------------------------------";

/// Write a results block for `books`
///
/// The keyword is echoed only when it is non-empty, exactly as entered.
pub fn write_results<W: Write>(out: &mut W, books: &[&Book], keyword: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RESULTS_HEADER}")?;

    if !keyword.is_empty() {
        writeln!(out, "{KEYWORD_LABEL}{keyword}")?;
    }

    if books.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
        return Ok(());
    }

    writeln!(out, "合計: {}件", books.len())?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    for book in books {
        writeln!(out, "{book}")?;
    }
    writeln!(out, "{RULE}")?;

    Ok(())
}
