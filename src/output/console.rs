// src/output/console.rs
// =============================================================================
// Human-readable output, one line per result:
//
//   https://example.com: Status=200, ResponseTime=152.3ms, Keyword=Found
//   https://example.com/missing: Status=404, ResponseTime=98ms
//   ftp://host: Error - URL must use http or https scheme
//
// ", Keyword=NotFound" is only printed for a status of exactly 200 (even when
// no keyword was asked for); other statuses just leave the keyword part off.
// =============================================================================

use crate::checker::CheckResult;

// Prints every result in order
pub fn print_results(results: &[CheckResult]) {
    for result in results {
        println!("{}", format_result(result));
    }
}

fn format_result(result: &CheckResult) -> String {
    if let Some(error) = &result.error {
        return format!("{}: Error - {}", result.url, error);
    }

    let mut line = format!(
        "{}: Status={}, ResponseTime={:?}",
        result.url, result.status_code, result.response_time
    );
    if result.keyword_found {
        line.push_str(", Keyword=Found");
    } else if result.status_code == 200 {
        line.push_str(", Keyword=NotFound");
    }
    line
}
