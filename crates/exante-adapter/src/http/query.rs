/*
[INPUT]:  A URL and a slice of optional query parameters
[OUTPUT]: The URL with every present parameter written to its query string
[POS]:    HTTP layer - query-string encoding for endpoint glue
[UPDATE]: When parameter encoding rules change
*/

use url::Url;

/// Write optional query parameters onto a URL in place
///
/// Parameters are appended in slice order; `None` values are skipped
/// entirely and never written as empty.
pub fn set_query(url: &mut Url, params: &[(&str, Option<String>)]) {
    if params.iter().all(|(_, value)| value.is_none()) {
        return;
    }

    let mut pairs = url.query_pairs_mut();
    for (key, value) in params {
        if let Some(value) = value {
            pairs.append_pair(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_values_written_in_order() {
        let mut url = Url::parse("https://api-live.exante.eu/md/2.0/ohlc/EUR-USD/60").unwrap();
        set_query(
            &mut url,
            &[
                ("from", Some("1700000000".to_string())),
                ("to", Some("1700003600".to_string())),
                ("size", Some("60".to_string())),
            ],
        );
        assert_eq!(url.query(), Some("from=1700000000&to=1700003600&size=60"));
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let mut url = Url::parse("https://api-live.exante.eu/md/2.0/ohlc/EUR-USD/60").unwrap();
        set_query(
            &mut url,
            &[
                ("from", None),
                ("size", Some("60".to_string())),
                ("to", None),
            ],
        );
        assert_eq!(url.query(), Some("size=60"));
    }

    #[test]
    fn test_all_absent_leaves_url_untouched() {
        let mut url = Url::parse("https://api-live.exante.eu/md/2.0/accounts").unwrap();
        set_query(&mut url, &[("from", None), ("to", None)]);
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://api-live.exante.eu/md/2.0/accounts");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut url = Url::parse("https://api-live.exante.eu/md/2.0/types").unwrap();
        set_query(&mut url, &[("symbolId", Some("AAPL.NASDAQ/ X".to_string()))]);
        assert_eq!(url.query(), Some("symbolId=AAPL.NASDAQ%2F+X"));
    }
}
