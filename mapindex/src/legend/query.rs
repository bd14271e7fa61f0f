use itertools::Itertools;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in query keys and values. `/`, `:` and `,` stay readable, as WMS servers
/// expect them in values like `image/png` or `ns:roads,ns:rivers`.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'%')
	.add(b'&')
	.add(b'+')
	.add(b'<')
	.add(b'=')
	.add(b'>')
	.add(b'?')
	.add(b'`')
	.add(b'{')
	.add(b'}');

/// Encodes `params` as `key=value` pairs joined by `&`, keeping their order.
pub fn encode_query(params: &[(String, String)]) -> String {
	params
		.iter()
		.map(|(key, value)| {
			format!(
				"{}={}",
				utf8_percent_encode(key, QUERY_COMPONENT),
				utf8_percent_encode(value, QUERY_COMPONENT)
			)
		})
		.join("&")
}

/// Appends `query` to `base`, starting a query component with `?` unless `base` already has one.
/// No separator is added if `base` already ends with `?` or `&`.
pub fn append_query(base: &str, query: &str) -> String {
	let separator = if base.ends_with(['?', '&']) {
		""
	} else if base.contains('?') {
		"&"
	} else {
		"?"
	};
	format!("{base}{separator}{query}")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pairs(params: &[(&str, &str)]) -> Vec<(String, String)> {
		params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
	}

	#[test]
	fn encodes_in_order() {
		assert_eq!(
			encode_query(&pairs(&[("LAYER", "ns:roads"), ("FORMAT", "image/png")])),
			"LAYER=ns:roads&FORMAT=image/png"
		);
		assert_eq!(encode_query(&[]), "");
	}

	#[test]
	fn escapes_reserved_characters() {
		assert_eq!(
			encode_query(&pairs(&[("STYLE", "a b&c=d"), ("RULE", "100%"), ("LABEL", "Straße")])),
			"STYLE=a%20b%26c%3Dd&RULE=100%25&LABEL=Stra%C3%9Fe"
		);
	}

	#[test]
	fn separator() {
		assert_eq!(append_query("http://x/wms", "a=1"), "http://x/wms?a=1");
		assert_eq!(append_query("http://x/wms?map=y", "a=1"), "http://x/wms?map=y&a=1");
		assert_eq!(append_query("", "a=1"), "?a=1");
		assert_eq!(append_query("http://x/wms?", "a=1"), "http://x/wms?a=1");
		assert_eq!(append_query("http://x/wms?map=y&", "a=1"), "http://x/wms?map=y&a=1");
	}
}
