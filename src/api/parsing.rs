use serde_json::Value;

/// HTTP method from a v2 (`requestContext.http.method`) or v1 (`httpMethod`) event.
#[must_use]
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
}

#[must_use]
pub fn is_preflight(payload: &Value) -> bool {
    request_method(payload).eq_ignore_ascii_case("OPTIONS")
}

/// Looks up a query parameter, preferring the gateway's decoded map over
/// `rawQueryString`.
#[must_use]
pub fn query_param(payload: &Value, name: &str) -> Option<String> {
    if let Some(v) = v_str(payload, &["queryStringParameters", name]) {
        return Some(v.to_string());
    }

    let raw = v_str(payload, &["rawQueryString"])?;
    raw.split('&').find_map(|pair| {
        let (key, val) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(key) == name).then(|| decode_component(val))
    })
}

/// Debug mode is requested with `format=json` (case-insensitive).
#[must_use]
pub fn wants_json(payload: &Value) -> bool {
    query_param(payload, "format").is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}
