//! Route templates of web services.

use mirage_core::strip_suffix_ignore_case;

/// The route prefix of a controller, with `[controller]` expanded and slashes trimmed.
pub fn route_prefix(template: Option<&str>, controller: &str) -> String {
    template
        .map(|t| {
            t.replace("[controller]", controller_token(controller))
                .trim_matches('/')
                .to_string()
        })
        .unwrap_or_default()
}

/// The URL template literal body of an action.
///
/// Route parameters become `${name}` placeholders; constraints (`{id:int}`),
/// optional markers (`{id?}`), defaults (`{page=1}`) and catch-alls
/// (`{*path}`) are dropped. A route starting with `/` or `~/` ignores the
/// controller prefix.
pub fn action_url(prefix: &str, route: &str, controller: &str, action: &str) -> String {
    let expanded = route
        .replace("[controller]", controller_token(controller))
        .replace("[action]", action);
    let placeholders = to_placeholders(&expanded);

    if let Some(absolute) = placeholders
        .strip_prefix("~/")
        .or_else(|| placeholders.strip_prefix('/'))
    {
        return absolute.to_string();
    }
    if prefix.is_empty() {
        placeholders
    } else if placeholders.is_empty() {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix, placeholders)
    }
}

fn controller_token(controller: &str) -> &str {
    strip_suffix_ignore_case(controller, "Controller")
}

fn to_placeholders(route: &str) -> String {
    let mut out = String::with_capacity(route.len() + 8);
    let mut chars = route.chars();
    while let Some(c) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }
        let inner: String = chars.by_ref().take_while(|&c| c != '}').collect();
        let name = inner
            .trim_start_matches('*')
            .split([':', '='])
            .next()
            .unwrap_or_default()
            .trim_end_matches('?');
        out.push_str("${");
        out.push_str(name);
        out.push('}');
    }
    out
}
