//! Client-side routes, resolved from `window.location`.
//!
//! Every page is served by the backend's `index.html` fallback, so links are
//! plain `<a href>` navigations and the route is parsed once at start-up.

use common::requests::ListHotelsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List { page: u32 },
    Detail(i64),
    New,
    Edit(i64),
    NotFound,
}

impl Route {
    /// Parses a location `pathname` and its `search` string (with or without the leading `?`).
    pub fn parse(path: &str, search: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::List {
                page: page_from_search(search),
            },
            ["hotel", "new"] => Route::New,
            ["hotel", id] => id.parse().map_or(Route::NotFound, Route::Detail),
            ["hotel", id, "edit"] => id.parse().map_or(Route::NotFound, Route::Edit),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::List { page } if *page <= 1 => "/".to_string(),
            Route::List { page } => format!("/?page={}", page),
            Route::Detail(id) => format!("/hotel/{}", id),
            Route::New => "/hotel/new".to_string(),
            Route::Edit(id) => format!("/hotel/{}/edit", id),
            Route::NotFound => "/".to_string(),
        }
    }
}

fn page_from_search(search: &str) -> u32 {
    let page = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse().ok());
    ListHotelsQuery { page }.page()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/", ""), Route::List { page: 1 });
        assert_eq!(Route::parse("/", "?page=3"), Route::List { page: 3 });
        assert_eq!(Route::parse("", "foo=bar&page=2"), Route::List { page: 2 });
        assert_eq!(Route::parse("/hotel/new", ""), Route::New);
        assert_eq!(Route::parse("/hotel/42", ""), Route::Detail(42));
        assert_eq!(Route::parse("/hotel/42/", ""), Route::Detail(42));
        assert_eq!(Route::parse("/hotel/42/edit", ""), Route::Edit(42));
    }

    #[test]
    fn bad_paths_and_pages() {
        assert_eq!(Route::parse("/hotel/abc", ""), Route::NotFound);
        assert_eq!(Route::parse("/hotels", ""), Route::NotFound);
        assert_eq!(Route::parse("/hotel/1/pictures", ""), Route::NotFound);
        assert_eq!(Route::parse("/", "?page=-2"), Route::List { page: 1 });
        assert_eq!(Route::parse("/", "?page=many"), Route::List { page: 1 });
    }

    #[test]
    fn hrefs_parse_back() {
        for route in [
            Route::List { page: 1 },
            Route::List { page: 4 },
            Route::Detail(7),
            Route::New,
            Route::Edit(7),
        ] {
            let href = route.href();
            let (path, search) = href.split_once('?').unwrap_or((&href, ""));
            assert_eq!(Route::parse(path, search), route);
        }
    }
}
