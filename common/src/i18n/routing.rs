//! Locale-prefixed routing.
//!
//! Every public page lives under `/{locale}`; unprefixed paths redirect to the
//! same path under the detected locale. The admin page and the API sit outside
//! the locale tree.

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Recruit,
    Admin,
    /// Component gallery for the shared UI building blocks.
    Showcase,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    /// Render `page`. `locale` is `None` for locale-free pages.
    Render { locale: Option<Locale>, page: Page },
    /// Navigate to the given path instead.
    Redirect(String),
    /// Not handled by the page router (API and static assets).
    Passthrough,
}

pub fn resolve_route(path: &str, detected: Locale) -> RouteResolution {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return RouteResolution::Redirect(localized_path(detected, Page::Home));
    }

    let mut segments = trimmed.split('/');
    let first = segments.next().unwrap_or_default();
    let rest: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();

    if let Some(locale) = Locale::from_code(first) {
        let page = match rest.as_slice() {
            [] => Page::Home,
            ["recruit"] => Page::Recruit,
            _ => Page::NotFound,
        };
        return RouteResolution::Render {
            locale: Some(locale),
            page,
        };
    }

    match (first, rest.as_slice()) {
        ("admin", []) => RouteResolution::Render {
            locale: None,
            page: Page::Admin,
        },
        ("components", []) => RouteResolution::Render {
            locale: None,
            page: Page::Showcase,
        },
        ("api", _) => RouteResolution::Passthrough,
        _ if first.contains('.') => RouteResolution::Passthrough,
        _ => RouteResolution::Redirect(format!("/{}/{}", detected.code(), trimmed)),
    }
}

pub fn localized_path(locale: Locale, page: Page) -> String {
    match page {
        Page::Home | Page::NotFound => format!("/{}", locale.code()),
        Page::Recruit => format!("/{}/recruit", locale.code()),
        Page::Admin => "/admin".to_string(),
        Page::Showcase => "/components".to_string(),
    }
}

/// Rewrites `path` so it points at the same page under `locale`.
pub fn switch_locale(path: &str, locale: Locale) -> String {
    let trimmed = path.trim_matches('/');
    let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));

    let rest = if Locale::from_code(first).is_some() {
        rest.to_string()
    } else {
        trimmed.to_string()
    };

    if rest.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(locale: Option<Locale>, page: Page) -> RouteResolution {
        RouteResolution::Render { locale, page }
    }

    #[test]
    fn root_redirects_to_detected_locale() {
        assert_eq!(
            resolve_route("/", Locale::Ko),
            RouteResolution::Redirect("/ko".into())
        );
        assert_eq!(
            resolve_route("", Locale::En),
            RouteResolution::Redirect("/en".into())
        );
    }

    #[test]
    fn prefixed_paths_render_pages() {
        assert_eq!(resolve_route("/ko", Locale::En), render(Some(Locale::Ko), Page::Home));
        assert_eq!(
            resolve_route("/en/recruit/", Locale::Ko),
            render(Some(Locale::En), Page::Recruit)
        );
        assert_eq!(
            resolve_route("/en/brewery", Locale::Ko),
            render(Some(Locale::En), Page::NotFound)
        );
    }

    #[test]
    fn unprefixed_paths_redirect_under_locale() {
        assert_eq!(
            resolve_route("/recruit", Locale::En),
            RouteResolution::Redirect("/en/recruit".into())
        );
    }

    #[test]
    fn admin_and_api_stay_outside_locale_tree() {
        assert_eq!(resolve_route("/admin", Locale::En), render(None, Page::Admin));
        assert_eq!(
            resolve_route("/components/", Locale::En),
            render(None, Page::Showcase)
        );
        assert_eq!(localized_path(Locale::En, Page::Showcase), "/components");
        assert_eq!(resolve_route("/api/recruit", Locale::Ko), RouteResolution::Passthrough);
        assert_eq!(resolve_route("/favicon.ico", Locale::Ko), RouteResolution::Passthrough);
    }

    #[test]
    fn switch_locale_keeps_the_page() {
        assert_eq!(switch_locale("/ko/recruit", Locale::En), "/en/recruit");
        assert_eq!(switch_locale("/en", Locale::Ko), "/ko");
        assert_eq!(switch_locale("/recruit", Locale::En), "/en/recruit");
        assert_eq!(switch_locale("/", Locale::En), "/en");
    }
}
