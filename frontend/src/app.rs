use common::i18n::{resolve_route, Locale, Page, RouteResolution};
use yew::{html, Component, Context, ContextProvider, Html};

use crate::helpers::{browser_languages, current_path, replace_location};
use crate::pages::admin::AdminPage;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::recruit::RecruitPage;
use crate::pages::showcase::ShowcasePage;
use crate::theme::Theme;

/// Root component: resolves the current URL once and renders the matching page
/// inside the theme provider.
///
/// Locale-less paths are redirected to the browser's preferred locale before
/// anything renders.
pub struct App {
    route: RouteResolution,
    theme: Theme,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let detected = Locale::negotiate(&browser_languages());
        let route = resolve_route(&current_path(), detected);
        if let RouteResolution::Redirect(target) = &route {
            replace_location(target);
        }
        Self {
            route,
            theme: Theme::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match &self.route {
            RouteResolution::Render { locale, page } => {
                let locale = locale.unwrap_or_default();
                match page {
                    Page::Home => html! { <LandingPage locale={locale} /> },
                    Page::Recruit => html! { <RecruitPage locale={locale} /> },
                    Page::Admin => html! { <AdminPage /> },
                    Page::Showcase => html! { <ShowcasePage /> },
                    Page::NotFound => html! { <NotFoundPage locale={locale} /> },
                }
            }
            RouteResolution::Redirect(_) | RouteResolution::Passthrough => Html::default(),
        };

        html! {
            <ContextProvider<Theme> context={self.theme}>
                <main style={format!("min-height: 100vh; background: {}; font-family: {};", self.theme.colors.background, self.theme.font_family)}>
                    { page }
                </main>
            </ContextProvider<Theme>>
        }
    }
}
