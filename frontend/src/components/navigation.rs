use common::i18n::{localized_path, switch_locale, Locale, Message, Page};
use yew::prelude::*;

use crate::helpers::{current_path, navigate};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub locale: Locale,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let locale = props.locale;
    let bar_style = format!(
        "position: sticky; top: 0; z-index: 100; display: flex; align-items: center; \
         justify-content: space-between; padding: {} {}; background: {}; border-bottom: 1px solid {};",
        theme.spacing.sm, theme.spacing.lg, theme.colors.background, theme.colors.border
    );
    let link_style = format!(
        "color: {}; text-decoration: none; margin-right: {};",
        theme.colors.text_secondary, theme.spacing.md
    );

    html! {
        <nav style={bar_style}>
            <a href={localized_path(locale, Page::Home)} style={format!("color: {}; font-weight: 700; text-decoration: none;", theme.colors.text_primary)}>
                { "Moonshine" }
            </a>
            <div style="display: flex; align-items: center;">
                <a href={localized_path(locale, Page::Home)} style={link_style.clone()}>
                    { Message::NavHome.text(locale) }
                </a>
                <a href={localized_path(locale, Page::Recruit)} style={link_style}>
                    { Message::NavRecruit.text(locale) }
                </a>
                <LanguageSwitcher current={locale} />
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub current: Locale,
}

/// Reloads the current page under another locale prefix.
#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <div role="group" aria-label="language" style={format!("display: flex; gap: {};", theme.spacing.xs)}>
            { for Locale::ALL.iter().map(|&locale| {
                let active = locale == props.current;
                let style = format!(
                    "background: none; border: none; cursor: pointer; font-weight: {}; color: {};",
                    if active { 700 } else { 400 },
                    if active { theme.colors.text_primary } else { theme.colors.text_tertiary },
                );
                let onclick = Callback::from(move |_: MouseEvent| {
                    if !active {
                        navigate(&switch_locale(&current_path(), locale));
                    }
                });
                html! {
                    <button type="button" style={style} aria-pressed={active.to_string()} {onclick}>
                        { locale.code().to_uppercase() }
                    </button>
                }
            }) }
        </div>
    }
}
