//! Design tokens shared by every presentational component.
//!
//! The `App` root puts a single [`Theme`] into a `ContextProvider`; components
//! read it with `use_context` (function components) or
//! [`theme_from_scope`] (struct components) and fall back to
//! [`Theme::default`] when rendered outside the provider.

use yew::html::Scope;
use yew::{Callback, Component};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_raised: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub colors: Palette,
    pub spacing: Spacing,
    pub radius_sm: &'static str,
    pub radius_md: &'static str,
    pub font_family: &'static str,
    pub transition: &'static str,
    pub max_width: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Palette {
                background: "rgb(8, 9, 10)",
                surface: "rgb(20, 21, 23)",
                surface_raised: "rgb(28, 29, 32)",
                text_primary: "rgb(247, 248, 248)",
                text_secondary: "rgb(208, 214, 224)",
                text_tertiary: "rgb(138, 143, 152)",
                accent: "rgb(230, 170, 60)",
                border: "rgba(255, 255, 255, 0.08)",
                error: "rgb(235, 87, 87)",
                success: "rgb(76, 183, 130)",
            },
            spacing: Spacing {
                xs: "4px",
                sm: "8px",
                md: "16px",
                lg: "32px",
                xl: "64px",
            },
            radius_sm: "6px",
            radius_md: "12px",
            font_family: "\"Inter Variable\", \"SF Pro Display\", -apple-system, \"Segoe UI\", Roboto, sans-serif",
            transition: "0.2s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            max_width: "1024px",
        }
    }
}

/// Reads the theme once at creation time; struct components never re-theme.
pub fn theme_from_scope<C: Component>(link: &Scope<C>) -> Theme {
    link.context::<Theme>(Callback::noop())
        .map(|(theme, _handle)| theme)
        .unwrap_or_default()
}
