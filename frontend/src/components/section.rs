//! Page section layout: `Section` wraps `SectionHeader`, `SectionContent`
//! and `SectionGrid`, all styled from the shared [`Theme`].

use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let style = format!(
        "padding: {} {}; max-width: {}; margin: 0 auto; box-sizing: border-box;",
        theme.spacing.xl, theme.spacing.md, theme.max_width
    );

    html! {
        <section id={props.id.clone()} style={style}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let title_style = format!(
        "margin: 0 0 {}; font-size: 2rem; font-weight: 600; color: {};",
        theme.spacing.sm, theme.colors.text_primary
    );
    let subtitle_style = format!("margin: 0; color: {};", theme.colors.text_tertiary);

    html! {
        <header style={format!("margin-bottom: {};", theme.spacing.lg)}>
            <h2 style={title_style}>{ props.title.clone() }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p style={subtitle_style}>{ subtitle.clone() }</p>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionContentProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionContent)]
pub fn section_content(props: &SectionContentProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    html! {
        <div style={format!("color: {}; line-height: 1.7;", theme.colors.text_secondary)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionGridProps {
    #[prop_or(2)]
    pub columns: usize,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionGrid)]
pub fn section_grid(props: &SectionGridProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let style = format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {};",
        props.columns.max(1),
        theme.spacing.md
    );
    html! {
        <div style={style}>
            { for props.children.iter() }
        </div>
    }
}
