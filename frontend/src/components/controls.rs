//! Form controls and small building blocks used by the recruit and admin pages.
//!
//! Every control is a function component reading the shared [`Theme`]. Text
//! controls report their new value as a plain `String`; the owning component
//! decides what to keep.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::theme::Theme;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (background, color, border) = match props.variant {
        ButtonVariant::Primary => (theme.colors.accent, theme.colors.background, "none".to_string()),
        ButtonVariant::Secondary => (
            "transparent",
            theme.colors.text_primary,
            format!("1px solid {}", theme.colors.border),
        ),
    };
    let style = format!(
        "background: {background}; color: {color}; border: {border}; border-radius: {}; \
         padding: {} {}; font-weight: 600; cursor: pointer; transition: opacity {};",
        theme.radius_sm, theme.spacing.sm, theme.spacing.md, theme.transition
    );

    html! {
        <button
            type={props.kind.clone()}
            style={style}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let style = format!(
        "background: {}; border: 1px solid {}; border-radius: {}; padding: {}; height: 100%; box-sizing: border-box;",
        theme.colors.surface, theme.colors.border, theme.radius_md, theme.spacing.lg
    );
    html! {
        <div style={style}>
            if let Some(title) = &props.title {
                <h3 style={format!("margin: 0 0 {}; color: {};", theme.spacing.sm, theme.colors.text_primary)}>
                    { title.clone() }
                </h3>
            }
            if let Some(subtitle) = &props.subtitle {
                <p style={format!("margin: 0 0 {}; color: {}; font-size: 0.9rem;", theme.spacing.md, theme.colors.text_tertiary)}>
                    { subtitle.clone() }
                </p>
            }
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    /// Renders a `<textarea>` with this many rows instead of an `<input>`.
    #[prop_or_default]
    pub rows: Option<u32>,
    /// Shows a `current/max` counter under the control.
    #[prop_or_default]
    pub max_chars: Option<usize>,
    pub oninput: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let border = if props.error.is_some() {
        theme.colors.error
    } else {
        theme.colors.border
    };
    let control_style = format!(
        "width: 100%; box-sizing: border-box; background: {}; color: {}; border: 1px solid {border}; \
         border-radius: {}; padding: {}; font: inherit; resize: vertical;",
        theme.colors.surface_raised, theme.colors.text_primary, theme.radius_sm, theme.spacing.sm
    );
    let error_id = format!("{}-error", props.id);

    let control = match props.rows {
        Some(rows) => {
            let oninput = props.oninput.clone();
            html! {
                <textarea
                    id={props.id.clone()}
                    rows={rows.to_string()}
                    style={control_style}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    maxlength={max_length_attr(props.max_chars)}
                    aria-invalid={props.error.is_some().to_string()}
                    aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                    oninput={Callback::from(move |e: InputEvent| {
                        oninput.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            }
        }
        None => {
            let oninput = props.oninput.clone();
            html! {
                <input
                    id={props.id.clone()}
                    type="text"
                    style={control_style}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    maxlength={max_length_attr(props.max_chars)}
                    aria-invalid={props.error.is_some().to_string()}
                    aria-describedby={props.error.as_ref().map(|_| error_id.clone())}
                    oninput={Callback::from(move |e: InputEvent| {
                        oninput.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            }
        }
    };

    html! {
        <div style={format!("margin-bottom: {};", theme.spacing.md)}>
            <label for={props.id.clone()} style={format!("display: block; margin-bottom: {}; color: {};", theme.spacing.xs, theme.colors.text_secondary)}>
                { props.label.clone() }
                if props.required {
                    <span style={format!("color: {};", theme.colors.error)}>{ " *" }</span>
                }
            </label>
            { control }
            if let Some(max) = props.max_chars {
                <div style={format!("text-align: right; font-size: 0.8rem; color: {};", theme.colors.text_tertiary)}>
                    { format!("{}/{}", props.value.chars().count(), max) }
                </div>
            }
            if let Some(error) = &props.error {
                <p id={error_id} role="alert" style={format!("margin: {} 0 0; font-size: 0.85rem; color: {};", theme.spacing.xs, theme.colors.error)}>
                    { error.clone() }
                </p>
            }
        </div>
    }
}

/// `maxlength` for a capped control. The browser stops input at the cap, so the
/// DOM never shows more than the draft keeps after truncation.
fn max_length_attr(max_chars: Option<usize>) -> Option<AttrValue> {
    max_chars.map(|max| AttrValue::from(max.to_string()))
}

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub onchange: Callback<bool>,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let onchange = props.onchange.clone();
    html! {
        <label for={props.id.clone()} style={format!("display: flex; align-items: center; gap: {}; color: {}; cursor: pointer;", theme.spacing.sm, theme.colors.text_secondary)}>
            <input
                id={props.id.clone()}
                type="checkbox"
                checked={props.checked}
                onchange={Callback::from(move |e: Event| {
                    onchange.emit(e.target_unchecked_into::<HtmlInputElement>().checked())
                })}
            />
            { props.label.clone() }
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::application::TextField as FormText;

    #[test]
    fn capped_fields_carry_their_limit_as_maxlength() {
        assert_eq!(
            max_length_attr(FormText::Motivation.max_chars()).as_deref(),
            Some("1000")
        );
        assert_eq!(
            max_length_attr(FormText::AdditionalComments.max_chars()).as_deref(),
            Some("500")
        );
        assert_eq!(
            max_length_attr(FormText::InterviewNotes.max_chars()).as_deref(),
            Some("300")
        );
    }

    #[test]
    fn uncapped_fields_have_no_maxlength() {
        assert_eq!(max_length_attr(FormText::Name.max_chars()), None);
    }
}
