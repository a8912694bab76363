use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

use crate::theme::{theme_from_scope, Theme};

/// Panel that slides down from the top of the viewport while `open` is set.
pub struct TopSheet {
    theme: Theme,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    pub open: bool,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme: theme_from_scope(ctx.link()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = if props.open { "top-sheet show" } else { "top-sheet" };
        let style = format!(
            "background: {}; border-bottom: 1px solid {}; padding: {};",
            self.theme.colors.surface, self.theme.colors.border, self.theme.spacing.lg
        );
        let on_close = props.on_close.clone();

        html! {
            <>
                if props.open {
                    <div
                        style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 999;"
                        onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}
                    />
                }
                <div class={class} style={style} role="dialog" aria-hidden={(!props.open).to_string()}>
                    { props.children.clone() }
                </div>
            </>
        }
    }
}
