use common::i18n::Message;
use yew::prelude::*;

use super::messages::Msg;
use super::state::Carousel;

pub fn view(carousel: &Carousel, ctx: &Context<Carousel>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let theme = &carousel.theme;
    let controller = &carousel.controller;
    let current = controller.current_index();

    let track_style = format!(
        "display: flex; transition: transform 0.5s ease; transform: translateX(-{}%);",
        current * 100
    );
    let arrow_style = |side: &str| {
        format!(
            "position: absolute; top: 50%; {side}: {}; transform: translateY(-50%); \
             background: {}; color: {}; border: 1px solid {}; border-radius: 50%; \
             width: 40px; height: 40px; cursor: pointer;",
            theme.spacing.sm, theme.colors.surface_raised, theme.colors.text_primary, theme.colors.border
        )
    };

    html! {
        <div
            style="position: relative; overflow: hidden; width: 100%;"
            onmouseenter={link.callback(|_: MouseEvent| Msg::PointerEnter)}
            onmouseleave={link.callback(|_: MouseEvent| Msg::PointerLeave)}
        >
            <div style={track_style}>
                { for props.children.iter().enumerate().map(|(index, slide)| html! {
                    <div
                        style="flex: 0 0 100%; box-sizing: border-box;"
                        aria-hidden={(index != current).to_string()}
                    >
                        { slide }
                    </div>
                }) }
            </div>

            if props.show_arrows && controller.len() > 1 {
                <button
                    type="button"
                    style={arrow_style("left")}
                    disabled={!controller.can_go_previous()}
                    aria-label={Message::PreviousSlide.text(props.locale)}
                    onclick={link.callback(|_: MouseEvent| Msg::Previous)}
                >
                    { "‹" }
                </button>
                <button
                    type="button"
                    style={arrow_style("right")}
                    disabled={!controller.can_go_next()}
                    aria-label={Message::NextSlide.text(props.locale)}
                    onclick={link.callback(|_: MouseEvent| Msg::Next)}
                >
                    { "›" }
                </button>
            }

            if props.show_dots && controller.len() > 1 {
                <div style={format!("display: flex; justify-content: center; gap: {}; margin-top: {};", theme.spacing.sm, theme.spacing.md)}>
                    { for (0..controller.len()).map(|index| {
                        let background = if index == current {
                            theme.colors.text_primary
                        } else {
                            theme.colors.text_tertiary
                        };
                        html! {
                            <button
                                type="button"
                                style={format!("width: 10px; height: 10px; padding: 0; border: none; border-radius: 50%; cursor: pointer; background: {background};")}
                                aria-label={format!("{}", index + 1)}
                                aria-current={(index == current).to_string()}
                                onclick={link.callback(move |_: MouseEvent| Msg::JumpTo(index))}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}
