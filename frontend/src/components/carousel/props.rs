use common::i18n::Locale;
use yew::prelude::*;

/// Properties for the `Carousel` component.
///
/// Each child is one slide. Defaults match the landing page: wrap-around
/// navigation, dots and arrows shown, auto-play off.
#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    #[prop_or_default]
    pub children: Children,

    /// Used for the arrow buttons' accessible labels.
    #[prop_or_default]
    pub locale: Locale,

    #[prop_or(true)]
    pub show_dots: bool,

    #[prop_or(true)]
    pub show_arrows: bool,

    #[prop_or(false)]
    pub auto_play: bool,

    /// Auto-advance period in milliseconds.
    #[prop_or(3000)]
    pub interval_ms: u32,

    /// Wrap from the last slide to the first and back.
    #[prop_or(true)]
    pub infinite: bool,
}
