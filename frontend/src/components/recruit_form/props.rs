use common::i18n::Locale;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecruitFormProps {
    /// Language for labels and client-side validation messages.
    pub locale: Locale,
}
