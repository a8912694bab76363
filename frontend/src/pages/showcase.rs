//! Component gallery at `/components`.
//!
//! Renders every shared building block with a usage snippet. Copy is Korean
//! only; the page sits outside the locale tree like the admin page.

use common::i18n::Locale;
use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::controls::{Button, ButtonVariant, Card, Checkbox, TextField};
use crate::components::navigation::Navigation;
use crate::components::section::{Section, SectionContent, SectionGrid, SectionHeader};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
struct DemoProps {
    title: AttrValue,
    snippet: AttrValue,
    #[prop_or_default]
    children: Children,
}

#[function_component(Demo)]
fn demo(props: &DemoProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let frame_style = format!(
        "margin-bottom: {}; padding: {}; background: {}; border: 1px solid {}; border-radius: {};",
        theme.spacing.lg, theme.spacing.lg, theme.colors.surface, theme.colors.border, theme.radius_md
    );
    let code_style = format!(
        "margin: {} 0 0; padding: {}; background: {}; color: {}; border-radius: {}; \
         font-size: 0.8rem; overflow-x: auto;",
        theme.spacing.md, theme.spacing.md, theme.colors.background, theme.colors.text_secondary, theme.radius_sm
    );

    html! {
        <div style={frame_style}>
            <h3 style={format!("margin: 0 0 {}; color: {};", theme.spacing.md, theme.colors.text_primary)}>
                { props.title.clone() }
            </h3>
            { for props.children.iter() }
            <pre style={code_style}>{ props.snippet.clone() }</pre>
        </div>
    }
}

fn slide(n: usize) -> Html {
    html! {
        <Card title={format!("슬라이드 {n}")} subtitle="사용 예시">
            <p>{ format!("{n}번째 카드입니다.") }</p>
        </Card>
    }
}

#[function_component(ShowcasePage)]
pub fn showcase_page() -> Html {
    let text = use_state(String::new);
    let notes = use_state(String::new);
    let agreed = use_state(|| false);

    let contact_error = (!text.is_empty() && !text.starts_with("010-"))
        .then(|| AttrValue::from("연락처는 010-xxxx-xxxx 형식으로 입력해주세요."));
    let on_text = {
        let text = text.clone();
        Callback::from(move |value: String| text.set(value))
    };
    let on_notes = {
        let notes = notes.clone();
        Callback::from(move |value: String| notes.set(value.chars().take(300).collect()))
    };
    let on_agree = {
        let agreed = agreed.clone();
        Callback::from(move |checked: bool| agreed.set(checked))
    };

    html! {
        <>
            <Navigation locale={Locale::Ko} />
            <Section id="components">
                <SectionHeader title="컴포넌트 라이브러리" subtitle="Moonshine 사이트에서 사용하는 UI 컴포넌트" />

                <Demo title="Button" snippet={r#"<Button variant={ButtonVariant::Secondary} onclick={cb}>{ "취소" }</Button>"#}>
                    <div style="display: flex; gap: 16px; flex-wrap: wrap;">
                        <Button>{ "기본 버튼" }</Button>
                        <Button variant={ButtonVariant::Secondary}>{ "보조 버튼" }</Button>
                        <Button disabled={true}>{ "비활성 버튼" }</Button>
                    </div>
                </Demo>

                <Demo title="Card" snippet={r#"<Card title="제목" subtitle="부제목">{ "내용" }</Card>"#}>
                    <SectionGrid columns={3}>
                        <Card title="제목" subtitle="부제목"><p>{ "카드 내용" }</p></Card>
                        <Card title="제목만 있는 카드"><p>{ "부제목 없이 사용" }</p></Card>
                        <Card><p>{ "제목 없는 카드" }</p></Card>
                    </SectionGrid>
                </Demo>

                <Demo title="Section" snippet={r#"<Section id="about"><SectionHeader title="..." /><SectionContent>..</SectionContent></Section>"#}>
                    <SectionContent>
                        <p>{ "Section, SectionHeader, SectionContent, SectionGrid를 조합해 페이지 구역을 만듭니다." }</p>
                    </SectionContent>
                </Demo>

                <Demo title="Form" snippet={r#"<TextField id="notes" label="메모" value={v} rows={Some(3)} max_chars={Some(300)} oninput={cb} />"#}>
                    <TextField
                        id="showcase-contact"
                        label="연락처"
                        value={(*text).clone()}
                        placeholder="010-0000-0000"
                        error={contact_error}
                        required={true}
                        oninput={on_text}
                    />
                    <TextField
                        id="showcase-notes"
                        label="메모"
                        value={(*notes).clone()}
                        rows={Some(3)}
                        max_chars={Some(300)}
                        oninput={on_notes}
                    />
                    <Checkbox id="showcase-agree" label="개인정보 수집에 동의합니다" checked={*agreed} onchange={on_agree} />
                </Demo>

                <Demo title="Carousel" snippet={r#"<Carousel auto_play={true} interval_ms={3000}>{ slides }</Carousel>"#}>
                    <h4>{ "수동 넘김" }</h4>
                    <Carousel locale={Locale::Ko}>{ for (1..=3).map(slide) }</Carousel>
                    <h4>{ "자동 재생 (마우스를 올리면 멈춤)" }</h4>
                    <Carousel locale={Locale::Ko} auto_play={true} interval_ms={3000}>{ for (1..=3).map(slide) }</Carousel>
                    <h4>{ "끝에서 멈춤" }</h4>
                    <Carousel locale={Locale::Ko} infinite={false}>{ for (1..=3).map(slide) }</Carousel>
                </Demo>

                <Demo title="Navigation" snippet={r#"<Navigation locale={Locale::En} />"#}>
                    <Navigation locale={Locale::En} />
                </Demo>
            </Section>
        </>
    }
}
