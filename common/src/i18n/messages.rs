//! Korean/English message catalog.
//!
//! Server responses are always Korean; the browser UI renders in the locale of
//! the current route.

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    // validation
    NameRequired,
    StudentIdRequired,
    StudentIdFormat,
    ContactRequired,
    ContactFormat,
    MotivationRequired,
    MotivationTooLong,
    ActivitiesRequired,
    ActivitiesTooLong,
    InterviewTimesRequired,
    AdditionalCommentsTooLong,
    InterviewNotesTooLong,

    // submission and admin envelopes
    SubmitAccepted,
    SubmitInvalid,
    SubmitError,
    SubmitNetworkError,
    StorageError,
    LookupError,
    ServerError,
    AdminUnauthorized,
    AdminListed,
    AdminFound,
    ApplicationNotFound,

    // recruit page
    RecruitTitle,
    RecruitSubtitle,
    PeriodEndedTitle,
    PeriodEndedMessage,
    PeriodEndedSubmessage,
    FormTitle,
    PeriodInfo,
    BasicInfo,
    NameLabel,
    StudentIdLabel,
    ContactLabel,
    MotivationHeading,
    MotivationLabel,
    MotivationPlaceholder,
    ActivitiesHeading,
    ActivitiesLabel,
    ActivitiesPlaceholder,
    InterviewHeading,
    InterviewNote,
    AdditionalHeading,
    AdditionalLabel,
    AdditionalPlaceholder,
    InterviewNotesLabel,
    InterviewNotesPlaceholder,
    Cancel,
    SubmitButton,
    Submitting,
    ContactInfo,

    // navigation and landing
    NavHome,
    NavRecruit,
    HeroTitle,
    HeroSubtitle,
    AboutTitle,
    AboutBody,
    AboutDiversityTitle,
    AboutDiversitySubtitle,
    AboutDiversityBody,
    AboutCreativityTitle,
    AboutCreativitySubtitle,
    AboutCreativityBody,
    AboutQualityTitle,
    AboutQualitySubtitle,
    AboutQualityBody,
    ActivitiesTitle,
    JoinCta,
    PreviousSlide,
    NextSlide,
    NotFound,
    SlideBrewingTitle,
    SlideBrewingBody,
    SlideTastingTitle,
    SlideTastingBody,
    SlideTourTitle,
    SlideTourBody,
    SlideFestivalTitle,
    SlideFestivalBody,

    AdminTitle,
    AdminKeyLabel,
    AdminKeyRequired,
    AdminLogin,
    AdminLoading,
    AdminConnectionFailed,
    AdminDashboardTitle,
    AdminSummary,
    AdminEmpty,
    AdminRefresh,
    AdminLogout,
    AdminClose,
    AdminSubmittedAt,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        let (ko, en) = match self {
            Message::NameRequired => ("이름을 입력해주세요.", "Please enter your name."),
            Message::StudentIdRequired => ("학번을 입력해주세요.", "Please enter your student ID."),
            Message::StudentIdFormat => (
                "학번은 8자리 숫자로 입력해주세요.",
                "Your student ID must be 8 digits.",
            ),
            Message::ContactRequired => ("연락처를 입력해주세요.", "Please enter your phone number."),
            Message::ContactFormat => (
                "연락처는 010-xxxx-xxxx 형식으로 입력해주세요.",
                "Please use the 010-xxxx-xxxx format.",
            ),
            Message::MotivationRequired => (
                "지원 동기를 작성해주세요.",
                "Please tell us why you want to join.",
            ),
            Message::MotivationTooLong => (
                "지원 동기는 1000자 이하로 작성해주세요.",
                "Your motivation must be 1000 characters or fewer.",
            ),
            Message::ActivitiesRequired => (
                "하고 싶은 활동을 작성해주세요.",
                "Please describe the activities you would like to do.",
            ),
            Message::ActivitiesTooLong => (
                "활동 계획은 1000자 이하로 작성해주세요.",
                "Your activity plan must be 1000 characters or fewer.",
            ),
            Message::InterviewTimesRequired => (
                "면접 가능한 시간을 하나 이상 선택해주세요.",
                "Please select at least one interview time.",
            ),
            Message::AdditionalCommentsTooLong => (
                "추가 사항은 500자 이하로 작성해주세요.",
                "Additional comments must be 500 characters or fewer.",
            ),
            Message::InterviewNotesTooLong => (
                "면접 관련 참고사항은 300자 이하로 작성해주세요.",
                "Interview notes must be 300 characters or fewer.",
            ),
            Message::SubmitAccepted => (
                "지원서가 성공적으로 제출되었습니다! 면접 일정은 추후 연락드리겠습니다.",
                "Your application has been submitted! We will contact you about the interview.",
            ),
            Message::SubmitInvalid => (
                "입력 데이터에 오류가 있습니다.",
                "Some fields are invalid.",
            ),
            Message::SubmitError => (
                "지원서 제출 중 오류가 발생했습니다.",
                "Something went wrong while submitting your application.",
            ),
            Message::SubmitNetworkError => (
                "네트워크 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
                "A network error occurred. Please try again shortly.",
            ),
            Message::StorageError => (
                "지원서 저장 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
                "Your application could not be saved. Please try again shortly.",
            ),
            Message::LookupError => (
                "지원서 조회 중 오류가 발생했습니다.",
                "Applications could not be loaded.",
            ),
            Message::ServerError => (
                "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
                "A server error occurred. Please try again shortly.",
            ),
            Message::AdminUnauthorized => ("관리자 권한이 필요합니다.", "Admin access is required."),
            Message::AdminListed => (
                "지원서 목록을 성공적으로 조회했습니다.",
                "Applications loaded.",
            ),
            Message::AdminFound => ("지원서를 조회했습니다.", "Application loaded."),
            Message::ApplicationNotFound => (
                "지원서를 찾을 수 없습니다.",
                "Application not found.",
            ),
            Message::RecruitTitle => ("신입 회원 모집", "Join Moonshine"),
            Message::RecruitSubtitle => (
                "함께 맥주를 빚을 새로운 회원을 찾습니다.",
                "We are looking for new members to brew with us.",
            ),
            Message::PeriodEndedTitle => ("모집 기간이 종료되었습니다", "Recruitment has closed"),
            Message::PeriodEndedMessage => (
                "이번 학기 신입 회원 모집이 마감되었습니다.",
                "Applications for this semester are closed.",
            ),
            Message::PeriodEndedSubmessage => (
                "다음 모집 때 다시 만나요!",
                "See you at the next recruitment!",
            ),
            Message::FormTitle => ("지원서 작성", "Application"),
            Message::PeriodInfo => (
                "모집 기간 : 9월 5일까지",
                "Recruitment period : until September 5",
            ),
            Message::BasicInfo => ("기본 정보", "Basic information"),
            Message::NameLabel => ("이름", "Name"),
            Message::StudentIdLabel => ("학번", "Student ID"),
            Message::ContactLabel => ("연락처", "Phone"),
            Message::MotivationHeading => ("지원 동기", "Motivation"),
            Message::MotivationLabel => ("Moonshine에 지원한 이유", "Why Moonshine?"),
            Message::MotivationPlaceholder => (
                "지원 동기를 자유롭게 작성해주세요.",
                "Tell us freely why you are applying.",
            ),
            Message::ActivitiesHeading => ("활동 계획", "Activities"),
            Message::ActivitiesLabel => ("하고 싶은 활동", "What would you like to do?"),
            Message::ActivitiesPlaceholder => (
                "동아리에서 해보고 싶은 활동을 작성해주세요.",
                "Describe what you would like to do in the club.",
            ),
            Message::InterviewHeading => ("면접 가능 시간", "Interview availability"),
            Message::InterviewNote => (
                "가능한 시간을 모두 선택해주세요.",
                "Select every time that works for you.",
            ),
            Message::AdditionalHeading => ("추가 사항", "Anything else"),
            Message::AdditionalLabel => ("추가로 하고 싶은 말", "Additional comments"),
            Message::AdditionalPlaceholder => (
                "자유롭게 작성해주세요.",
                "Feel free to write anything.",
            ),
            Message::InterviewNotesLabel => ("면접 관련 참고사항", "Notes for the interview"),
            Message::InterviewNotesPlaceholder => (
                "면접 일정에 참고할 내용을 적어주세요.",
                "Anything we should know when scheduling.",
            ),
            Message::Cancel => ("취소", "Cancel"),
            Message::SubmitButton => ("지원서 제출", "Submit application"),
            Message::Submitting => ("제출 중...", "Submitting..."),
            Message::ContactInfo => (
                "문의사항은 동아리 인스타그램으로 연락주세요.",
                "Questions? Reach us on the club's Instagram.",
            ),
            Message::NavHome => ("홈", "Home"),
            Message::NavRecruit => ("지원하기", "Apply"),
            Message::HeroTitle => ("Moonshine", "Moonshine"),
            Message::HeroSubtitle => (
                "직접 빚는 맥주, 함께 나누는 이야기",
                "Beer we brew ourselves, stories we share",
            ),
            Message::AboutTitle => ("동아리 소개", "About us"),
            Message::AboutBody => (
                "Moonshine은 맥주 양조를 함께 배우고 즐기는 교내 동아리입니다.",
                "Moonshine is a campus club where we learn and enjoy brewing beer together.",
            ),
            Message::AboutDiversityTitle => ("다양성", "Diversity"),
            Message::AboutDiversitySubtitle => ("모든 전공, 모든 취향", "Every major, every taste"),
            Message::AboutDiversityBody => (
                "전공과 학년에 상관없이 맥주를 좋아하는 누구나 함께합니다.",
                "Anyone who loves beer is welcome, whatever their major or year.",
            ),
            Message::AboutCreativityTitle => ("창의성", "Creativity"),
            Message::AboutCreativitySubtitle => ("우리만의 레시피", "Recipes of our own"),
            Message::AboutCreativityBody => (
                "새로운 재료와 스타일을 시도하며 동아리만의 맥주를 설계합니다.",
                "We try new ingredients and styles to design beers that are ours.",
            ),
            Message::AboutQualityTitle => ("품질", "Quality"),
            Message::AboutQualitySubtitle => ("기본에 충실한 양조", "Brewing done right"),
            Message::AboutQualityBody => (
                "위생과 공정 기록을 지키며 매 배치의 완성도를 높입니다.",
                "Careful sanitation and brew logs make every batch better than the last.",
            ),
            Message::ActivitiesTitle => ("주요 활동", "What we do"),
            Message::JoinCta => ("지금 지원하기", "Apply now"),
            Message::PreviousSlide => ("이전 슬라이드", "Previous slide"),
            Message::NextSlide => ("다음 슬라이드", "Next slide"),
            Message::NotFound => ("페이지를 찾을 수 없습니다.", "Page not found."),
            Message::SlideBrewingTitle => ("양조 세션", "Brewing sessions"),
            Message::SlideBrewingBody => (
                "몰트 선택부터 발효까지, 한 배치를 처음부터 끝까지 함께 만듭니다.",
                "From picking malt to fermentation, we brew a full batch together.",
            ),
            Message::SlideTastingTitle => ("테이스팅", "Tastings"),
            Message::SlideTastingBody => (
                "직접 만든 맥주와 다양한 스타일을 비교하며 맛을 기록합니다.",
                "We compare our own beer with classic styles and keep tasting notes.",
            ),
            Message::SlideTourTitle => ("브루어리 투어", "Brewery tours"),
            Message::SlideTourBody => (
                "지역 브루어리를 방문해 현장의 양조 공정을 배웁니다.",
                "We visit local breweries and learn how they work at scale.",
            ),
            Message::SlideFestivalTitle => ("축제 부스", "Festival booth"),
            Message::SlideFestivalBody => (
                "학교 축제에서 동아리 부스를 운영합니다.",
                "We run a club booth at the campus festival.",
            ),
            Message::AdminTitle => ("관리자 로그인", "Admin login"),
            Message::AdminKeyLabel => ("관리자 키", "Admin key"),
            Message::AdminKeyRequired => ("관리자 키를 입력해주세요.", "Please enter the admin key."),
            Message::AdminLogin => ("로그인", "Log in"),
            Message::AdminLoading => ("불러오는 중...", "Loading..."),
            Message::AdminConnectionFailed => (
                "서버 연결에 실패했습니다.",
                "Could not reach the server.",
            ),
            Message::AdminDashboardTitle => ("지원서 관리", "Applications"),
            Message::AdminSummary => (
                "총 {count}건의 지원서가 접수되었습니다.",
                "{count} applications received.",
            ),
            Message::AdminEmpty => ("접수된 지원서가 없습니다.", "No applications yet."),
            Message::AdminRefresh => ("새로고침", "Refresh"),
            Message::AdminLogout => ("로그아웃", "Log out"),
            Message::AdminClose => ("닫기", "Close"),
            Message::AdminSubmittedAt => ("제출 시각", "Submitted at"),
        };
        match locale {
            Locale::Ko => ko,
            Locale::En => en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_resolves() {
        assert_eq!(Message::NameRequired.text(Locale::Ko), "이름을 입력해주세요.");
        assert_eq!(Message::NameRequired.text(Locale::En), "Please enter your name.");
        assert_ne!(
            Message::SubmitNetworkError.text(Locale::Ko),
            Message::SubmitNetworkError.text(Locale::En)
        );
    }
}
