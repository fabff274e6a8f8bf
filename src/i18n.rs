//! Two-language UI text.
//!
//! The site speaks Korean and English. There is no message catalogue: every
//! user-facing string is a [`Bilingual`] constant in [`text`], and renderers
//! pick the half matching the current [`Language`]. Content from the JSON
//! resources is shown as authored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ko,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        }
    }

    /// BCP 47 tag, used for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            other => Err(format!("unknown language \"{other}\" (expected \"en\" or \"ko\")")),
        }
    }
}

/// A string with both translations inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub ko: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, ko: &'static str) -> Self {
        Self { en, ko }
    }

    pub fn pick(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ko => self.ko,
        }
    }
}

/// Every UI string on the public page.
pub mod text {
    use super::Bilingual;

    pub const NAV_HOME: Bilingual = Bilingual::new("Home", "홈");
    pub const NAV_ABOUT: Bilingual = Bilingual::new("About", "소개");
    pub const NAV_EXPERIENCE: Bilingual = Bilingual::new("Experience", "경력");
    pub const NAV_SKILLS: Bilingual = Bilingual::new("Skills", "스킬");
    pub const NAV_PROJECTS: Bilingual = Bilingual::new("Projects", "프로젝트");
    pub const NAV_AWARDS: Bilingual = Bilingual::new("Awards", "수상");
    pub const NAV_CONTACT: Bilingual = Bilingual::new("Contact", "연락처");

    /// Language switch labels name the language you would switch *to*.
    pub const SWITCH_LANGUAGE: Bilingual = Bilingual::new("KO", "EN");
    pub const SWITCH_LANGUAGE_LONG: Bilingual = Bilingual::new("한국어 (KO)", "English (EN)");
    pub const TOGGLE_THEME: Bilingual = Bilingual::new("Toggle theme", "테마 전환");
    pub const TOGGLE_MENU: Bilingual = Bilingual::new("Menu", "메뉴");

    pub const HERO_VIEW_WORK: Bilingual = Bilingual::new("View My Work", "작업 보기");
    pub const HERO_GET_IN_TOUCH: Bilingual = Bilingual::new("Get In Touch", "연락하기");
    pub const HERO_PROFILE_ALT: Bilingual = Bilingual::new("Profile", "프로필");

    pub const ABOUT_TITLE: Bilingual = Bilingual::new("About Me", "소개");

    pub const EXPERIENCE_TITLE: Bilingual = Bilingual::new("Experience", "경력");
    pub const WORK_TITLE: Bilingual = Bilingual::new("Work Experience", "업무 경험");
    pub const EDUCATION_TITLE: Bilingual = Bilingual::new("Education", "학력");

    pub const SKILLS_TITLE: Bilingual = Bilingual::new("Skills", "스킬");

    pub const PROJECTS_TITLE: Bilingual = Bilingual::new("Projects", "프로젝트");
    pub const PROJECT_DETAILS_HINT: Bilingual =
        Bilingual::new("Click to view details", "자세히 보기");
    pub const PROJECT_DESCRIPTION: Bilingual = Bilingual::new("Description", "설명");
    pub const PROJECT_CONTRIBUTIONS: Bilingual = Bilingual::new("My Contributions", "나의 기여");
    pub const PROJECT_RESULTS: Bilingual = Bilingual::new("Key Results", "주요 결과");
    pub const PROJECT_DEMO: Bilingual = Bilingual::new("Live Demo", "데모 보기");
    pub const PROJECT_REPOSITORY: Bilingual = Bilingual::new("GitHub", "GitHub");
    pub const CLOSE: Bilingual = Bilingual::new("Close", "닫기");

    pub const AWARDS_TITLE: Bilingual = Bilingual::new("Awards & Certifications", "수상 및 자격증");
    pub const KIND_CERTIFICATION: Bilingual = Bilingual::new("Certification", "자격증");
    pub const KIND_AWARD: Bilingual = Bilingual::new("Award", "수상");
    pub const KIND_COURSE: Bilingual = Bilingual::new("Course", "교육 과정");

    pub const CONTACT_TITLE: Bilingual = Bilingual::new("Get In Touch", "연락하기");
    pub const CONTACT_INTRO: Bilingual = Bilingual::new(
        "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions. Feel free to reach out!",
        "새로운 프로젝트, 창의적인 아이디어 또는 함께 할 기회에 대해 언제나 논의할 준비가 되어 있습니다. 편하게 연락주세요!",
    );
    pub const CONTACT_EMAIL: Bilingual = Bilingual::new("Email", "이메일");
    pub const CONTACT_PHONE: Bilingual = Bilingual::new("Phone", "전화");
    pub const CONTACT_LOCATION: Bilingual = Bilingual::new("Location", "위치");
    pub const CONTACT_SOCIAL: Bilingual = Bilingual::new("Connect With Me", "소셜 미디어");

    pub const LOADING: Bilingual = Bilingual::new("Loading Portfolio...", "포트폴리오 불러오는 중...");
    pub const UNAVAILABLE: Bilingual = Bilingual::new(
        "This section is currently unavailable.",
        "이 섹션을 지금은 불러올 수 없습니다.",
    );
}

/// "BS in Computer Science" / "Computer Science 학사" style education line.
pub fn degree_line(language: Language, degree: &str, major: &str) -> String {
    match language {
        Language::En => format!("{degree} in {major}"),
        Language::Ko => format!("{major} {degree}"),
    }
}
