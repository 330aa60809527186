use crate::i18n::Language;
use serde::Serialize;

/// Fixed site chrome strings for a language
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStrings {
    // ==================== Site Identity ====================
    pub site_title: &'static str,
    pub site_subtitle: &'static str,
    pub site_description: &'static str,

    // ==================== Section Headings ====================
    pub recommended_spots: &'static str,
    pub overview: &'static str,
    pub detail_info: &'static str,
    pub highlights: &'static str,
    pub access: &'static str,

    // ==================== Navigation ====================
    pub view_other_spots: &'static str,
    pub home: &'static str,
    pub view_detail: &'static str,

    // ==================== Loading States ====================
    /// Shown when the dataset could not be fetched
    pub loading_error: &'static str,
    pub loading_note: &'static str,
    pub loading_spinner: &'static str,
    pub data_loading: &'static str,
}

/// Keys into [`LanguageStrings`], used by [`t`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiString {
    SiteTitle,
    SiteSubtitle,
    SiteDescription,
    RecommendedSpots,
    Overview,
    DetailInfo,
    Highlights,
    Access,
    ViewOtherSpots,
    Home,
    ViewDetail,
    LoadingError,
    LoadingNote,
    LoadingSpinner,
    DataLoading,
}

impl LanguageStrings {
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language {
            Language::Japanese => &JAPANESE_STRINGS,
            Language::TraditionalChinese => &TRADITIONAL_CHINESE_STRINGS,
            Language::Korean => &KOREAN_STRINGS,
            Language::English => &ENGLISH_STRINGS,
        }
    }

    fn field(&self, key: UiString) -> &'static str {
        match key {
            UiString::SiteTitle => self.site_title,
            UiString::SiteSubtitle => self.site_subtitle,
            UiString::SiteDescription => self.site_description,
            UiString::RecommendedSpots => self.recommended_spots,
            UiString::Overview => self.overview,
            UiString::DetailInfo => self.detail_info,
            UiString::Highlights => self.highlights,
            UiString::Access => self.access,
            UiString::ViewOtherSpots => self.view_other_spots,
            UiString::Home => self.home,
            UiString::ViewDetail => self.view_detail,
            UiString::LoadingError => self.loading_error,
            UiString::LoadingNote => self.loading_note,
            UiString::LoadingSpinner => self.loading_spinner,
            UiString::DataLoading => self.data_loading,
        }
    }
}

/// Look up a chrome string, falling back to the base language when the
/// requested table leaves it empty.
pub fn t(key: UiString, language: Language) -> &'static str {
    lookup(
        LanguageStrings::for_language(language),
        LanguageStrings::for_language(Language::BASE),
        key,
    )
}

fn lookup(table: &LanguageStrings, base: &LanguageStrings, key: UiString) -> &'static str {
    match table.field(key) {
        "" => base.field(key),
        value => value,
    }
}

// ==================== Japanese Strings ====================

pub const JAPANESE_STRINGS: LanguageStrings = LanguageStrings {
    site_title: "沖縄ガイドブック",
    site_subtitle: "美ら島の魅力を発見しよう",
    site_description: "沖縄の美しい景色、豊かな文化、そして心温まる体験をご紹介します。",
    recommended_spots: "おすすめスポット",
    overview: "概要",
    detail_info: "詳細情報",
    highlights: "見どころ",
    access: "アクセス",
    view_other_spots: "他のスポットを見る",
    home: "トップページ",
    view_detail: "詳細を見る",
    loading_error: "データの取得に失敗しました",
    loading_note: "沖縄の美しい景色をお待ちください...",
    loading_spinner: "沖縄の風景を読み込み中...",
    data_loading: "データ読み込み中です",
};

// ==================== Traditional Chinese Strings ====================

pub const TRADITIONAL_CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    site_title: "沖繩旅遊指南",
    site_subtitle: "發現美麗島嶼的魅力",
    site_description: "為您介紹沖繩的美麗風景、豐富文化和溫馨體驗。",
    recommended_spots: "推薦景點",
    overview: "概要",
    detail_info: "詳細資訊",
    highlights: "亮點",
    access: "交通",
    view_other_spots: "查看其他景點",
    home: "首頁",
    view_detail: "查看詳情",
    loading_error: "資料獲取失敗",
    loading_note: "請稍候，正在載入沖繩的美麗風景...",
    loading_spinner: "正在載入沖繩風景...",
    data_loading: "正在載入資料",
};

// ==================== Korean Strings ====================

pub const KOREAN_STRINGS: LanguageStrings = LanguageStrings {
    site_title: "오키나와 가이드북",
    site_subtitle: "아름다운 섬의 매력을 발견하세요",
    site_description: "오키나와의 아름다운 풍경, 풍부한 문화, 그리고 따뜻한 경험을 소개합니다.",
    recommended_spots: "추천 명소",
    overview: "개요",
    detail_info: "상세 정보",
    highlights: "하이라이트",
    access: "교통",
    view_other_spots: "다른 명소 보기",
    home: "홈페이지",
    view_detail: "자세히 보기",
    loading_error: "데이터 가져오기 실패",
    loading_note: "오키나와의 아름다운 풍경을 기다려주세요...",
    loading_spinner: "오키나와 풍경 로딩 중...",
    data_loading: "데이터 로딩 중입니다",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    site_title: "Okinawa Guidebook",
    site_subtitle: "Discover the Charm of Beautiful Islands",
    site_description:
        "Introducing the beautiful scenery, rich culture, and heartwarming experiences of Okinawa.",
    recommended_spots: "Recommended Spots",
    overview: "Overview",
    detail_info: "Detailed Information",
    highlights: "Highlights",
    access: "Access",
    view_other_spots: "View Other Spots",
    home: "Home",
    view_detail: "View Details",
    loading_error: "Failed to fetch data",
    loading_note: "Please wait for the beautiful scenery of Okinawa...",
    loading_spinner: "Loading Okinawa scenery...",
    data_loading: "Loading data",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [UiString; 15] = [
        UiString::SiteTitle,
        UiString::SiteSubtitle,
        UiString::SiteDescription,
        UiString::RecommendedSpots,
        UiString::Overview,
        UiString::DetailInfo,
        UiString::Highlights,
        UiString::Access,
        UiString::ViewOtherSpots,
        UiString::Home,
        UiString::ViewDetail,
        UiString::LoadingError,
        UiString::LoadingNote,
        UiString::LoadingSpinner,
        UiString::DataLoading,
    ];

    #[test]
    fn test_base_table_is_complete() {
        for key in ALL_KEYS {
            assert!(!JAPANESE_STRINGS.field(key).is_empty(), "{:?} is empty", key);
        }
    }

    #[test]
    fn test_t_returns_requested_language() {
        assert_eq!(t(UiString::SiteTitle, Language::English), "Okinawa Guidebook");
        assert_eq!(t(UiString::Home, Language::Korean), "홈페이지");
        assert_eq!(t(UiString::Access, Language::TraditionalChinese), "交通");
    }

    #[test]
    fn test_t_falls_back_to_base_for_empty_entry() {
        let sparse = LanguageStrings {
            highlights: "",
            ..ENGLISH_STRINGS
        };
        assert_eq!(
            lookup(&sparse, &JAPANESE_STRINGS, UiString::Highlights),
            "見どころ"
        );
        assert_eq!(
            lookup(&sparse, &JAPANESE_STRINGS, UiString::Access),
            "Access"
        );
    }

    #[test]
    fn test_t_never_empty() {
        for lang in Language::ALL {
            for key in ALL_KEYS {
                assert!(!t(key, lang).is_empty());
            }
        }
    }

    #[test]
    fn test_for_language_distinct_tables() {
        assert_ne!(
            LanguageStrings::for_language(Language::Japanese).site_title,
            LanguageStrings::for_language(Language::English).site_title
        );
    }
}
