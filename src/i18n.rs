//! Display strings for each interface language.

use crate::domain::values::language::Language;

#[derive(Debug)]
pub struct Texts {
    pub title: &'static str,
    pub sidebar_title: &'static str,
    pub api_info: &'static str,
    pub lbl_lang: &'static str,
    pub lbl_prod: &'static str,
    pub lbl_hs: &'static str,
    pub lbl_country: &'static str,
    pub lbl_cname: &'static str,
    pub btn_run: &'static str,
    pub step_1: &'static str,
    pub step_2: &'static str,
    pub step_3: &'static str,
    pub error_api: &'static str,
    pub warn_mirror: &'static str,
    pub success_data: &'static str,
    pub error_market: &'static str,
    pub error_search: &'static str,
    pub error_ai: &'static str,
    pub no_buyers: &'static str,
    pub metric_volume: &'static str,
    pub metric_unit_price: &'static str,
    pub col_company: &'static str,
    pub col_website: &'static str,
    pub col_email: &'static str,
    pub report_heading: &'static str,
}

static EN: Texts = Texts {
    title: "🌍 Marketing & Sales Tool",
    sidebar_title: "⚙️ System Configuration",
    api_info: "Enter your API Keys to activate the engine.",
    lbl_lang: "Select Output Language",
    lbl_prod: "Product Name (e.g., Hazelnuts)",
    lbl_hs: "HS Code (e.g., 0802)",
    lbl_country: "Target Country Code (ISO 3-digit)",
    lbl_cname: "Target Country Name",
    btn_run: "🚀 SEARCH",
    step_1: "📊 Phase 1: Market Validation (UN Comtrade)",
    step_2: "🏢 Phase 2: Buyer Discovery (Google & Hunter)",
    step_3: "🧠 Phase 3: Strategic AI Report",
    error_api: "❌ CRITICAL: Please enter ALL API keys in the sidebar!",
    warn_mirror: "⚠️ Direct Data unavailable. Switching to 'Mirror Data' logic.",
    success_data: "✅ Market Data Retrieved Successfully",
    error_market: "Comtrade API Error",
    error_search: "Search Error",
    error_ai: "AI Error",
    no_buyers: "No buyers found.",
    metric_volume: "Import Volume",
    metric_unit_price: "Unit Price",
    col_company: "Company",
    col_website: "Website",
    col_email: "Email",
    report_heading: "Strategic Analysis",
};

static TR: Texts = Texts {
    title: "🌍 Pazarlama ve Satış Aracı",
    sidebar_title: "⚙️ Sistem Ayarları",
    api_info: "Motoru aktifleştirmek için API anahtarlarını girin.",
    lbl_lang: "Çıktı Dili Seçiniz",
    lbl_prod: "Ürün Adı (Örn: Fındık)",
    lbl_hs: "GTİP Kodu (Örn: 0802)",
    lbl_country: "Hedef Ülke Kodu (ISO 3-Haneli)",
    lbl_cname: "Hedef Ülke Adı",
    btn_run: "🚀 ARA",
    step_1: "📊 Faz 1: Pazar Doğrulama (BM Comtrade)",
    step_2: "🏢 Faz 2: Alıcı Tespiti (Google & Hunter)",
    step_3: "🧠 Faz 3: Yapay Zeka Strateji Raporu",
    error_api: "❌ KRİTİK HATA: Lütfen yan menüdeki tüm API anahtarlarını giriniz!",
    warn_mirror: "⚠️ Doğrudan veri yok. 'Ayna Verisi' mantığına geçiliyor.",
    success_data: "✅ Pazar Verisi Başarıyla Çekildi",
    error_market: "BM Comtrade API Hatası",
    error_search: "Arama Hatası",
    error_ai: "Yapay Zeka Hatası",
    no_buyers: "Alıcı bulunamadı.",
    metric_volume: "İthalat Hacmi",
    metric_unit_price: "Birim Fiyat",
    col_company: "Şirket",
    col_website: "Web Sitesi",
    col_email: "E-posta",
    report_heading: "Stratejik Analiz",
};

impl Language {
    pub fn texts(&self) -> &'static Texts {
        match self {
            Language::En => &EN,
            Language::Tr => &TR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(Language::En.texts().btn_run, "🚀 SEARCH");
        assert_eq!(Language::Tr.texts().btn_run, "🚀 ARA");
        assert_eq!(Language::Tr.texts().no_buyers, "Alıcı bulunamadı.");
    }
}
