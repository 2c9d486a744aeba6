//! HTML for the form and the result page.

use crate::domain::entities::run_report::{DiscoveryStatus, MarketOutcome, NarrativeOutcome, RunReport};
use crate::domain::values::language::Language;
use crate::domain::values::market_query::MarketQuery;
use crate::i18n::Texts;
use std::fmt::Write;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 320px; padding: 1.5rem; background: #f0f2f6; min-height: 100vh; }
main { flex: 1; padding: 1.5rem 3rem; }
label { display: block; margin-top: .75rem; font-size: .9rem; }
input, select { width: 100%; padding: .4rem; box-sizing: border-box; }
.row { display: flex; gap: 2rem; } .row > div { flex: 1; }
button { margin-top: 1rem; width: 100%; padding: .6rem; background: #ff4b4b; color: #fff; border: 0; font-size: 1rem; }
.notice { padding: .75rem; margin: .75rem 0; border-radius: 4px; }
.error { background: #ffe2e2; } .warning { background: #fff6d6; } .success { background: #dff5e3; } .info { background: #e3efff; }
.metric { display: inline-block; margin-right: 3rem; } .metric b { display: block; font-size: 1.8rem; }
table { border-collapse: collapse; width: 100%; } td, th { border: 1px solid #ddd; padding: .4rem; text-align: left; }
.report { white-space: pre-wrap; }
"#;

fn notice(out: &mut String, kind: &str, text: &str) {
    let _ = write!(out, r#"<div class="notice {kind}">{}</div>"#, escape(text));
}

fn input(out: &mut String, label: &str, name: &str, value: &str, password: bool) {
    let kind = if password { "password" } else { "text" };
    let _ = write!(
        out,
        r#"<label>{}<input type="{kind}" name="{name}" value="{}"></label>"#,
        escape(label),
        escape(value)
    );
}

fn form(out: &mut String, language: Language, query: &MarketQuery) {
    let t = language.texts();
    out.push_str(r#"<form method="post" action="/run"><div class="row"><aside>"#);
    out.push_str("<h3>Language / Dil</h3>");
    let _ = write!(out, r#"<label>{}<select name="language">"#, escape(t.lbl_lang));
    for lang in Language::ALL {
        let selected = if lang == language { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{selected}>{}</option>"#,
            lang.code(),
            lang.native_name()
        );
    }
    out.push_str("</select></label><hr>");
    let _ = write!(out, "<h3>{}</h3>", escape(t.sidebar_title));
    notice(out, "info", t.api_info);
    input(out, "Gemini API Key", "gemini_key", "", true);
    input(out, "UN Comtrade Key", "comtrade_key", "", true);
    input(out, "Google API Key", "google_key", "", true);
    input(out, "Google Search Engine ID (CX)", "google_cx", "", true);
    input(out, "Hunter.io API Key", "hunter_key", "", true);
    out.push_str("</aside><main>");
    let _ = write!(out, "<h1>{}</h1><hr>", escape(t.title));
    out.push_str(r#"<div class="row"><div>"#);
    input(out, t.lbl_prod, "product_name", &query.product_name, false);
    input(out, t.lbl_hs, "hs_code", &query.hs_code, false);
    out.push_str("</div><div>");
    input(out, t.lbl_country, "country_code", &query.country_code, false);
    input(out, t.lbl_cname, "country_name", &query.country_name, false);
    let _ = write!(out, r#"</div></div><button type="submit">{}</button>"#, escape(t.btn_run));
}

fn page(language: Language, query: &MarketQuery, body: impl FnOnce(&mut String, &Texts)) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="{}"><head><meta charset="utf-8"><title>Growmarkt</title><style>{STYLE}</style></head><body>"#,
        language.code()
    );
    form(&mut out, language, query);
    body(&mut out, language.texts());
    out.push_str("</main></div></form></body></html>");
    out
}

/// Empty form, optionally with an error banner under it.
pub fn form_page(language: Language, query: &MarketQuery, error: Option<&str>) -> String {
    page(language, query, |out, _| {
        if let Some(error) = error {
            notice(out, "error", error);
        }
    })
}

/// Form followed by the three phase sections of a finished run.
pub fn result_page(report: &RunReport) -> String {
    page(report.language, &report.query, |out, t| {
        market_section(out, t, &report.market);
        discovery_section(out, t, report);
        narrative_section(out, t, &report.narrative);
    })
}

fn market_section(out: &mut String, t: &Texts, market: &MarketOutcome) {
    let _ = write!(out, "<h2>{}</h2>", escape(t.step_1));
    match market {
        MarketOutcome::Retrieved { stats } => {
            notice(out, "success", t.success_data);
            let _ = write!(
                out,
                r#"<div class="metric">{}<b>{}</b></div><div class="metric">{}<b>{}</b></div>"#,
                escape(t.metric_volume),
                escape(&stats.display_value()),
                escape(t.metric_unit_price),
                escape(&stats.display_unit_price())
            );
        }
        MarketOutcome::MirrorFallback { .. } => notice(out, "warning", t.warn_mirror),
        MarketOutcome::Failed { error } => {
            notice(out, "error", &format!("{}: {error}", t.error_market))
        }
    }
}

fn discovery_section(out: &mut String, t: &Texts, report: &RunReport) {
    let _ = write!(out, "<h2>{}</h2>", escape(t.step_2));
    let discovery = &report.discovery;
    match discovery.status {
        DiscoveryStatus::Found => {
            let _ = write!(
                out,
                "<table><tr><th>{}</th><th>{}</th><th>{}</th></tr>",
                escape(t.col_company),
                escape(t.col_website),
                escape(t.col_email)
            );
            for lead in &discovery.leads {
                let _ = write!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&lead.company_name),
                    escape(&lead.domain),
                    escape(&lead.email)
                );
            }
            out.push_str("</table>");
        }
        DiscoveryStatus::NoneFound => notice(out, "warning", t.no_buyers),
        DiscoveryStatus::Failed => {
            let error = discovery.error.as_deref().unwrap_or_default();
            notice(out, "error", &format!("{}: {error}", t.error_search));
        }
    }
}

fn narrative_section(out: &mut String, t: &Texts, narrative: &NarrativeOutcome) {
    let _ = write!(out, "<h2>{}</h2>", escape(t.step_3));
    match narrative {
        NarrativeOutcome::Generated { report } => {
            let _ = write!(
                out,
                r#"<h3>{}</h3><div class="report">{}</div>"#,
                escape(t.report_heading),
                escape(report)
            );
        }
        NarrativeOutcome::Failed { error } => notice(out, "error", &format!("{}: {error}", t.error_ai)),
    }
}
