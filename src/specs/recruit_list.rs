// src/specs/recruit_list.rs
//! Scraping *spec* for the recruitment listing page.
//!
//! Item shape (one `<li>` under `.recruit_list > ul`):
//! ```text
//! li
//! ├─ a[href="javascript:goView('12345')"]
//! ├─ .cont_top > span*     school, then any of {phone, "등록일 : …", "조회수 …"}
//! ├─ .cont_tit             title text, optional .krds-badge child
//! └─ .cont_btm
//!    ├─ div  p[0] > span = recruit info,  p[1] = "채용인원 …"
//!    ├─ div  p[0] = "접수기간 …",          p[1] = "채용기간 …"
//!    └─ p    "직무분야 …"
//! ```
//!
//! The spans in `.cont_top` are not stable: phone and registration date can be
//! missing and a view counter can appear. Only the school is positional; the
//! rest are classified by label (`classify_span`).

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::*;
use crate::core::Node;
use crate::core::sanitize::{strip_label, strip_label_and_colons};
use crate::error::ExtractError;
use crate::record::{Record, job_field_or_sentinel};

/// What a non-first `.cont_top` span turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopSpan {
    RegisteredDate(String),
    ViewCount,
    Phone(String),
}

pub fn classify_span(text: &str) -> TopSpan {
    if text.contains(LABEL_REG_DATE) {
        TopSpan::RegisteredDate(strip_label_and_colons(text, LABEL_REG_DATE))
    } else if text.contains(LABEL_VIEW_COUNT) {
        TopSpan::ViewCount
    } else {
        TopSpan::Phone(s!(text))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopInfo {
    pub school: String,
    pub phone: String,
    pub registered_date: String,
}

/// School is always the first span; later spans are matched by label.
/// A repeated label overwrites the earlier value.
pub fn read_top_info<N: Node>(item: &N) -> TopInfo {
    let mut info = TopInfo::default();
    let mut spans = item.select_all(TOP_SPAN_SEL).into_iter().map(|n| n.text());

    if let Some(school) = spans.next() {
        info.school = school;
    }
    for text in spans {
        match classify_span(&text) {
            TopSpan::RegisteredDate(d) => info.registered_date = d,
            TopSpan::ViewCount => {}
            TopSpan::Phone(p) => info.phone = p,
        }
    }
    info
}

fn view_call_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"goView\('(\d+)'\)").expect("static regex"))
}

/// `"javascript:goView('12345');"` → `"12345"`; no match → `""`.
pub fn post_id(href: &str) -> String {
    view_call_re()
        .captures(href)
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
        .unwrap_or_default()
}

/// Badge text (or `""`) and the title with the badge text removed.
pub fn split_title<N: Node>(title_node: &N) -> (String, String) {
    let badge = title_node
        .select_one(BADGE_SEL)
        .map(|b| b.text())
        .unwrap_or_default();
    let title = strip_label(&title_node.text(), &badge);
    (title, badge)
}

/// Turn one listing item into a record.
///
/// Fails when a structural node is missing (anchor, title, either detail
/// group or one of their paragraphs, job-field paragraph). Missing optional
/// content (href pattern, phone, date, badge) yields `""`.
pub fn extract_item<N: Node>(item: &N) -> Result<Record, ExtractError> {
    let anchor = require!(item, ANCHOR_SEL);
    let id = anchor.attr(ANCHOR_ATTR).map(|h| post_id(&h)).unwrap_or_default();

    let top = read_top_info(item);

    let title_node = require!(item, TITLE_SEL);
    let (title, badge) = split_title(&title_node);

    let groups = item.select_all(DETAIL_GROUP_SEL);

    let g1 = nth!(groups, 0, "detail group").select_all(PARA_SEL);
    let info_p = nth!(g1, 0, "recruit info paragraph");
    let recruit_info = require!(info_p, SPAN_SEL).text();
    let recruit_count = strip_label(&nth!(g1, 1, "recruit count paragraph").text(), LABEL_RECRUIT_COUNT);

    let g2 = nth!(groups, 1, "detail group").select_all(PARA_SEL);
    let apply_period = strip_label(&nth!(g2, 0, "apply period paragraph").text(), LABEL_APPLY_PERIOD);
    let work_period = strip_label(&nth!(g2, 1, "work period paragraph").text(), LABEL_WORK_PERIOD);

    let job_field = strip_label(&require!(item, JOB_FIELD_SEL).text(), LABEL_JOB_FIELD);

    Ok(Record {
        id,
        school: top.school,
        title,
        badge,
        job_field: job_field_or_sentinel(job_field),
        recruit_info,
        recruit_count,
        apply_period,
        work_period,
        phone: top.phone,
        registered_date: top.registered_date,
    })
}

/// Form submitted to the listing endpoint. The crate never sends it; it is
/// rendered for whatever fetcher produces the pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    pub menu_id: String,
    pub current_page: u32,
    pub exclude_closed: bool,
    pub today_only: bool,
    pub occupation_name: String,
    pub occupation_code: String,
    /// Rows per page. The site calls this `pageIndex`.
    pub page_size: u32,
    /// `reg` = newest registration first.
    pub order_by: String,
    /// `sj` = search in titles.
    pub search_scope: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            menu_id: s!("10502"),
            current_page: 1,
            exclude_closed: true,
            today_only: false,
            occupation_name: s!("기간제/사립교원"),
            occupation_code: s!("A"),
            page_size: DEFAULT_PAGE_SIZE,
            order_by: s!("reg"),
            search_scope: s!("sj"),
        }
    }
}

impl ListingQuery {
    pub fn with_page_size(page_size: u32) -> Self {
        Self { page_size, ..Self::default() }
    }

    pub fn endpoint(&self) -> &'static str { LISTING_URL }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let yn = |b: bool| s!(if b { "Y" } else { "N" });
        vec![
            ("mi", self.menu_id.clone()),
            ("currPage", self.current_page.to_string()),
            ("srchEcptDl", yn(self.exclude_closed)),
            ("srchTodayPb", yn(self.today_only)),
            ("srchOcptNm", self.occupation_name.clone()),
            ("srchOcptCd", self.occupation_code.clone()),
            ("pageIndex", self.page_size.to_string()),
            ("orderbyType", self.order_by.clone()),
            ("searchType", self.search_scope.clone()),
        ]
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.form_fields())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_classified_by_label() {
        assert_eq!(classify_span("등록일 : 2025.02.01"), TopSpan::RegisteredDate(s!("2025.02.01")));
        assert_eq!(classify_span("조회수 : 87"), TopSpan::ViewCount);
        assert_eq!(classify_span("031-123-4567"), TopSpan::Phone(s!("031-123-4567")));
    }

    #[test]
    fn post_id_from_href() {
        assert_eq!(post_id("javascript:goView('20250131');"), "20250131");
        assert_eq!(post_id("#none"), "");
        assert_eq!(post_id("goView(12)"), "");
    }

    #[test]
    fn query_body_encodes_korean() {
        let q = ListingQuery::with_page_size(20);
        let body = q.form_body();
        assert!(body.starts_with("mi=10502&currPage=1&srchEcptDl=Y&srchTodayPb=N&srchOcptNm="));
        assert!(body.contains("pageIndex=20"));
        assert!(body.ends_with("orderbyType=reg&searchType=sj"));
        assert!(!body.contains("기간제"));
        assert_eq!(q.endpoint(), LISTING_URL);
    }
}
