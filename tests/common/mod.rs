// tests/common/mod.rs
//
// Listing-page markup builders shared by the integration tests.
//
#![allow(dead_code)]

use recruit_scrape::Record;

/// One `<li>` the way the listing page renders it.
#[derive(Clone)]
pub struct ItemHtml {
    pub href: String,
    pub top_spans: Vec<String>,
    pub badge: Option<String>,
    pub title: String,
    pub recruit_info: String,
    pub recruit_count: String,
    pub apply_period: String,
    pub work_period: String,
    /// `None` leaves the job-field paragraph out entirely.
    pub job_field: Option<String>,
    /// Render only the first detail group.
    pub one_group: bool,
}

impl ItemHtml {
    pub fn new(id: &str, school: &str) -> Self {
        Self {
            href: format!("javascript:goView('{id}');"),
            top_spans: vec![
                school.to_string(),
                "031-123-4567".to_string(),
                "등록일 : 2025.02.03".to_string(),
                "조회수 : 41".to_string(),
            ],
            badge: Some("진행중".to_string()),
            title: format!("{school} 기간제 교원 채용 공고"),
            recruit_info: "시간강사 | 수원시".to_string(),
            recruit_count: "1명".to_string(),
            apply_period: "2025.02.03 ~ 2025.02.10".to_string(),
            work_period: "2025.03.01 ~ 2026.02.28".to_string(),
            job_field: Some("영어(1)명, 정보-컴퓨터".to_string()),
            one_group: false,
        }
    }

    pub fn spans(mut self, spans: &[&str]) -> Self {
        self.top_spans = spans.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn render(&self) -> String {
        let spans: String = self.top_spans.iter()
            .map(|s| format!("<span>{s}</span>\n"))
            .collect();
        let badge = self.badge.as_ref()
            .map(|b| format!(r#"<span class="krds-badge">{b}</span> "#))
            .unwrap_or_default();
        let group2 = if self.one_group {
            String::new()
        } else {
            format!(
                "<div>\n<p>접수기간 {}</p>\n<p>채용기간 {}</p>\n</div>\n",
                self.apply_period, self.work_period
            )
        };
        let job = self.job_field.as_ref()
            .map(|j| format!("<p>직무분야 {j}</p>\n"))
            .unwrap_or_default();

        format!(
            r#"<li>
<a href="{href}">상세보기</a>
<div class="cont_top">
{spans}</div>
<div class="cont_tit">{badge}{title}</div>
<div class="cont_btm">
<div>
<p><strong>채용정보</strong> <span>{info}</span></p>
<p>채용인원 {count}</p>
</div>
{group2}{job}</div>
</li>
"#,
            href = self.href,
            spans = spans,
            badge = badge,
            title = self.title,
            info = self.recruit_info,
            count = self.recruit_count,
            group2 = group2,
            job = job,
        )
    }
}

pub fn page_html(items: &[ItemHtml]) -> String {
    let body: String = items.iter().map(ItemHtml::render).collect();
    format!(
        r#"<!DOCTYPE html><html><head><title>채용공고</title></head><body>
<div class="recruit_list"><ul>
{body}</ul></div>
</body></html>"#
    )
}

pub fn record(id: &str, school: &str, info: &str, job: &str, badge: &str) -> Record {
    Record {
        id: id.to_string(),
        school: school.to_string(),
        title: format!("{school} 기간제 교원 채용"),
        badge: badge.to_string(),
        job_field: job.to_string(),
        recruit_info: info.to_string(),
        ..Record::default()
    }
}
