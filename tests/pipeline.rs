// tests/pipeline.rs
//
// Per-item failure isolation and ordering, over parsed HTML and over a
// hand-built `Node` double.
//
mod common;

use std::collections::HashMap;

use common::{page_html, ItemHtml};
use recruit_scrape::core::Node;
use recruit_scrape::progress::Progress;
use recruit_scrape::scrape::{self, ItemOutcome};

fn five_items_third_broken() -> Vec<ItemHtml> {
    (1..=5)
        .map(|i| {
            let mut item = ItemHtml::new(&i.to_string(), &format!("학교{i}"));
            if i == 3 { item.one_group = true; }
            item
        })
        .collect()
}

#[test]
fn broken_item_is_skipped_and_order_kept() {
    let harvest = scrape::parse_page(&page_html(&five_items_third_broken()), None);

    let ids: Vec<&str> = harvest.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);
    assert_eq!(harvest.skipped.len(), 1);
    assert_eq!(harvest.skipped[0].item, 2);
    assert_eq!(harvest.skipped[0].page, 0);
}

#[derive(Default)]
struct Counting { begun: usize, done: Vec<usize>, skipped: Vec<usize>, finished: bool }

impl Progress for Counting {
    fn begin(&mut self, total: usize) { self.begun = total; }
    fn item_done(&mut self, index: usize) { self.done.push(index); }
    fn item_skipped(&mut self, index: usize, _reason: &str) { self.skipped.push(index); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_every_item() {
    let mut progress = Counting::default();
    scrape::parse_page(&page_html(&five_items_third_broken()), Some(&mut progress));
    assert_eq!(progress.done, vec![0, 1, 3, 4]);
    assert_eq!(progress.skipped, vec![2]);
}

#[test]
fn pages_are_reassembled_in_order() {
    let pages: Vec<String> = (0..6)
        .map(|p| {
            let items: Vec<ItemHtml> = (0..3)
                .map(|i| ItemHtml::new(&format!("{p}{i}"), "학교"))
                .collect();
            page_html(&items)
        })
        .collect();

    let mut progress = Counting::default();
    let harvest = scrape::collect_pages(pages, 3, Some(&mut progress));

    let ids: Vec<String> = harvest.records.iter().map(|r| r.id.clone()).collect();
    let expected: Vec<String> = (0..6).flat_map(|p| (0..3).map(move |i| format!("{p}{i}"))).collect();
    assert_eq!(ids, expected);
    assert_eq!(progress.begun, 6);
    assert_eq!(progress.done.len(), 6);
    assert!(progress.finished);
}

#[test]
fn skips_carry_their_page_index() {
    let good = page_html(&[ItemHtml::new("a", "x")]);
    let bad = page_html(&five_items_third_broken());
    let harvest = scrape::collect_pages(vec![good, bad], 2, None);
    assert_eq!(harvest.records.len(), 5);
    assert_eq!(harvest.skipped.len(), 1);
    assert_eq!((harvest.skipped[0].page, harvest.skipped[0].item), (1, 2));
}

#[test]
fn no_pages_or_no_items_is_an_empty_corpus() {
    assert!(scrape::collect_pages(Vec::new(), 4, None).records.is_empty());
    let harvest = scrape::parse_page("<html><body><p>점검 중</p></body></html>", None);
    assert!(harvest.records.is_empty());
    assert!(harvest.skipped.is_empty());
}

/* ---------------- Node double ---------------- */

/// Answers selector paths from a lookup table instead of a real document.
#[derive(Clone, Default)]
struct Fake {
    text: String,
    attrs: HashMap<String, String>,
    paths: HashMap<String, Vec<Fake>>,
}

impl Fake {
    fn leaf(t: &str) -> Self { Fake { text: t.into(), ..Fake::default() } }
    fn with(mut self, path: &str, nodes: Vec<Fake>) -> Self {
        self.paths.insert(path.into(), nodes);
        self
    }
    fn with_attr(mut self, k: &str, v: &str) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }
}

impl Node for Fake {
    fn select_one(&self, path: &str) -> Option<Self> {
        self.paths.get(path).and_then(|v| v.first().cloned())
    }
    fn select_all(&self, path: &str) -> Vec<Self> {
        self.paths.get(path).cloned().unwrap_or_default()
    }
    fn attr(&self, name: &str) -> Option<String> { self.attrs.get(name).cloned() }
    fn text(&self) -> String { self.text.clone() }
}

fn fake_item(n: usize, with_title: bool) -> Fake {
    let g1 = Fake::default().with("p", vec![
        Fake::leaf("채용정보 시간강사 | 용인시").with("span", vec![Fake::leaf("시간강사 | 용인시")]),
        Fake::leaf("채용인원 2명"),
    ]);
    let g2 = Fake::default().with("p", vec![
        Fake::leaf("접수기간 2025.01.01 ~ 2025.01.05"),
        Fake::leaf("채용기간 2025.03.01 ~ 2025.07.31"),
    ]);
    let item = Fake::default()
        .with("a", vec![Fake::default().with_attr("href", &format!("javascript:goView('{n}')"))])
        .with(".cont_top > span", vec![Fake::leaf("용인초"), Fake::leaf("등록일 : 2025.01.01")])
        .with(".cont_btm > div", vec![g1, g2])
        .with(".cont_btm > p", vec![Fake::leaf("직무분야 체육")]);
    if with_title {
        item.with(".cont_tit", vec![Fake::leaf("마감 용인초 채용").with(".krds-badge", vec![Fake::leaf("마감")])])
    } else {
        item
    }
}

#[test]
fn pipeline_over_node_double() {
    let items: Vec<Fake> = (1..=5).map(|n| fake_item(n, n != 3)).collect();
    let harvest = scrape::collect_records(items, None);

    let ids: Vec<&str> = harvest.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);

    let r = &harvest.records[0];
    assert_eq!(r.title, "용인초 채용");
    assert_eq!(r.badge, "마감");
    assert_eq!(r.recruit_count, "2명");
    assert_eq!(r.job_field, "체육");
    assert_eq!(r.phone, "");
    assert_eq!(r.registered_date, "2025.01.01");
}

#[test]
fn outcome_names_the_missing_node() {
    match scrape::extract_outcome(&fake_item(9, false)) {
        ItemOutcome::Skipped(e) => assert_eq!(e.to_string(), "missing node `.cont_tit`"),
        ItemOutcome::Extracted(r) => panic!("expected skip, got {r:?}"),
    }
}
