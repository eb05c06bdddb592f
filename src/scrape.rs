// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use tracing::{debug, info, warn};

use crate::{
    config::consts::ITEM_SEL,
    core::{ Node, Page },
    error::ExtractError,
    progress::Progress,
    record::Record,
    specs::recruit_list,
};

/// Result of one item at the pipeline boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    Extracted(Record),
    Skipped(ExtractError),
}

pub fn extract_outcome<N: Node>(item: &N) -> ItemOutcome {
    match recruit_list::extract_item(item) {
        Ok(rec) => ItemOutcome::Extracted(rec),
        Err(e) => ItemOutcome::Skipped(e),
    }
}

/// An item that was left out, with where it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skip {
    pub page: usize,
    pub item: usize,
    pub reason: ExtractError,
}

/// Records in source order plus the items that were dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Harvest {
    pub records: Vec<Record>,
    pub skipped: Vec<Skip>,
}

impl Harvest {
    fn append(&mut self, mut other: Harvest) {
        self.records.append(&mut other.records);
        self.skipped.append(&mut other.skipped);
    }
}

/// Run the extractor over `items` in order. A failing item is skipped and
/// logged; it never aborts the run.
pub fn collect_records<N, I>(items: I, mut progress: Option<&mut dyn Progress>) -> Harvest
where
    N: Node,
    I: IntoIterator<Item = N>,
{
    let mut harvest = Harvest::default();
    for (ix, item) in items.into_iter().enumerate() {
        match extract_outcome(&item) {
            ItemOutcome::Extracted(rec) => {
                debug!(item = ix, id = %rec.id, "extracted");
                harvest.records.push(rec);
                if let Some(p) = progress.as_deref_mut() { p.item_done(ix); }
            }
            ItemOutcome::Skipped(reason) => {
                warn!(item = ix, %reason, "skipping item");
                if let Some(p) = progress.as_deref_mut() { p.item_skipped(ix, &reason.to_string()); }
                harvest.skipped.push(Skip { page: 0, item: ix, reason });
            }
        }
    }
    harvest
}

/// Parse one saved listing page and extract all of its items.
pub fn parse_page(html: &str, progress: Option<&mut dyn Progress>) -> Harvest {
    let page = Page::parse(html);
    let items = page.items(ITEM_SEL);
    debug!(items = items.len(), "listing items found");
    collect_records(items, progress)
}

/// Parse several pages on a small worker pool. Output keeps page order, then
/// item order within each page.
pub fn collect_pages(
    pages: Vec<String>,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
) -> Harvest {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let total = pages.len();
    let pages = Arc::new(pages);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(usize, Harvest)>();

    let workers = workers.min(total).max(1);

    for _ in 0..workers {
        let pages = Arc::clone(&pages);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= pages.len() {
                    break;
                }
                let mut harvest = parse_page(&pages[i], None);
                for skip in &mut harvest.skipped {
                    skip.page = i;
                }
                if tx.send((i, harvest)).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut per_page: Vec<Option<Harvest>> = vec![None; total];
    for (i, harvest) in res_rx.iter() {
        if let Some(p) = progress.as_deref_mut() {
            for skip in &harvest.skipped {
                p.item_skipped(skip.item, &format!("page {}: {}", skip.page, skip.reason));
            }
            p.item_done(i);
        }
        per_page[i] = Some(harvest);
    }

    let mut out = Harvest::default();
    for (i, h) in per_page.into_iter().enumerate() {
        match h {
            Some(h) => out.append(h),
            None => warn!(page = i, "worker exited before finishing page"),
        }
    }

    info!(
        pages = total,
        records = out.records.len(),
        skipped = out.skipped.len(),
        "listing pages parsed"
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} records, {} skipped", out.records.len(), out.skipped.len()));
        p.finish();
    }
    out
}
