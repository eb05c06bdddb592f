// src/cli.rs
use std::{env, fs, path::{Path, PathBuf}};

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::warn;

use crate::{
    config::{consts::DEFAULT_SETTINGS_FILE, options::AppOptions, settings::{self, Settings}},
    data::{self, Corpus, Filter, Posting, SelectionView},
    progress::Progress,
    cache::RootCache,
    scrape, specs::recruit_list::ListingQuery, store,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Extract,
    Roots,
    Facets,
    List,
    Missing,
    Query,
}

impl Command {
    fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            "extract" => Command::Extract,
            "roots" => Command::Roots,
            "facets" => Command::Facets,
            "list" => Command::List,
            "missing" => Command::Missing,
            "query" => Command::Query,
            other => return Err(eyre!("Unknown command: {}", other)),
        })
    }
}

/// Raw command line, before settings are layered in.
#[derive(Debug, Default)]
pub struct Flags {
    pub command: Option<Command>,
    pub help: bool,
    pub config: Option<PathBuf>,
    pub store: Option<String>,
    pub inputs: Vec<PathBuf>,
    pub workers: Option<usize>,
    pub page_size: Option<u32>,
    pub log_file: Option<PathBuf>,
    pub search: Option<String>,
    pub regions: Vec<String>,
    pub subjects: Vec<String>,
    pub badge: Option<String>,
}

pub fn run() -> Result<()> {
    let flags = parse_args(env::args().skip(1))?;
    if flags.help || flags.command.is_none() {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let cfg_path = flags.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let loaded = settings::load(&cfg_path);
    let opts = build_options(&flags, &loaded.settings);
    crate::log::init(opts.log_file.as_deref()).wrap_err("Cannot open log file")?;
    loaded.report();

    match flags.command {
        Some(Command::Extract) => extract(&opts),
        Some(Command::Roots) => roots(&opts),
        Some(Command::Facets) => facets(&opts),
        Some(Command::List) => list(&opts),
        Some(Command::Missing) => missing(&opts),
        Some(Command::Query) => query(&opts),
        None => Ok(()),
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Flags> {
    let mut flags = Flags::default();
    let mut args = args.into_iter();
    let value = |args: &mut I::IntoIter, name: &str| {
        args.next().ok_or_else(|| eyre!("Missing value for {}", name))
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => flags.help = true,
            "--config" => flags.config = Some(PathBuf::from(value(&mut args, "--config")?)),
            "-s" | "--store" | "-o" | "--out" => flags.store = Some(value(&mut args, "--store")?),
            "-i" | "--input" => flags.inputs.push(PathBuf::from(value(&mut args, "--input")?)),
            "--workers" => {
                let v: usize = value(&mut args, "--workers")?.parse().wrap_err("--workers")?;
                flags.workers = Some(v.max(1));
            }
            "--page-size" => {
                flags.page_size = Some(value(&mut args, "--page-size")?.parse().wrap_err("--page-size")?);
            }
            "--log-file" => flags.log_file = Some(PathBuf::from(value(&mut args, "--log-file")?)),
            "--search" => flags.search = Some(value(&mut args, "--search")?),
            "--region" => flags.regions.extend(parse_list(&value(&mut args, "--region")?)),
            "--subject" => flags.subjects.extend(parse_list(&value(&mut args, "--subject")?)),
            "--badge" => flags.badge = Some(value(&mut args, "--badge")?),
            other if other.starts_with('-') => return Err(eyre!("Unknown arg: {}", other)),
            cmd => {
                if flags.command.is_some() {
                    return Err(eyre!("Unexpected argument: {}", cmd));
                }
                flags.command = Some(Command::parse(cmd)?);
            }
        }
    }
    Ok(flags)
}

/// Defaults, then the settings file, then flags.
pub fn build_options(flags: &Flags, settings: &Settings) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.apply_settings(settings);

    if let Some(s) = &flags.store { opts.set_store(s); }
    if !flags.inputs.is_empty() { opts.scrape.inputs = flags.inputs.clone(); }
    if let Some(w) = flags.workers { opts.scrape.workers = w; }
    if let Some(n) = flags.page_size { opts.scrape.page_size = n; }
    if let Some(l) = &flags.log_file { opts.log_file = Some(l.clone()); }

    opts.filter = Filter {
        search: flags.search.clone().unwrap_or_default(),
        regions: flags.regions.clone(),
        subjects: flags.subjects.clone(),
        badge: flags.badge.clone(),
    };
    opts
}

/// `"a, b,,c"` → `["a", "b", "c"]`
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from).collect()
}

/* ---------------- Commands ---------------- */

struct CliProgress { total: usize, done: usize }

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, index: usize) {
        self.done += 1;
        eprintln!("[{}/{}] page {} parsed", self.done, self.total, index + 1);
    }
    fn item_skipped(&mut self, index: usize, reason: &str) {
        eprintln!("  skipped item {}: {}", index + 1, reason);
    }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
}

fn extract(opts: &AppOptions) -> Result<()> {
    if opts.scrape.inputs.is_empty() {
        return Err(eyre!("extract needs at least one -i <page.html>"));
    }
    let pages = opts.scrape.inputs
        .iter()
        .map(|p| fs::read_to_string(p).wrap_err_with(|| format!("Cannot read {}", p.display())))
        .collect::<Result<Vec<_>>>()?;

    let mut progress = CliProgress { total: 0, done: 0 };
    let harvest = scrape::collect_pages(pages, opts.scrape.workers, Some(&mut progress));
    let path = store::save_records(&opts.store, &harvest.records)?;

    println!(
        "Extracted {} records ({} skipped) -> {}",
        harvest.records.len(), harvest.skipped.len(), path.display()
    );
    Ok(())
}

fn load_corpus(path: &Path) -> Option<Corpus> {
    let corpus = Corpus::new(store::load_records(path));
    if corpus.is_empty() {
        eprintln!("No data available ({}).", path.display());
        None
    } else {
        Some(corpus)
    }
}

fn roots(opts: &AppOptions) -> Result<()> {
    let Some(corpus) = load_corpus(&opts.store) else { return Ok(()) };
    let mut cache = RootCache::new();
    for root in cache.roots_for_corpus(&corpus) {
        println!("{root}");
    }
    Ok(())
}

fn facets(opts: &AppOptions) -> Result<()> {
    let Some(corpus) = load_corpus(&opts.store) else { return Ok(()) };
    println!("# regions");
    for r in data::region_choices(corpus.records()) { println!("{r}"); }
    println!("# badges");
    for b in data::badge_choices(corpus.records()) { println!("{b}"); }
    Ok(())
}

fn print_postings(postings: &[Posting<'_>]) {
    for p in postings {
        let r = p.record;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            p.region, r.school, r.title, r.badge, r.job_field, r.apply_period, p.detail_link
        );
    }
}

fn describe(filter: &Filter) -> String {
    let mut parts = Vec::new();
    if !filter.search.is_empty() { parts.push(format!("search: '{}'", filter.search)); }
    if !filter.regions.is_empty() { parts.push(format!("region: {}", filter.regions.join(", "))); }
    if !filter.subjects.is_empty() { parts.push(format!("subject: {}", filter.subjects.join(", "))); }
    if let Some(b) = &filter.badge { parts.push(format!("badge: {b}")); }
    if parts.is_empty() { s!("all postings") } else { parts.join(" / ") }
}

fn list(opts: &AppOptions) -> Result<()> {
    let Some(corpus) = load_corpus(&opts.store) else { return Ok(()) };
    if !opts.filter.subjects.is_empty() {
        let mut cache = RootCache::new();
        let roots = cache.roots_for_corpus(&corpus);
        for s in opts.filter.subjects.iter().filter(|s| !roots.contains(*s)) {
            warn!(subject = %s, "not a root of this corpus; matching by prefix anyway");
        }
    }
    let view = SelectionView::from_filter(&corpus, &opts.filter);
    eprintln!("{}: {} of {} postings", describe(&opts.filter), view.len(), corpus.len());
    print_postings(&view.postings(&opts.detail_base_url));
    Ok(())
}

fn missing(opts: &AppOptions) -> Result<()> {
    let Some(corpus) = load_corpus(&opts.store) else { return Ok(()) };
    let view = SelectionView::missing(&corpus, &opts.filter.search);
    if view.is_empty() {
        eprintln!("No postings with missing region or subject.");
        return Ok(());
    }
    eprintln!("{} postings with missing region or subject", view.len());
    print_postings(&view.postings(&opts.detail_base_url));
    Ok(())
}

fn query(opts: &AppOptions) -> Result<()> {
    let q = ListingQuery::with_page_size(opts.scrape.page_size);
    println!("POST {}", q.endpoint());
    println!("{}", q.form_body());
    Ok(())
}
