// src/config/consts.rs

// Source site
pub const LISTING_URL: &str = "https://www.goe.go.kr/recruit/ad/func/pb/hnfpPbancList.do";
pub const DETAIL_BASE_URL: &str = "https://www.goe.go.kr/recruit/ad/func/pb/hnfpPbancInfoView.do?pbancSn=";
pub const DEFAULT_PAGE_SIZE: u32 = 500;

// Local store
pub const DEFAULT_STORE_FILE: &str = "recruit_list.json";
pub const DEFAULT_SETTINGS_FILE: &str = "recruit_scrape.conf";

// Listing markup
pub const ITEM_SEL: &str = ".recruit_list > ul > li";
pub const ANCHOR_SEL: &str = "a";
pub const ANCHOR_ATTR: &str = "href";
pub const TOP_SPAN_SEL: &str = ".cont_top > span";
pub const TITLE_SEL: &str = ".cont_tit";
pub const BADGE_SEL: &str = ".krds-badge";
pub const DETAIL_GROUP_SEL: &str = ".cont_btm > div";
pub const JOB_FIELD_SEL: &str = ".cont_btm > p";
pub const PARA_SEL: &str = "p";
pub const SPAN_SEL: &str = "span";

// Labels printed in front of values
pub const LABEL_REG_DATE: &str = "등록일";
pub const LABEL_VIEW_COUNT: &str = "조회수";
pub const LABEL_RECRUIT_COUNT: &str = "채용인원";
pub const LABEL_APPLY_PERIOD: &str = "접수기간";
pub const LABEL_WORK_PERIOD: &str = "채용기간";
pub const LABEL_JOB_FIELD: &str = "직무분야";

// Sentinels
pub const NO_CONTENT: &str = "no-content";
pub const REGION_UNSPECIFIED: &str = "region-unspecified";

// Subject tokens
pub const SUBJECT_SEP: char = ',';
pub const HEADCOUNT_MARK: char = '명';
pub const REGION_SEP: char = '|';

// Concurrency
pub const WORKERS: usize = 4;
